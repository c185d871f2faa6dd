//! Input vocabulary shared with the UI layer.
//!
//! Platform translation lives in the host; this module only names keys.

mod types;

pub use types::{Key, Modifiers};
