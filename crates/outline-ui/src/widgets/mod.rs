pub mod outlined_text_field;
pub mod placeholder;
pub mod style;

pub use outlined_text_field::OutlinedTextField;
pub use placeholder::{PlaceholderBehavior, PlaceholderMachine, PlaceholderState, Transition};
pub use style::OutlineStyle;
