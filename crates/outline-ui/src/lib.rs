//! Outline UI — retained widget tree on top of `outline-engine`.
//!
//! Hosts own the root [`Element`] and a [`UiScene`]; each frame they feed a
//! [`UiInput`] snapshot and hand the resulting draw list to their renderer.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use outline_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let font = scene.load_font(include_bytes!("my_font.ttf"))?;
//!
//! let mut root: Element = OutlinedTextField::new()
//!     .font(font)
//!     .placeholder("Email")
//!     .on_submit(|v| println!("submitted: {v}"))
//!     .into();
//!
//! // In your frame callback:
//! let input = UiInput { dt, mouse_pos, mouse_clicked, ..Default::default() };
//! let draw_list = scene.frame(&mut root, viewport, &input);
//! // Pass draw_list to your renderer.
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`] for any type, then use it anywhere an [`Element`] is accepted.

pub mod constraints;
pub mod event;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

pub use scene::{UiInput, UiScene};
pub use widget::{Element, Widget};

/// Everything you need to build and extend UI — import this in your component files.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, Modifiers, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{OutlineStyle, OutlinedTextField, PlaceholderBehavior, PlaceholderState};

    // Re-export the engine primitives everyone needs.
    pub use outline_engine::coords::{Rect, Vec2};
    pub use outline_engine::input::Key;
    pub use outline_engine::paint::Color;
    pub use outline_engine::path::GapFraction;
    pub use outline_engine::text::FontId;
    pub use outline_engine::time::{AnimationSpec, Easing};
}
