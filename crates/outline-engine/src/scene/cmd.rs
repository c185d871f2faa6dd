use crate::scene::shapes::{RectCmd, StrokePathCmd, TextCmd};

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    StrokePath(StrokePathCmd),
    Text(TextCmd),
}
