mod rect;
mod stroke_path;
mod text;

pub use rect::RectCmd;
pub use stroke_path::StrokePathCmd;
pub use text::TextCmd;
