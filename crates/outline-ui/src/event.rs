use outline_engine::coords::Vec2;
use outline_engine::input::Key;

pub use outline_engine::input::Modifiers;

/// Input events routed through the widget tree.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Frame boundary; `dt` is the elapsed time in seconds. Drives animations.
    Tick { dt: f32 },
    /// Mouse moved to `pos` (fired every frame).
    Hover { pos: Vec2 },
    /// Primary mouse button pressed and released at `pos`.
    Click { pos: Vec2 },
    /// Committed text input (one or more characters).
    TextInput { text: String },
    /// Named key pressed.
    KeyPress { key: Key, modifiers: Modifiers },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
