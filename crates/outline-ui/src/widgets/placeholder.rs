//! Placeholder state machine of the outlined text field.
//!
//! Pure state: it decides *what* should happen to the placeholder on focus
//! and text changes and reports it as a [`Transition`]. The field turns a
//! transition into geometry and animation.

/// What the placeholder does once the field is in use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaceholderBehavior {
    /// Moves into the top border while focused or non-empty.
    #[default]
    Floating,
    /// Stays inline and is hidden while the field has text.
    Hide,
}

/// Where the placeholder label currently sits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaceholderState {
    /// Drawn inside the field; the border is stroked in full.
    #[default]
    Inline,
    /// Seated in a gap cut into the top border.
    Embedded,
}

/// Change the field must apply to its border and label.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Open the gap (`0 → end`) and lift the label.
    Embed { animated: bool },
    /// Close the gap (`end → 0`) and drop the label back inline.
    Release,
    /// Label or outline metrics changed while embedded: move the gap from its
    /// old end to the new one without closing it.
    Resize,
}

#[derive(Debug, Clone, Default)]
pub struct PlaceholderMachine {
    behavior: PlaceholderBehavior,
    state: PlaceholderState,
}

impl PlaceholderMachine {
    pub fn new(behavior: PlaceholderBehavior) -> Self {
        Self { behavior, state: PlaceholderState::Inline }
    }

    #[inline]
    pub fn behavior(&self) -> PlaceholderBehavior {
        self.behavior
    }

    #[inline]
    pub fn state(&self) -> PlaceholderState {
        self.state
    }

    #[inline]
    pub fn is_embedded(&self) -> bool {
        self.state == PlaceholderState::Embedded
    }

    /// Switches behavior. Leaving `Floating` releases an embedded label.
    pub fn set_behavior(&mut self, behavior: PlaceholderBehavior) -> Option<Transition> {
        self.behavior = behavior;
        if behavior == PlaceholderBehavior::Hide && self.is_embedded() {
            return self.go(PlaceholderState::Inline, Transition::Release);
        }
        None
    }

    /// The field became focused. An empty field lifts the label with an
    /// animation; a field that already has text seats it directly.
    pub fn on_focus_gained(&mut self, text_empty: bool) -> Option<Transition> {
        match (self.behavior, self.state) {
            (PlaceholderBehavior::Floating, PlaceholderState::Inline) => {
                self.go(PlaceholderState::Embedded, Transition::Embed { animated: text_empty })
            }
            _ => None,
        }
    }

    /// The field lost focus. The label only drops back when there is no text.
    pub fn on_focus_lost(&mut self, text_empty: bool) -> Option<Transition> {
        match (self.behavior, self.state) {
            (PlaceholderBehavior::Floating, PlaceholderState::Embedded) if text_empty => {
                self.go(PlaceholderState::Inline, Transition::Release)
            }
            _ => None,
        }
    }

    /// The text content changed, by typing or from the host.
    pub fn on_text_changed(&mut self, text_empty: bool, focused: bool) -> Option<Transition> {
        match (self.behavior, self.state) {
            (PlaceholderBehavior::Floating, PlaceholderState::Inline) if !text_empty => {
                self.go(PlaceholderState::Embedded, Transition::Embed { animated: false })
            }
            (PlaceholderBehavior::Floating, PlaceholderState::Embedded) if text_empty && !focused => {
                self.go(PlaceholderState::Inline, Transition::Release)
            }
            _ => None,
        }
    }

    /// Placeholder text, its font, or the corner radius changed.
    pub fn on_metrics_changed(&self) -> Option<Transition> {
        self.is_embedded().then_some(Transition::Resize)
    }

    /// Whether the label is drawn at all.
    pub fn label_visible(&self, text_empty: bool) -> bool {
        match self.behavior {
            PlaceholderBehavior::Floating => true,
            PlaceholderBehavior::Hide => text_empty,
        }
    }

    fn go(&mut self, next: PlaceholderState, transition: Transition) -> Option<Transition> {
        log::debug!("placeholder {:?} -> {:?}", self.state, next);
        self.state = next;
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floating() -> PlaceholderMachine {
        PlaceholderMachine::new(PlaceholderBehavior::Floating)
    }

    #[test]
    fn focus_embeds_with_animation() {
        let mut m = floating();
        assert_eq!(m.on_focus_gained(true), Some(Transition::Embed { animated: true }));
        assert_eq!(m.state(), PlaceholderState::Embedded);
        // Already embedded: nothing more to do.
        assert_eq!(m.on_focus_gained(true), None);
    }

    #[test]
    fn focus_with_text_embeds_without_animation() {
        let mut m = PlaceholderMachine::new(PlaceholderBehavior::Hide);
        m.on_text_changed(false, false);
        m.set_behavior(PlaceholderBehavior::Floating);
        assert_eq!(m.state(), PlaceholderState::Inline);
        assert_eq!(m.on_focus_gained(false), Some(Transition::Embed { animated: false }));
        assert!(m.is_embedded());
    }

    #[test]
    fn blur_with_empty_text_releases() {
        let mut m = floating();
        m.on_focus_gained(true);
        assert_eq!(m.on_focus_lost(true), Some(Transition::Release));
        assert_eq!(m.state(), PlaceholderState::Inline);
    }

    #[test]
    fn blur_with_text_stays_embedded() {
        let mut m = floating();
        m.on_focus_gained(true);
        m.on_text_changed(false, true);
        assert_eq!(m.on_focus_lost(false), None);
        assert_eq!(m.state(), PlaceholderState::Embedded);
    }

    #[test]
    fn host_text_embeds_without_animation() {
        let mut m = floating();
        assert_eq!(m.on_text_changed(false, false), Some(Transition::Embed { animated: false }));
        assert!(m.is_embedded());
    }

    #[test]
    fn clearing_text_while_focused_keeps_label_up() {
        let mut m = floating();
        m.on_focus_gained(true);
        m.on_text_changed(false, true);
        assert_eq!(m.on_text_changed(true, true), None);
        assert!(m.is_embedded());
    }

    #[test]
    fn clearing_text_while_unfocused_releases() {
        let mut m = floating();
        m.on_text_changed(false, false);
        assert_eq!(m.on_text_changed(true, false), Some(Transition::Release));
    }

    #[test]
    fn metrics_change_resizes_only_when_embedded() {
        let mut m = floating();
        assert_eq!(m.on_metrics_changed(), None);
        m.on_focus_gained(true);
        assert_eq!(m.on_metrics_changed(), Some(Transition::Resize));
    }

    #[test]
    fn hide_behavior_never_embeds() {
        let mut m = PlaceholderMachine::new(PlaceholderBehavior::Hide);
        assert_eq!(m.on_focus_gained(true), None);
        assert_eq!(m.on_text_changed(false, true), None);
        assert_eq!(m.state(), PlaceholderState::Inline);
        assert!(m.label_visible(true));
        assert!(!m.label_visible(false));
    }

    #[test]
    fn switching_to_hide_releases() {
        let mut m = floating();
        m.on_focus_gained(true);
        assert_eq!(m.set_behavior(PlaceholderBehavior::Hide), Some(Transition::Release));
        assert!(!m.is_embedded());
    }
}
