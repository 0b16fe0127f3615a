//! Transient pointer/focus state of a pressable control.

/// Flags describing how a control is being interacted with right now.
///
/// `is_active` marks the control bound to the currently active destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub pressed: bool,
    pub hovered: bool,
    pub focused: bool,
    pub is_active: bool,
}

impl InteractionState {
    pub fn active() -> Self {
        Self {
            is_active: true,
            ..Self::default()
        }
    }

    /// Active controls cannot be re-selected.
    pub fn is_disabled(&self) -> bool {
        self.is_active
    }

    /// Hover/focus affordance, suppressed on the active control.
    pub fn shows_focus_ring(&self) -> bool {
        (self.focused || self.hovered) && !self.is_active
    }

    pub fn shows_pressed(&self) -> bool {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_ring_suppressed_when_active() {
        let state = InteractionState {
            hovered: true,
            focused: true,
            ..InteractionState::active()
        };
        assert!(!state.shows_focus_ring());
        assert!(state.is_disabled());
    }

    #[test]
    fn test_focus_ring_on_hover_or_focus() {
        let hovered = InteractionState {
            hovered: true,
            ..Default::default()
        };
        let focused = InteractionState {
            focused: true,
            ..Default::default()
        };
        assert!(hovered.shows_focus_ring());
        assert!(focused.shows_focus_ring());
        assert!(!InteractionState::default().shows_focus_ring());
        assert!(!InteractionState::default().is_disabled());
    }
}
