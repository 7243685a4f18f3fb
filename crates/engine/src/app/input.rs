#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

const ACTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ActionStates {
    down: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }
}

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::MoveUp => 0,
            InputAction::MoveDown => 1,
            InputAction::MoveLeft => 2,
            InputAction::MoveRight => 3,
        }
    }
}

/// Per-tick view of the input devices: level-triggered movement states plus
/// edge-triggered presses that fire for exactly one tick per physical press.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    actions: ActionStates,
    interact_pressed: bool,
    close_pressed: bool,
    focus_next_pressed: bool,
    focus_prev_pressed: bool,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(
        actions: ActionStates,
        interact_pressed: bool,
        close_pressed: bool,
        focus_next_pressed: bool,
        focus_prev_pressed: bool,
    ) -> Self {
        Self {
            actions,
            interact_pressed,
            close_pressed,
            focus_next_pressed,
            focus_prev_pressed,
        }
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub fn interact_pressed(&self) -> bool {
        self.interact_pressed
    }

    pub fn close_pressed(&self) -> bool {
        self.close_pressed
    }

    pub fn focus_next_pressed(&self) -> bool {
        self.focus_next_pressed
    }

    pub fn focus_prev_pressed(&self) -> bool {
        self.focus_prev_pressed
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }

    pub fn with_interact_pressed(mut self, pressed: bool) -> Self {
        self.interact_pressed = pressed;
        self
    }

    pub fn with_close_pressed(mut self, pressed: bool) -> Self {
        self.close_pressed = pressed;
        self
    }

    pub fn with_focus_next_pressed(mut self, pressed: bool) -> Self {
        self.focus_next_pressed = pressed;
        self
    }

    pub fn with_focus_prev_pressed(mut self, pressed: bool) -> Self {
        self.focus_prev_pressed = pressed;
        self
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_round_trips_action_states() {
        let snapshot = InputSnapshot::empty()
            .with_action_down(InputAction::MoveUp, true)
            .with_action_down(InputAction::MoveLeft, true);
        assert!(snapshot.is_down(InputAction::MoveUp));
        assert!(snapshot.is_down(InputAction::MoveLeft));
        assert!(!snapshot.is_down(InputAction::MoveDown));
        assert!(!snapshot.is_down(InputAction::MoveRight));
    }

    #[test]
    fn empty_snapshot_has_no_presses() {
        let snapshot = InputSnapshot::empty();
        assert!(!snapshot.interact_pressed());
        assert!(!snapshot.close_pressed());
        assert!(!snapshot.focus_next_pressed());
        assert!(!snapshot.focus_prev_pressed());
    }
}
