//! Pointer interaction state of a paint session.
//!
//! ```text
//! ┌──────────┐  pointer down   ┌────────────┐
//! │          ├─────────────────►            │
//! │   Idle   │                 │  Dragging  │
//! │          ◄─────────────────┤            │
//! └──────────┘   pointer up    └────────────┘
//! ```
//!
//! A modifier-held pointer down runs a fill and stays in `Idle`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No button held over the canvas
    #[default]
    Idle,
    /// Primary button held; moves paint cells
    Dragging,
}

impl SessionState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, new_state: SessionState) -> bool {
        matches!(
            (self, new_state),
            (SessionState::Idle, SessionState::Dragging) | (SessionState::Dragging, SessionState::Idle)
        )
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, SessionState::Dragging)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "Idle",
            SessionState::Dragging => "Dragging",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_idle_dragging_transitions_allowed() {
        assert!(SessionState::Idle.can_transition_to(SessionState::Dragging));
        assert!(SessionState::Dragging.can_transition_to(SessionState::Idle));
        assert!(!SessionState::Idle.can_transition_to(SessionState::Idle));
        assert!(!SessionState::Dragging.can_transition_to(SessionState::Dragging));
    }
}
