// SPDX-License-Identifier: MPL-2.0
//! Controller lifecycle states.

/// Where the controller is in its start-up sequence.
///
/// `Idle -> Loading -> Initializing -> Ready`, and `Ready -> Loading` on
/// reload. Nothing else is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    Loading,
    Initializing,
    Ready,
}

impl Lifecycle {
    #[must_use]
    pub fn can_transition_to(self, next: Lifecycle) -> bool {
        matches!(
            (self, next),
            (Lifecycle::Idle, Lifecycle::Loading)
                | (Lifecycle::Loading, Lifecycle::Initializing)
                | (Lifecycle::Initializing, Lifecycle::Ready)
                | (Lifecycle::Ready, Lifecycle::Loading)
        )
    }

    #[must_use]
    pub fn is_ready(self) -> bool {
        self == Lifecycle::Ready
    }

    #[must_use]
    pub fn is_loading(self) -> bool {
        self == Lifecycle::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_transitions_are_allowed() {
        assert!(Lifecycle::Idle.can_transition_to(Lifecycle::Loading));
        assert!(Lifecycle::Loading.can_transition_to(Lifecycle::Initializing));
        assert!(Lifecycle::Initializing.can_transition_to(Lifecycle::Ready));
        assert!(Lifecycle::Ready.can_transition_to(Lifecycle::Loading));
    }

    #[test]
    fn skipping_states_is_rejected() {
        assert!(!Lifecycle::Idle.can_transition_to(Lifecycle::Ready));
        assert!(!Lifecycle::Loading.can_transition_to(Lifecycle::Ready));
        assert!(!Lifecycle::Ready.can_transition_to(Lifecycle::Idle));
        assert!(!Lifecycle::Initializing.can_transition_to(Lifecycle::Loading));
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(Lifecycle::default(), Lifecycle::Idle);
        assert!(!Lifecycle::default().is_ready());
    }
}
