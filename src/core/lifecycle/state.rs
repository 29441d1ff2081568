/// Which registered handler a transition fires.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransitionHandler {
    Start,
    Pause,
    Resume,
}

/// The outcome of one primary action: where the lifecycle went and which
/// handler slot that fires.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: LifecycleState,
    pub to: LifecycleState,
    pub handler: TransitionHandler,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Init,
    Running,
    Paused,
    Stopped,
}

impl LifecycleState {
    pub const ALL: [LifecycleState; 4] = [
        LifecycleState::Init,
        LifecycleState::Running,
        LifecycleState::Paused,
        LifecycleState::Stopped,
    ];

    /// The transition a primary action takes from this state.
    ///
    /// Stopped restarts through `Start`, exactly like Init.
    #[must_use]
    pub fn primary_transition(self) -> Transition {
        let (to, handler) = match self {
            Self::Init | Self::Stopped => (Self::Running, TransitionHandler::Start),
            Self::Running => (Self::Paused, TransitionHandler::Pause),
            Self::Paused => (Self::Running, TransitionHandler::Resume),
        };

        Transition {
            from: self,
            to,
            handler,
        }
    }

    /// Label for the primary-action control.
    #[must_use]
    pub fn primary_label(self) -> &'static str {
        match self {
            Self::Init | Self::Stopped => "Start",
            Self::Running => "Pause",
            Self::Paused => "Resume",
        }
    }

    #[must_use]
    pub fn download_enabled(self) -> bool {
        matches!(self, Self::Paused | Self::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        let expected = [
            (LifecycleState::Init, LifecycleState::Running, TransitionHandler::Start),
            (LifecycleState::Stopped, LifecycleState::Running, TransitionHandler::Start),
            (LifecycleState::Running, LifecycleState::Paused, TransitionHandler::Pause),
            (LifecycleState::Paused, LifecycleState::Running, TransitionHandler::Resume),
        ];

        for (from, to, handler) in expected {
            assert_eq!(
                from.primary_transition(),
                Transition { from, to, handler }
            );
        }
    }

    #[test]
    fn test_primary_labels() {
        assert_eq!(LifecycleState::Init.primary_label(), "Start");
        assert_eq!(LifecycleState::Stopped.primary_label(), "Start");
        assert_eq!(LifecycleState::Running.primary_label(), "Pause");
        assert_eq!(LifecycleState::Paused.primary_label(), "Resume");
    }

    #[test]
    fn test_download_enabled_only_when_paused_or_stopped() {
        assert!(!LifecycleState::Init.download_enabled());
        assert!(!LifecycleState::Running.download_enabled());
        assert!(LifecycleState::Paused.download_enabled());
        assert!(LifecycleState::Stopped.download_enabled());
    }

    #[test]
    fn test_default_state_is_init() {
        assert_eq!(LifecycleState::default(), LifecycleState::Init);
    }
}
