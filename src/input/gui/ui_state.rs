use crate::controllers::lifecycle::ViewSnapshot;
use crate::controllers::view::ViewEvent;

/// What the panel shows. Button label, download enablement and seed links
/// come from the last snapshot pushed by the controller; the two checkboxes
/// own their values, like form inputs do.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub continuous: bool,
    pub post_render: bool,
    snapshot: Option<ViewSnapshot>,
}

impl UiState {
    #[must_use]
    pub fn new(continuous: bool, post_render: bool) -> Self {
        Self {
            continuous,
            post_render,
            snapshot: None,
        }
    }

    pub fn update(&mut self, snapshot: Option<&ViewSnapshot>) {
        self.snapshot = snapshot.cloned();
    }

    #[must_use]
    pub fn primary_label(&self) -> &'static str {
        self.snapshot.as_ref().map_or("Start", |s| s.primary_label)
    }

    #[must_use]
    pub fn download_enabled(&self) -> bool {
        self.snapshot.as_ref().is_some_and(|s| s.download_enabled)
    }

    #[must_use]
    pub fn seeds(&self) -> &[String] {
        self.snapshot
            .as_ref()
            .map(|s| s.seeds.as_slice())
            .unwrap_or_default()
    }

    /// Events for the checkboxes whose value differs from `before`.
    #[must_use]
    pub fn toggle_events(&self, before: &UiState) -> Vec<ViewEvent> {
        let mut events = Vec::new();

        if self.continuous != before.continuous {
            events.push(ViewEvent::ContinuousToggled(self.continuous));
        }
        if self.post_render != before.post_render {
            events.push(ViewEvent::PostRenderToggled(self.post_render));
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lifecycle::{LifecycleState, Options, SeedHistory};

    #[test]
    fn test_defaults_before_first_snapshot() {
        let state = UiState::new(true, false);

        assert_eq!(state.primary_label(), "Start");
        assert!(!state.download_enabled());
        assert!(state.seeds().is_empty());
    }

    #[test]
    fn test_reflects_pushed_snapshot() {
        let mut seeds = SeedHistory::default();
        seeds.push("3".into());
        let snapshot =
            ViewSnapshot::from_model(LifecycleState::Paused, Options::default(), &seeds);
        let mut state = UiState::new(true, false);

        state.update(Some(&snapshot));

        assert_eq!(state.primary_label(), "Resume");
        assert!(state.download_enabled());
        assert_eq!(state.seeds(), ["3".to_string()]);
    }

    #[test]
    fn test_toggle_events_only_for_changed_boxes() {
        let before = UiState::new(true, false);
        let mut after = before.clone();
        after.post_render = true;

        assert_eq!(
            after.toggle_events(&before),
            vec![ViewEvent::PostRenderToggled(true)]
        );
        assert!(before.toggle_events(&before).is_empty());
    }

    #[test]
    fn test_toggle_events_list_continuous_first() {
        let before = UiState::new(true, false);
        let after = UiState::new(false, true);

        assert_eq!(
            after.toggle_events(&before),
            vec![
                ViewEvent::ContinuousToggled(false),
                ViewEvent::PostRenderToggled(true),
            ]
        );
    }
}
