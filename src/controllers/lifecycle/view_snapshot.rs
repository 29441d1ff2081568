use crate::core::lifecycle::{LifecycleState, Options, SeedHistory};

/// Everything the display shows, derived purely from the lifecycle model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub state: LifecycleState,
    /// "Start", "Pause" or "Resume".
    pub primary_label: &'static str,
    pub download_enabled: bool,
    /// Recent seeds, newest first, one display entry each.
    pub seeds: Vec<String>,
    pub continuous: bool,
    pub post_render: bool,
}

impl ViewSnapshot {
    #[must_use]
    pub fn from_model(state: LifecycleState, options: Options, seeds: &SeedHistory) -> Self {
        Self {
            state,
            primary_label: state.primary_label(),
            download_enabled: state.download_enabled(),
            seeds: seeds.display_texts(),
            continuous: options.continuous,
            post_render: options.post_render,
        }
    }
}
