/// Typed input delivered by whatever hosts the view (a window, a script, a
/// test).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Start, pause or resume depending on the lifecycle state.
    PrimaryAction,
    ContinuousToggled(bool),
    PostRenderToggled(bool),
    /// Carries the selected entry's display text.
    SeedSelected(String),
    DownloadRequested,
    /// The host element changed size.
    HostResized,
}
