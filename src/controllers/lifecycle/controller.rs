use tracing::{debug, warn};

use crate::controllers::lifecycle::handlers::Handlers;
use crate::controllers::lifecycle::ports::view_port::ViewPort;
use crate::controllers::lifecycle::view_snapshot::ViewSnapshot;
use crate::core::data::seed::Seed;
use crate::core::lifecycle::{LifecycleState, Options, SeedHistory, Transition};

/// Play/pause/stop lifecycle, user options and recent seeds for one view.
///
/// Every model change is pushed to the [`ViewPort`] before any handler runs,
/// so handlers always see the post-transition display.
pub struct LifecycleController<V: ViewPort> {
    state: LifecycleState,
    options: Options,
    seeds: SeedHistory,
    handlers: Handlers,
    view: V,
}

impl<V: ViewPort> LifecycleController<V> {
    pub fn new(view: V) -> Self {
        let mut controller = Self {
            state: LifecycleState::Init,
            options: Options::default(),
            seeds: SeedHistory::new(),
            handlers: Handlers::default(),
            view,
        };

        controller.init();
        controller
    }

    /// Back to Init with default options and no seeds. Registered handlers
    /// are kept.
    pub fn init(&mut self) {
        self.state = LifecycleState::Init;
        self.options = Options::default();
        self.seeds.clear();
        self.refresh();
    }

    pub fn register_on_start(&mut self, handler: impl FnMut() + 'static) {
        self.handlers.set_on_start(handler);
    }

    pub fn register_on_resume(&mut self, handler: impl FnMut() + 'static) {
        self.handlers.set_on_resume(handler);
    }

    pub fn register_on_pause(&mut self, handler: impl FnMut() + 'static) {
        self.handlers.set_on_pause(handler);
    }

    pub fn register_on_download(&mut self, handler: impl FnMut() + 'static) {
        self.handlers.set_on_download(handler);
    }

    pub fn register_on_seed_selected(&mut self, handler: impl FnMut(&str) + 'static) {
        self.handlers.set_on_seed_selected(handler);
    }

    /// Advances the lifecycle: start, pause or resume depending on the
    /// current state.
    pub fn primary_action(&mut self) -> Transition {
        let transition = self.state.primary_transition();

        self.state = transition.to;
        self.refresh();

        debug!(
            from = ?transition.from,
            to = ?transition.to,
            handler = ?transition.handler,
            "lifecycle transition"
        );

        self.handlers.fire_transition(transition.handler);
        transition
    }

    /// Forces Stopped from any state, e.g. when the run completes or fails.
    pub fn mark_stopped(&mut self) {
        let previous = self.state;

        self.state = LifecycleState::Stopped;
        self.refresh();

        debug!(from = ?previous, "lifecycle stopped");
    }

    // The toggle that produced these calls already shows the new value, so
    // no refresh is pushed.
    pub fn set_continuous(&mut self, continuous: bool) {
        self.options.continuous = continuous;
    }

    pub fn set_post_render(&mut self, post_render: bool) {
        self.options.post_render = post_render;
    }

    #[must_use]
    pub fn is_continuous(&self) -> bool {
        self.options.continuous
    }

    #[must_use]
    pub fn is_post_render(&self) -> bool {
        self.options.post_render
    }

    pub fn add_seed(&mut self, seed: impl Into<Seed>) {
        self.seeds.push(seed.into());
        self.refresh();
    }

    /// Hands the selected entry's text to the seed handler.
    pub fn select_seed(&mut self, seed_text: &str) {
        debug!(seed = seed_text, "seed selected");
        self.handlers.fire_seed_selected(seed_text);
    }

    /// Fires the download handler. Callers are expected to only offer this
    /// while [`ViewSnapshot::download_enabled`] holds.
    pub fn request_download(&mut self) {
        if !self.state.download_enabled() {
            warn!(state = ?self.state, "download requested while disabled");
        }

        self.handlers.fire_download();
    }

    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    #[must_use]
    pub fn seeds(&self) -> &SeedHistory {
        &self.seeds
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::from_model(self.state, self.options, &self.seeds)
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn refresh(&mut self) {
        let snapshot = self.snapshot();
        self.view.refresh(&snapshot);
    }
}
