use std::cell::RefCell;
use std::collections::VecDeque;
use std::error::Error;
use std::path::PathBuf;
use std::rc::Rc;

use tracing::{debug, info};

use crate::controllers::lifecycle::ports::view_port::SnapshotViewPort;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::sketch::config::{SketchConfig, SketchConfigError};
use crate::controllers::sketch::rosette::RosetteSketch;
use crate::controllers::surface::drawing_surface::DrawingSurface;
use crate::controllers::view::{View, ViewEvent};
use crate::core::data::seed::Seed;
use crate::core::lifecycle::LifecycleState;
use crate::presenters::raster::canvas::RasterCanvas;

/// What a handler asked the driver to do once the event has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SketchCommand {
    Start,
    Pause,
    Resume,
    Download,
    Replay(String),
}

type CommandQueue = Rc<RefCell<VecDeque<SketchCommand>>>;

/// The generative side of the tool: reacts to lifecycle callbacks and draws
/// the rosette through the view's surface.
///
/// Handlers only enqueue commands; the queue is drained after each event so
/// the view is never re-entered from inside one of its own callbacks.
pub struct SketchDriver<P: FilePresenterPort> {
    view: View<SnapshotViewPort, RasterCanvas>,
    commands: CommandQueue,
    config: SketchConfig,
    presenter: P,
    sketch: Option<RosetteSketch>,
    next_seed: u64,
    pending_seed: Option<Seed>,
    runs_started: usize,
    frames_drawn: usize,
    downloads: Vec<PathBuf>,
}

impl<P: FilePresenterPort> SketchDriver<P> {
    pub fn new(config: SketchConfig, presenter: P) -> Result<Self, SketchConfigError> {
        config.validate()?;

        let mut view = View::new(
            SnapshotViewPort::new(),
            RasterCanvas::new(config.width, config.height),
        );
        let commands: CommandQueue = Rc::default();

        let controller = view.controller_mut();
        let queue = Rc::clone(&commands);
        controller.register_on_start(move || queue.borrow_mut().push_back(SketchCommand::Start));
        let queue = Rc::clone(&commands);
        controller.register_on_pause(move || queue.borrow_mut().push_back(SketchCommand::Pause));
        let queue = Rc::clone(&commands);
        controller.register_on_resume(move || queue.borrow_mut().push_back(SketchCommand::Resume));
        let queue = Rc::clone(&commands);
        controller
            .register_on_download(move || queue.borrow_mut().push_back(SketchCommand::Download));
        let queue = Rc::clone(&commands);
        controller.register_on_seed_selected(move |seed| {
            queue
                .borrow_mut()
                .push_back(SketchCommand::Replay(seed.to_string()))
        });

        view.handle_event(ViewEvent::ContinuousToggled(config.continuous));
        view.handle_event(ViewEvent::PostRenderToggled(config.post_render));

        Ok(Self {
            view,
            commands,
            next_seed: config.first_seed,
            config,
            presenter,
            sketch: None,
            pending_seed: None,
            runs_started: 0,
            frames_drawn: 0,
            downloads: Vec::new(),
        })
    }

    pub fn handle_event(&mut self, event: ViewEvent) -> Result<(), Box<dyn Error>> {
        self.view.handle_event(event);
        self.run_commands()
    }

    /// The host element now measures `width x height`.
    pub fn resize_host(&mut self, width: u32, height: u32) -> Result<(), Box<dyn Error>> {
        self.view
            .surface_mut()
            .backend_mut()
            .set_client_size(width, height);
        self.handle_event(ViewEvent::HostResized)
    }

    /// Draws one frame if a run is in progress. Returns whether anything was
    /// drawn.
    pub fn tick(&mut self) -> Result<bool, Box<dyn Error>> {
        if self.view.controller().state() != LifecycleState::Running {
            return Ok(false);
        }

        let Some(sketch) = self.sketch.as_mut() else {
            return Ok(false);
        };

        sketch.draw_frame(
            self.view.surface_mut(),
            self.config.strokes_per_frame,
            self.config.brush_width,
            self.config.gradient,
        );
        self.frames_drawn += 1;

        if sketch.is_finished() {
            self.finish_run()?;
        }

        Ok(true)
    }

    #[must_use]
    pub fn view(&self) -> &View<SnapshotViewPort, RasterCanvas> {
        &self.view
    }

    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.view.controller().state()
    }

    #[must_use]
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    #[must_use]
    pub fn current_seed(&self) -> Option<&Seed> {
        self.sketch.as_ref().map(RosetteSketch::seed)
    }

    #[must_use]
    pub fn runs_started(&self) -> usize {
        self.runs_started
    }

    #[must_use]
    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }

    #[must_use]
    pub fn downloads(&self) -> &[PathBuf] {
        &self.downloads
    }

    fn run_commands(&mut self) -> Result<(), Box<dyn Error>> {
        loop {
            let Some(command) = self.commands.borrow_mut().pop_front() else {
                return Ok(());
            };

            match command {
                SketchCommand::Start => self.begin_run(),
                SketchCommand::Pause | SketchCommand::Resume => {
                    debug!(?command, seed = ?self.current_seed(), "run toggled");
                }
                SketchCommand::Download => self.download()?,
                SketchCommand::Replay(text) => {
                    self.pending_seed = Some(Seed::from(text));
                    let controller = self.view.controller_mut();
                    controller.mark_stopped();
                    controller.primary_action();
                }
            }
        }
    }

    fn begin_run(&mut self) {
        let seed = self.pending_seed.take().unwrap_or_else(|| {
            let seed = Seed::from(self.next_seed);
            self.next_seed = self.next_seed.wrapping_add(1);
            seed
        });

        self.view.controller_mut().add_seed(seed.clone());
        self.view.surface_mut().clear();
        self.runs_started += 1;

        info!(
            %seed,
            run = self.runs_started,
            width = self.view.surface().width(),
            height = self.view.surface().height(),
            "run started"
        );

        self.sketch = Some(RosetteSketch::new(seed, self.config.steps_per_run));
    }

    fn finish_run(&mut self) -> Result<(), Box<dyn Error>> {
        if self.view.controller().is_post_render()
            && let Some(sketch) = &self.sketch
        {
            sketch.draw_outline(self.view.surface_mut());
        }

        self.view.controller_mut().mark_stopped();
        info!(seed = ?self.current_seed().map(Seed::as_str), "run finished");

        let more_runs_allowed = self
            .config
            .max_runs
            .is_none_or(|max| self.runs_started < max);

        if self.view.controller().is_continuous() && more_runs_allowed {
            self.view.controller_mut().primary_action();
            self.run_commands()?;
        }

        Ok(())
    }

    fn download(&mut self) -> Result<(), Box<dyn Error>> {
        let name = self
            .current_seed()
            .map_or_else(|| "blank".to_string(), file_stem);
        let path = self
            .config
            .output_dir
            .join(format!("sketch-{}-{}.ppm", name, self.downloads.len() + 1));

        self.presenter
            .present(self.view.surface().backend().buffer(), &path)?;
        info!(path = %path.display(), "drawing downloaded");

        self.downloads.push(path);
        Ok(())
    }
}

/// Seed text reduced to characters that are safe in a file name. Seeds come
/// from user-selected text, so separators and dots are replaced.
fn file_stem(seed: &Seed) -> String {
    let stem: String = seed
        .as_str()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() {
        format!("{:016x}", seed.hash64())
    } else {
        stem
    }
}
