//! Main GUI application loop.

use std::error::Error;

use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::controllers::sketch::{SketchConfig, SketchDriver};
use crate::controllers::surface::DrawingSurface;
use crate::controllers::view::ViewEvent;
use crate::core::data::colour::Colour;
use crate::core::lifecycle::LifecycleState;
use crate::input::gui::panel::show_panel;
use crate::input::gui::ui_state::UiState;
use crate::presenters::file::ppm::PpmFilePresenter;
use crate::presenters::pixels::presenter::PixelsPresenter;

struct GuiApp {
    driver: SketchDriver<PpmFilePresenter>,
    presenter: PixelsPresenter,
    ui_state: UiState,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        config: SketchConfig,
    ) -> Result<Self, Box<dyn Error>> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let ui_state = UiState::new(config.continuous, config.post_render);

        let mut driver = SketchDriver::new(config, PpmFilePresenter::new())?;
        driver.resize_host(size.width, size.height)?;

        let presenter = PixelsPresenter::new(window, Colour::WHITE)?;

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            driver,
            presenter,
            ui_state,
            egui_ctx,
            egui_state,
        })
    }

    fn is_running(&self) -> bool {
        self.driver.state() == LifecycleState::Running
    }

    /// Runs one egui frame, feeds the panel's events to the driver and
    /// draws the result.
    fn redraw(&mut self, window: &Window) -> Result<(), Box<dyn Error>> {
        self.ui_state
            .update(self.driver.view().controller().view().latest());

        let surface = self.driver.view().surface();
        let canvas_size = (surface.width(), surface.height());

        let raw_input = self.egui_state.take_egui_input(window);
        let mut events: Vec<ViewEvent> = Vec::new();
        let mut egui_output = self.egui_ctx.run(raw_input, |ctx| {
            events = show_panel(ctx, &mut self.ui_state, canvas_size);
        });

        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(window, platform_output);

        if !events.is_empty() {
            window.request_redraw();
        }
        for event in events {
            self.driver.handle_event(event)?;
        }

        self.presenter.render(
            self.driver.view().surface().backend().buffer(),
            egui_output,
            &self.egui_ctx,
        )
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), Box<dyn Error>> {
        self.presenter.resize_surface(width, height)?;

        if width > 0 && height > 0 {
            self.driver.resize_host(width, height)?;
        }

        Ok(())
    }
}

/// Opens a window running the sketch with an egui control panel.
///
/// Does not return until the window is closed.
pub fn run_gui(config: SketchConfig) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Sketch View")
            .with_inner_size(LogicalSize::new(f64::from(config.width), f64::from(config.height)))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = GuiApp::new(window, &event_loop, config)?;
    info!("window opened");

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            let response = app.egui_state.on_window_event(window, event);

            let result = match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                    Ok(())
                }
                WindowEvent::RedrawRequested => app.redraw(window),
                WindowEvent::Resized(size) => {
                    window.request_redraw();
                    app.resize(size.width, size.height)
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                    let size = window.inner_size();
                    window.request_redraw();
                    app.resize(size.width, size.height)
                }
                _ => {
                    if response.repaint {
                        window.request_redraw();
                    }
                    Ok(())
                }
            };

            if let Err(e) = result {
                error!(error = %e, "gui error");
                elwt.exit();
            }
        }
        Event::AboutToWait => match app.driver.tick() {
            Ok(true) => {
                window.request_redraw();
                elwt.set_control_flow(ControlFlow::Poll);
            }
            Ok(false) => {
                if !app.is_running() {
                    elwt.set_control_flow(ControlFlow::Wait);
                }
            }
            Err(e) => {
                error!(error = %e, "sketch error");
                elwt.exit();
            }
        },
        _ => {}
    })?;

    Ok(())
}
