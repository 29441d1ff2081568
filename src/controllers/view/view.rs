use crate::controllers::lifecycle::LifecycleController;
use crate::controllers::lifecycle::ports::view_port::ViewPort;
use crate::controllers::surface::canvas_surface::CanvasSurface;
use crate::controllers::surface::drawing_surface::DrawingSurface;
use crate::controllers::surface::ports::canvas_backend::CanvasBackend;
use crate::controllers::view::events::ViewEvent;

/// Owns the lifecycle controller and the drawing surface and routes host
/// events to whichever of the two handles them.
pub struct View<V: ViewPort, B: CanvasBackend> {
    controller: LifecycleController<V>,
    surface: CanvasSurface<B>,
}

impl<V: ViewPort, B: CanvasBackend> View<V, B> {
    pub fn new(view_port: V, backend: B) -> Self {
        Self {
            controller: LifecycleController::new(view_port),
            surface: CanvasSurface::new(backend),
        }
    }

    pub fn handle_event(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::PrimaryAction => {
                self.controller.primary_action();
            }
            ViewEvent::ContinuousToggled(value) => self.controller.set_continuous(value),
            ViewEvent::PostRenderToggled(value) => self.controller.set_post_render(value),
            ViewEvent::SeedSelected(text) => self.controller.select_seed(&text),
            ViewEvent::DownloadRequested => self.controller.request_download(),
            ViewEvent::HostResized => self.surface.notify_resize(),
        }
    }

    #[must_use]
    pub fn controller(&self) -> &LifecycleController<V> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut LifecycleController<V> {
        &mut self.controller
    }

    #[must_use]
    pub fn surface(&self) -> &CanvasSurface<B> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut CanvasSurface<B> {
        &mut self.surface
    }
}
