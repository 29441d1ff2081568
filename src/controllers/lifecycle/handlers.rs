use std::fmt;

use crate::core::lifecycle::TransitionHandler;

pub type Handler = Box<dyn FnMut()>;
pub type SeedHandler = Box<dyn FnMut(&str)>;

/// One optional callback per event kind. Registering replaces the previous
/// handler; firing an empty slot does nothing.
#[derive(Default)]
pub struct Handlers {
    on_start: Option<Handler>,
    on_resume: Option<Handler>,
    on_pause: Option<Handler>,
    on_download: Option<Handler>,
    on_seed_selected: Option<SeedHandler>,
}

impl Handlers {
    pub fn set_on_start(&mut self, handler: impl FnMut() + 'static) {
        self.on_start = Some(Box::new(handler));
    }

    pub fn set_on_resume(&mut self, handler: impl FnMut() + 'static) {
        self.on_resume = Some(Box::new(handler));
    }

    pub fn set_on_pause(&mut self, handler: impl FnMut() + 'static) {
        self.on_pause = Some(Box::new(handler));
    }

    pub fn set_on_download(&mut self, handler: impl FnMut() + 'static) {
        self.on_download = Some(Box::new(handler));
    }

    pub fn set_on_seed_selected(&mut self, handler: impl FnMut(&str) + 'static) {
        self.on_seed_selected = Some(Box::new(handler));
    }

    pub fn fire_transition(&mut self, handler: TransitionHandler) {
        let slot = match handler {
            TransitionHandler::Start => &mut self.on_start,
            TransitionHandler::Pause => &mut self.on_pause,
            TransitionHandler::Resume => &mut self.on_resume,
        };

        if let Some(handler) = slot {
            handler();
        }
    }

    pub fn fire_download(&mut self) {
        if let Some(handler) = &mut self.on_download {
            handler();
        }
    }

    pub fn fire_seed_selected(&mut self, seed_text: &str) {
        if let Some(handler) = &mut self.on_seed_selected {
            handler(seed_text);
        }
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("on_start", &self.on_start.is_some())
            .field("on_resume", &self.on_resume.is_some())
            .field("on_pause", &self.on_pause.is_some())
            .field("on_download", &self.on_download.is_some())
            .field("on_seed_selected", &self.on_seed_selected.is_some())
            .finish()
    }
}
