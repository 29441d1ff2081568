pub mod events;
#[allow(clippy::module_inception)]
mod view;

pub use events::ViewEvent;
pub use view::View;
