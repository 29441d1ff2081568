//! Lifecycle controller for the drawing tool's play/pause/stop control.
//!
//! # Architecture
//!
//! - **Input**: method calls from the host's event wiring (see
//!   [`ViewEvent`](crate::controllers::view::ViewEvent))
//! - **Output**: [`ViewPort`] refreshes and the registered handlers
//! - **Core**: the transition table and seed history from `core/lifecycle`

mod controller;
pub mod handlers;
pub mod ports;
pub mod view_snapshot;

pub use controller::LifecycleController;
pub use handlers::Handlers;
pub use ports::{SnapshotViewPort, ViewPort};
pub use view_snapshot::ViewSnapshot;
