//! Port definitions for the lifecycle controller.
//!
//! The controller pushes display state out through [`ViewPort`]; it never
//! owns the widgets that show it.

pub mod view_port;

pub use view_port::{SnapshotViewPort, ViewPort};
