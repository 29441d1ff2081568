pub mod options;
pub mod seed_history;
pub mod state;

pub use options::Options;
pub use seed_history::{MAX_SEEDS, SeedHistory};
pub use state::{LifecycleState, Transition, TransitionHandler};
