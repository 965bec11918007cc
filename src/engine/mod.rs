// ============================================================================
// Engine Module
// Split allocators and the engine that runs them
// ============================================================================

mod equal;
mod errors;
mod exact;
mod percentage;
mod residual;
mod shares;
mod split_engine;

pub mod factory;

pub use equal::{split_equal, EqualSplit};
pub use errors::{SplitError, SplitResult};
pub use exact::{split_exact, ExactSplit};
pub use factory::{create_allocator, create_from_config, SplitEngineBuilder};
pub use percentage::{split_by_percentage, PercentageSplit};
pub use shares::{split_by_shares, ShareSplit};
pub use split_engine::SplitEngine;
