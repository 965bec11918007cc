// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod split_allocator;

pub use event_handler::{EventHandler, LoggingEventHandler, NoOpEventHandler, SplitEvent};
pub use split_allocator::SplitAllocator;
