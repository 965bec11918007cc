// ============================================================================
// Split Engine Library
// Exact minor-unit expense splitting with locale-aware currency display
// ============================================================================

//! # Split Engine
//!
//! Divides a monetary total among participants without losing or inventing
//! a single minor unit.
//!
//! ## Features
//!
//! - **Integer minor units** (`MinorUnits`, always ×100) for every stored amount
//! - **Pluggable split allocators** (Equal, Percentage, Share, Exact)
//! - **Exact conservation**: shares always add up to the total
//! - **Locale-aware formatting** and fail-soft parsing of user input
//! - **Split events** for auditing and UI feedback
//!
//! ## Example
//!
//! ```rust
//! use split_engine::prelude::*;
//! use std::sync::Arc;
//!
//! let engine = SplitEngineBuilder::us_dollar()
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! // Parse what the user typed, split it three ways
//! let total = engine.parse("$10.00");
//! let allocation = engine.split(&SplitRequest::equal(total, 3)).unwrap();
//!
//! let shown: Vec<String> = allocation.shares.iter().map(|s| engine.format(*s)).collect();
//! assert_eq!(shown, ["$3.34", "$3.33", "$3.33"]);
//!
//! // Exact amounts that do not add up report the discrepancy
//! let err = engine
//!     .split(&SplitRequest::exact(total, vec![MinorUnits::from_raw(600), MinorUnits::from_raw(300)]))
//!     .unwrap_err();
//! assert_eq!(engine.describe_mismatch(&err).as_deref(), Some("off by $1.00 (remaining)"));
//! ```

pub mod currency;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::currency::{
        format_currency, parse_currency_input, CurrencyCode, CurrencyFormatter, FormatterCache,
    };
    pub use crate::domain::{
        assign_shares, balance_entries, non_zero_participants, Allocation, BalanceEntry,
        EngineConfig, ExpenseParticipant, ParticipantWeights, SplitId, SplitRequest, SplitType,
        UserId,
    };
    pub use crate::engine::{
        create_allocator, create_from_config, split_by_percentage, split_by_shares, split_equal,
        split_exact, EqualSplit, ExactSplit, PercentageSplit, ShareSplit, SplitEngine,
        SplitEngineBuilder, SplitError, SplitResult,
    };
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, SplitAllocator, SplitEvent,
    };
    pub use crate::numeric::{to_minor_units, MinorUnits};
}
