// ============================================================================
// Event Handler Interface
// Defines the contract for observing split computations
// ============================================================================

use crate::domain::{Allocation, SplitId, SplitType};
use crate::numeric::MinorUnits;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the split engine
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SplitEvent {
    /// Split request received
    SplitRequested {
        split_id: SplitId,
        split_type: SplitType,
        total: MinorUnits,
        participants: usize,
        timestamp: DateTime<Utc>,
    },

    /// Split computed, shares add up to the total
    SplitCompleted {
        allocation: Allocation,
        timestamp: DateTime<Utc>,
    },

    /// Split rejected with reason
    SplitRejected {
        split_id: SplitId,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl SplitEvent {
    pub fn split_id(&self) -> SplitId {
        match self {
            SplitEvent::SplitRequested { split_id, .. } => *split_id,
            SplitEvent::SplitCompleted { allocation, .. } => allocation.split_id,
            SplitEvent::SplitRejected { split_id, .. } => *split_id,
        }
    }
}

/// Event handler trait for processing split engine events
/// Implementations can handle logging, auditing, UI notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a split event
    fn on_event(&self, event: SplitEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<SplitEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: SplitEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: SplitEvent) {
        tracing::debug!("Split engine event: {:?}", event);
    }
}
