// ============================================================================
// Split Engine
// Runs split requests and formats their amounts for one currency/locale
// ============================================================================

use super::errors::{SplitError, SplitResult};
use super::factory::create_allocator;
use crate::currency::{CurrencyError, CurrencyFormatter, FormatterCache, MoneyInput};
use crate::domain::{
    assign_shares, non_zero_participants, Allocation, EngineConfig, ExpenseParticipant, SplitId,
    SplitRequest, UserId,
};
use crate::interfaces::{EventHandler, SplitEvent};
use crate::numeric::MinorUnits;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Split engine with pluggable event handler
pub struct SplitEngine {
    /// Display currency, locale and participant-list options
    config: EngineConfig,

    /// Shared formatter cache (other currencies go through it too)
    formatters: Arc<FormatterCache>,

    /// Formatter for the configured currency and locale
    formatter: Arc<CurrencyFormatter>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,

    /// Number of splits computed successfully
    splits_completed: AtomicU64,
}

impl SplitEngine {
    /// Create a new split engine
    ///
    /// # Errors
    /// Returns `CurrencyError` if the configured currency code is malformed.
    pub fn new(
        config: EngineConfig,
        formatters: Arc<FormatterCache>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<Self, CurrencyError> {
        let formatter = formatters.get_or_create(&config.currency, Some(&config.locale))?;

        Ok(Self {
            config,
            formatters,
            formatter,
            event_handler,
            splits_completed: AtomicU64::new(0),
        })
    }

    /// Compute a split.
    ///
    /// Emits `SplitRequested` followed by `SplitCompleted` or
    /// `SplitRejected` to the event handler.
    pub fn split(&self, request: &SplitRequest) -> SplitResult<Allocation> {
        let split_id = SplitId::new();
        let mut events = vec![SplitEvent::SplitRequested {
            split_id,
            split_type: request.split_type,
            total: request.total,
            participants: request.participant_count(),
            timestamp: Utc::now(),
        }];

        match self.allocate(split_id, request) {
            Ok(allocation) => {
                self.splits_completed.fetch_add(1, Ordering::Relaxed);
                events.push(SplitEvent::SplitCompleted {
                    allocation: allocation.clone(),
                    timestamp: Utc::now(),
                });
                self.event_handler.on_events(events);
                Ok(allocation)
            },
            Err(err) => {
                tracing::warn!(%split_id, split_type = %request.split_type, "Split rejected: {}", err);
                events.push(SplitEvent::SplitRejected {
                    split_id,
                    reason: err.to_string(),
                    timestamp: Utc::now(),
                });
                self.event_handler.on_events(events);
                Err(err)
            },
        }
    }

    fn allocate(&self, split_id: SplitId, request: &SplitRequest) -> SplitResult<Allocation> {
        request.validate()?;

        let allocator = create_allocator(request);
        tracing::trace!(
            %split_id,
            allocator = allocator.name(),
            participants = allocator.participant_count(),
            "Allocating {}",
            request.total
        );

        let shares = allocator.allocate(request.total)?;
        debug_assert!(allocator.is_balanced(request.total, &shares));

        Ok(Allocation::new(
            split_id,
            request.split_type,
            request.total,
            shares,
        ))
    }

    /// Format with the configured currency and locale.
    pub fn format(&self, amount: MinorUnits) -> String {
        self.formatter.format(amount)
    }

    /// Format in another currency, keeping the configured locale.
    ///
    /// # Errors
    /// Returns `InvalidCurrencyCode` for malformed codes.
    pub fn format_in(&self, amount: MinorUnits, currency: &str) -> Result<String, CurrencyError> {
        let formatter = self
            .formatters
            .get_or_create(currency, Some(&self.config.locale))?;
        Ok(formatter.format(amount))
    }

    /// Fail-soft parse of user input; invalid input yields zero.
    pub fn parse<'a>(&self, input: impl Into<MoneyInput<'a>>) -> MinorUnits {
        self.formatter.parse(input)
    }

    /// "off by X" feedback for an exact split that does not add up.
    ///
    /// Returns `None` for any other error.
    pub fn describe_mismatch(&self, err: &SplitError) -> Option<String> {
        match err {
            SplitError::SplitMismatch { discrepancy, .. } => {
                let direction = if discrepancy.is_negative() {
                    "over"
                } else {
                    "remaining"
                };
                // The sign is carried by the direction; MIN has no positive i64
                let formatted = self.formatter.format(*discrepancy);
                let magnitude = formatted.strip_prefix('-').unwrap_or(&formatted);
                Some(format!("off by {} ({})", magnitude, direction))
            },
            _ => None,
        }
    }

    /// Participant rows for an allocation, paired positionally with
    /// `user_ids`. Zero rows are dropped unless the config keeps them.
    pub fn participants(
        &self,
        allocation: &Allocation,
        user_ids: &[UserId],
    ) -> SplitResult<Vec<ExpenseParticipant>> {
        let rows = assign_shares(user_ids, &allocation.shares)?;
        if self.config.drop_zero_participants {
            Ok(non_zero_participants(&rows))
        } else {
            Ok(rows)
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn formatter(&self) -> &CurrencyFormatter {
        &self.formatter
    }

    pub fn formatter_cache(&self) -> &Arc<FormatterCache> {
        &self.formatters
    }

    /// Number of splits computed successfully
    pub fn splits_completed(&self) -> u64 {
        self.splits_completed.load(Ordering::Relaxed)
    }
}
