// ============================================================================
// Split Engine Factory
// Creates allocators and split engines with proper configuration
// ============================================================================

use crate::currency::FormatterCache;
use crate::domain::{EngineConfig, ParticipantWeights, SplitRequest};
use crate::engine::{EqualSplit, ExactSplit, PercentageSplit, ShareSplit, SplitEngine};
use crate::interfaces::{EventHandler, SplitAllocator};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates the allocator for a request's weights
///
/// Exact amounts keep the request's split type, so settlements and
/// adjustments are validated like exact splits but recorded as themselves.
pub fn create_allocator(request: &SplitRequest) -> Box<dyn SplitAllocator> {
    match &request.weights {
        ParticipantWeights::Equal(participants) => Box::new(EqualSplit::new(*participants)),
        ParticipantWeights::Percentage(percentages) => {
            Box::new(PercentageSplit::new(percentages.clone()))
        },
        ParticipantWeights::Shares(shares) => Box::new(ShareSplit::new(shares.clone())),
        ParticipantWeights::Exact(amounts) => Box::new(ExactSplit::with_split_type(
            request.split_type,
            amounts.clone(),
        )),
    }
}

/// Creates a split engine from configuration
///
/// # Arguments
/// * `config` - Engine configuration
/// * `event_handler` - Event handler for split events
///
/// # Returns
/// * `Result<SplitEngine, String>` - Configured split engine or error
///
/// # Example
/// ```
/// use split_engine::prelude::*;
/// use split_engine::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = EngineConfig::euro_germany();
/// let engine = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(engine.format(MinorUnits::from_raw(123450)), "1.234,50\u{a0}€");
/// ```
pub fn create_from_config(
    config: EngineConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<SplitEngine, String> {
    create_with_cache(config, Arc::new(FormatterCache::new()), event_handler)
}

fn create_with_cache(
    config: EngineConfig,
    formatters: Arc<FormatterCache>,
    event_handler: Arc<dyn EventHandler>,
) -> Result<SplitEngine, String> {
    // Validate configuration first
    config.validate()?;

    SplitEngine::new(config, formatters, event_handler).map_err(|err| err.to_string())
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating split engines with fluent API
///
/// # Example
/// ```
/// use split_engine::prelude::*;
/// use split_engine::engine::factory::SplitEngineBuilder;
/// use std::sync::Arc;
///
/// let engine = SplitEngineBuilder::new()
///     .currency("GBP")
///     .locale("en-GB")
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(engine.format(MinorUnits::from_raw(-1050)), "-£10.50");
/// ```
pub struct SplitEngineBuilder {
    config: EngineConfig,
    formatters: Option<Arc<FormatterCache>>,
}

impl SplitEngineBuilder {
    /// Create a new builder with USD / en-US defaults
    pub fn new() -> Self {
        Self::from_config(EngineConfig::default())
    }

    fn from_config(config: EngineConfig) -> Self {
        Self {
            config,
            formatters: None,
        }
    }

    // ========================================================================
    // Display Configuration
    // ========================================================================

    /// Set the display currency
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.config.currency = currency.into();
        self
    }

    /// Set the display locale
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = locale.into();
        self
    }

    /// Keep zero-share participants in participant lists
    pub fn keep_zero_participants(mut self) -> Self {
        self.config.drop_zero_participants = false;
        self
    }

    /// Share a formatter cache with other engines
    pub fn with_formatter_cache(mut self, formatters: Arc<FormatterCache>) -> Self {
        self.formatters = Some(formatters);
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    pub fn us_dollar() -> Self {
        Self::from_config(EngineConfig::us_dollar())
    }

    pub fn euro_germany() -> Self {
        Self::from_config(EngineConfig::euro_germany())
    }

    pub fn rupee_india() -> Self {
        Self::from_config(EngineConfig::rupee_india())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the split engine
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<SplitEngine, String> {
        let formatters = self.formatters.unwrap_or_default();
        create_with_cache(self.config, formatters, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for SplitEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
