// ============================================================================
// Engine Configuration
// Display currency, locale and participant-list behaviour of a SplitEngine
// ============================================================================

use crate::currency::{CurrencyCode, CurrencyFormatter, Locale};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for creating a split engine
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// ISO code amounts are formatted in (e.g., "USD", "EUR")
    pub currency: String,

    /// BCP 47 locale tag for grouping and decimal punctuation
    pub locale: String,

    /// Leave participants whose share is zero out of the list sent to
    /// the backend
    pub drop_zero_participants: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(CurrencyCode::USD.as_str().to_string(), Locale::DEFAULT_TAG.to_string())
    }
}

impl EngineConfig {
    /// Create a new configuration with required parameters
    pub fn new(currency: String, locale: String) -> Self {
        Self {
            currency,
            locale,
            drop_zero_participants: true,
        }
    }

    /// Builder method: Set the display currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Builder method: Set the locale
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Builder method: Keep zero-share participants in participant lists
    pub fn keep_zero_participants(mut self) -> Self {
        self.drop_zero_participants = false;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Err(err) = CurrencyFormatter::new(&self.currency, None) {
            return Err(err.to_string());
        }

        // Formatters fall back silently; configuration should not
        if Locale::lookup(&self.locale).is_none() {
            return Err(format!("Unknown locale: {}", self.locale));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl EngineConfig {
    /// US dollars, en-US formatting: `$1,234.50`
    pub fn us_dollar() -> Self {
        Self::new("USD".to_string(), "en-US".to_string())
    }

    /// Euros, German formatting: `1.234,50 €`
    pub fn euro_germany() -> Self {
        Self::new("EUR".to_string(), "de-DE".to_string())
    }

    /// Rupees, Indian grouping: `₹1,23,456.78`
    pub fn rupee_india() -> Self {
        Self::new("INR".to_string(), "en-IN".to_string())
    }
}
