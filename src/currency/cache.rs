// ============================================================================
// Formatter Cache
// One shared formatter per (currency, locale) pair
// ============================================================================

use super::errors::CurrencyError;
use super::formatter::CurrencyFormatter;
use super::locale::Locale;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

type CacheKey = (String, &'static str);

/// Cache of formatters keyed by currency code and resolved locale tag.
///
/// Owned by whoever needs it (usually a `SplitEngine`); there is no
/// process-wide instance. Safe to share between threads.
#[derive(Debug, Default)]
pub struct FormatterCache {
    formatters: RwLock<HashMap<CacheKey, Arc<CurrencyFormatter>>>,
}

impl FormatterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached formatter, building it on first use.
    ///
    /// Unknown locale tags resolve to `en-US` and share its entry.
    ///
    /// # Errors
    /// Propagates `CurrencyError` from formatter construction; failures are
    /// not cached.
    pub fn get_or_create(
        &self,
        currency: &str,
        locale: Option<&str>,
    ) -> Result<Arc<CurrencyFormatter>, CurrencyError> {
        let key = (currency.to_string(), Locale::resolve(locale).tag);

        if let Some(formatter) = self.formatters.read().get(&key) {
            return Ok(Arc::clone(formatter));
        }

        let mut formatters = self.formatters.write();
        // Another thread may have inserted it between the two locks
        if let Some(formatter) = formatters.get(&key) {
            return Ok(Arc::clone(formatter));
        }

        let formatter = Arc::new(CurrencyFormatter::new(currency, Some(key.1))?);
        formatters.insert(key, Arc::clone(&formatter));
        Ok(formatter)
    }

    pub fn len(&self) -> usize {
        self.formatters.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.read().is_empty()
    }

    pub fn clear(&self) {
        self.formatters.write().clear();
    }
}
