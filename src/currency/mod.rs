// ============================================================================
// Currency Module
// Locale-aware formatting and fail-soft parsing of minor-unit amounts
// ============================================================================

mod cache;
mod code;
mod errors;
mod formatter;
mod locale;

pub use cache::FormatterCache;
pub use code::{currency_symbol, is_currency_code, CurrencyCode, CURRENCIES};
pub use errors::CurrencyError;
pub use formatter::{format_currency, parse_currency_input, CurrencyFormatter, MoneyInput};
pub use locale::{Grouping, Locale, SymbolPlacement};
