// ============================================================================
// Locale Conventions
// Digit grouping, decimal mark and symbol placement per locale
// ============================================================================

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

/// How integer digits are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Thousands: 1,234,567
    Standard,
    /// Lakh/crore: 12,34,567
    Indian,
}

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1.00`
    Prefix,
    /// `R$ 1,00`
    PrefixSpaced,
    /// `1,00 €`
    SuffixSpaced,
}

/// Number formatting conventions of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47 tag, e.g. "de-DE"
    pub tag: &'static str,
    pub group_separator: &'static str,
    pub decimal_separator: &'static str,
    pub grouping: Grouping,
    /// Integer digits needed before grouping kicks in is `3 + this`
    pub min_grouping_digits: usize,
    pub symbol_placement: SymbolPlacement,
}

impl Locale {
    /// Tag used when none is given or the requested one is unknown
    pub const DEFAULT_TAG: &'static str = "en-US";

    const fn new(
        tag: &'static str,
        group_separator: &'static str,
        decimal_separator: &'static str,
        symbol_placement: SymbolPlacement,
    ) -> Self {
        Self {
            tag,
            group_separator,
            decimal_separator,
            grouping: Grouping::Standard,
            min_grouping_digits: 1,
            symbol_placement,
        }
    }

    /// Exact lookup of a known tag.
    pub fn lookup(tag: &str) -> Option<Locale> {
        LOCALES.iter().copied().find(|l| l.tag == tag)
    }

    /// Resolve an optional tag, falling back to `en-US`.
    pub fn resolve(tag: Option<&str>) -> Locale {
        tag.and_then(Self::lookup).unwrap_or(LOCALES[0])
    }

    /// Insert group separators into a string of ASCII digits.
    pub fn group_digits(&self, digits: &str) -> String {
        if digits.len() < 3 + self.min_grouping_digits {
            return digits.to_string();
        }

        let tail = match self.grouping {
            Grouping::Standard => 3,
            Grouping::Indian => 2,
        };

        let mut groups = Vec::new();
        let mut end = digits.len();
        groups.push(&digits[end - 3..end]);
        end -= 3;
        while end > tail {
            groups.push(&digits[end - tail..end]);
            end -= tail;
        }
        groups.push(&digits[..end]);
        groups.reverse();
        groups.join(self.group_separator)
    }

    /// Attach the currency symbol to an already formatted number.
    pub(crate) fn place_symbol(&self, number: &str, symbol: &str) -> String {
        match self.symbol_placement {
            SymbolPlacement::Prefix => format!("{}{}", symbol, number),
            SymbolPlacement::PrefixSpaced => format!("{}{}{}", symbol, NBSP, number),
            SymbolPlacement::SuffixSpaced => format!("{}{}{}", number, NBSP, symbol),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        LOCALES[0]
    }
}

/// Known locales; the first entry is the default.
static LOCALES: [Locale; 12] = [
    Locale::new("en-US", ",", ".", SymbolPlacement::Prefix),
    Locale::new("en-GB", ",", ".", SymbolPlacement::Prefix),
    Locale {
        grouping: Grouping::Indian,
        ..Locale::new("en-IN", ",", ".", SymbolPlacement::Prefix)
    },
    Locale::new("de-DE", ".", ",", SymbolPlacement::SuffixSpaced),
    Locale::new("de-CH", "\u{2019}", ".", SymbolPlacement::PrefixSpaced),
    Locale::new("fr-FR", NARROW_NBSP, ",", SymbolPlacement::SuffixSpaced),
    Locale {
        min_grouping_digits: 2,
        ..Locale::new("es-ES", ".", ",", SymbolPlacement::SuffixSpaced)
    },
    Locale::new("it-IT", ".", ",", SymbolPlacement::SuffixSpaced),
    Locale::new("nl-NL", ".", ",", SymbolPlacement::PrefixSpaced),
    Locale::new("pt-BR", ".", ",", SymbolPlacement::PrefixSpaced),
    Locale::new("sv-SE", NBSP, ",", SymbolPlacement::SuffixSpaced),
    Locale::new("ja-JP", ",", ".", SymbolPlacement::Prefix),
];
