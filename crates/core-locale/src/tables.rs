//! Built-in locale and currency data.
//!
//! This is a deliberately small table, not a CLDR replacement: each entry
//! carries only what the amount pipeline needs (separator symbols, grouping
//! sizes, and where a currency symbol sits). Lookups are case-insensitive and
//! accept `_` in place of `-`.
//!
//! Invariants (checked by tests):
//! - `decimal != group` for every entry.
//! - Tags are unique after normalization.
//! - The first entry for a language is that language's fallback.

use serde::{Deserialize, Serialize};

/// Where the currency symbol is placed relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencyPlacement {
    /// `$1,000.00`
    Prefix,
    /// `CHF 1’000.00`
    PrefixSpaced,
    /// `1.000,00 €`
    SuffixSpaced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleData {
    pub tag: &'static str,
    pub decimal: char,
    pub group: char,
    /// Size of the group closest to the decimal point.
    pub primary_grouping: u8,
    /// Size of every further group (2 for Indian-style `12,34,567`).
    pub secondary_grouping: u8,
    /// Extra integer digits required beyond `primary_grouping` before any
    /// grouping is applied (es/pl leave `1000` ungrouped).
    pub min_grouping_digits: u8,
    pub currency_placement: CurrencyPlacement,
}

const NBSP: char = '\u{00A0}';
const NNBSP: char = '\u{202F}';
const RIGHT_QUOTE: char = '\u{2019}';

const fn entry(
    tag: &'static str,
    decimal: char,
    group: char,
    secondary_grouping: u8,
    min_grouping_digits: u8,
    currency_placement: CurrencyPlacement,
) -> LocaleData {
    LocaleData {
        tag,
        decimal,
        group,
        primary_grouping: 3,
        secondary_grouping,
        min_grouping_digits,
        currency_placement,
    }
}

use CurrencyPlacement::{Prefix, PrefixSpaced, SuffixSpaced};

pub static LOCALES: &[LocaleData] = &[
    entry("en-US", '.', ',', 3, 1, Prefix),
    entry("en-GB", '.', ',', 3, 1, Prefix),
    entry("en-IN", '.', ',', 2, 1, Prefix),
    entry("hi-IN", '.', ',', 2, 1, Prefix),
    entry("de-DE", ',', '.', 3, 1, SuffixSpaced),
    entry("de-CH", '.', RIGHT_QUOTE, 3, 1, PrefixSpaced),
    entry("fr-FR", ',', NNBSP, 3, 1, SuffixSpaced),
    entry("fr-CH", ',', NNBSP, 3, 1, SuffixSpaced),
    entry("es-ES", ',', '.', 3, 2, SuffixSpaced),
    entry("it-IT", ',', '.', 3, 1, SuffixSpaced),
    entry("nl-NL", ',', '.', 3, 1, PrefixSpaced),
    entry("pt-BR", ',', '.', 3, 1, PrefixSpaced),
    entry("pl-PL", ',', NBSP, 3, 2, SuffixSpaced),
    entry("sv-SE", ',', NBSP, 3, 1, SuffixSpaced),
    entry("ru-RU", ',', NBSP, 3, 1, SuffixSpaced),
    entry("ja-JP", '.', ',', 3, 1, Prefix),
    entry("zh-CN", '.', ',', 3, 1, Prefix),
];

/// Locale used when neither the tag nor its language is known.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Spacing literal emitted between a spaced currency symbol and the digits.
pub const CURRENCY_SPACING: char = NBSP;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyData {
    pub code: &'static str,
    pub symbol: &'static str,
    /// ISO 4217 minor unit digits.
    pub digits: u8,
}

const fn currency(code: &'static str, symbol: &'static str, digits: u8) -> CurrencyData {
    CurrencyData {
        code,
        symbol,
        digits,
    }
}

pub static CURRENCIES: &[CurrencyData] = &[
    currency("USD", "$", 2),
    currency("EUR", "€", 2),
    currency("GBP", "£", 2),
    currency("JPY", "¥", 0),
    currency("CHF", "CHF", 2),
    currency("INR", "₹", 2),
    currency("CNY", "¥", 2),
    currency("BRL", "R$", 2),
    currency("PLN", "zł", 2),
    currency("SEK", "kr", 2),
    currency("RUB", "₽", 2),
    currency("KWD", "KWD", 3),
    currency("BHD", "BHD", 3),
];

/// How a requested tag was matched against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagMatch {
    Exact,
    Language,
    Default,
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}

/// Resolve a locale tag: exact match, then language-only, then the default.
pub fn lookup_locale(tag: &str) -> (&'static LocaleData, TagMatch) {
    let wanted = normalize_tag(tag);
    if let Some(data) = LOCALES
        .iter()
        .find(|d| d.tag.eq_ignore_ascii_case(&wanted))
    {
        return (data, TagMatch::Exact);
    }
    let language = wanted.split('-').next().unwrap_or_default();
    let by_language = LOCALES.iter().find(|d| {
        !language.is_empty()
            && d.tag
                .split('-')
                .next()
                .is_some_and(|l| l.eq_ignore_ascii_case(language))
    });
    if let Some(data) = by_language {
        return (data, TagMatch::Language);
    }
    (&LOCALES[0], TagMatch::Default)
}

pub fn lookup_currency(code: &str) -> Option<&'static CurrencyData> {
    let code = code.trim();
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}
