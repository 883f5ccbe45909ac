//! Locale descriptors for amount formatting.
//!
//! A `LocaleFormat` is an immutable, caller-owned description of how numbers
//! are written for one locale (separator symbols, grouping, fraction digits,
//! optional currency). It is passed explicitly to every formatting function;
//! nothing in this crate keeps a process-wide "current locale".
//!
//! Separators are never read straight out of the table by callers. They are
//! derived by formatting probe numbers and inspecting the typed parts
//! (`separators::SeparatorSet::resolve`), so overrides and option changes
//! flow through the same path the display formatter uses.

pub mod number;
pub mod separators;
pub mod tables;

pub use number::{NumberFormatter, NumberPart, PartKind};
pub use separators::{SeparatorSet, currency_symbol};
pub use tables::CurrencyPlacement;

use serde::{Deserialize, Serialize};
use tables::{TagMatch, lookup_currency, lookup_locale};
use thiserror::Error;
use tracing::debug;

/// Fraction digits used when neither the options nor a currency decide.
pub const DEFAULT_FRACTION_DIGITS: u8 = 2;
/// Upper bound accepted for `maximum_fraction_digits`.
pub const MAX_FRACTION_DIGITS: u8 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("unknown currency code `{0}`")]
    UnknownCurrency(String),
    #[error("maximum fraction digits {0} exceeds the supported limit of {MAX_FRACTION_DIGITS}")]
    FractionDigits(u8),
    #[error("decimal and group separators are both `{0}`")]
    SeparatorCollision(char),
    #[error("separator `{0}` is a digit")]
    DigitSeparator(char),
}

/// Serializable request for a `LocaleFormat`. Unset fields resolve from the
/// locale and currency tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleOptions {
    #[serde(default = "LocaleOptions::default_locale")]
    pub locale: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub maximum_fraction_digits: Option<u8>,
    #[serde(default = "LocaleOptions::default_use_grouping")]
    pub use_grouping: bool,
    #[serde(default)]
    pub decimal_symbol: Option<char>,
    #[serde(default)]
    pub group_symbol: Option<char>,
}

impl Default for LocaleOptions {
    fn default() -> Self {
        Self::new(tables::DEFAULT_LOCALE)
    }
}

impl LocaleOptions {
    fn default_locale() -> String {
        tables::DEFAULT_LOCALE.to_string()
    }
    const fn default_use_grouping() -> bool {
        true
    }

    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            currency: None,
            maximum_fraction_digits: None,
            use_grouping: true,
            decimal_symbol: None,
            group_symbol: None,
        }
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = Some(code.into());
        self
    }

    pub fn maximum_fraction_digits(mut self, digits: u8) -> Self {
        self.maximum_fraction_digits = Some(digits);
        self
    }

    pub fn use_grouping(mut self, on: bool) -> Self {
        self.use_grouping = on;
        self
    }

    pub fn decimal_symbol(mut self, c: char) -> Self {
        self.decimal_symbol = Some(c);
        self
    }

    pub fn group_symbol(mut self, c: char) -> Self {
        self.group_symbol = Some(c);
        self
    }

    /// Resolve the options against the built-in tables.
    ///
    /// Unknown locale tags fall back (language, then `en-US`) and are only
    /// logged; unknown currencies, out-of-range fraction digits and colliding
    /// symbol overrides are configuration errors.
    pub fn build(self) -> Result<LocaleFormat, LocaleError> {
        let (data, matched) = lookup_locale(&self.locale);
        if matched != TagMatch::Exact {
            debug!(
                target: "locale.resolve",
                requested = self.locale.as_str(),
                resolved = data.tag,
                ?matched,
                "locale_fallback"
            );
        }
        let currency = match self.currency.as_deref() {
            Some(code) => Some(
                lookup_currency(code).ok_or_else(|| LocaleError::UnknownCurrency(code.into()))?,
            ),
            None => None,
        };
        let maximum_fraction_digits = self
            .maximum_fraction_digits
            .or(currency.map(|c| c.digits))
            .unwrap_or(DEFAULT_FRACTION_DIGITS);
        if maximum_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(LocaleError::FractionDigits(maximum_fraction_digits));
        }
        let decimal = self.decimal_symbol.unwrap_or(data.decimal);
        let group = self.group_symbol.unwrap_or(data.group);
        if decimal == group {
            return Err(LocaleError::SeparatorCollision(decimal));
        }
        if let Some(digit) = [decimal, group].into_iter().find(char::is_ascii_digit) {
            return Err(LocaleError::DigitSeparator(digit));
        }
        Ok(LocaleFormat {
            locale: data.tag,
            currency: currency.map(|c| c.code),
            currency_symbol: currency.map(|c| c.symbol),
            maximum_fraction_digits,
            use_grouping: self.use_grouping,
            decimal,
            group,
            primary_grouping: data.primary_grouping,
            secondary_grouping: data.secondary_grouping,
            min_grouping_digits: data.min_grouping_digits,
            currency_placement: data.currency_placement,
        })
    }
}

/// Resolved, immutable number-formatting configuration for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFormat {
    locale: &'static str,
    currency: Option<&'static str>,
    currency_symbol: Option<&'static str>,
    maximum_fraction_digits: u8,
    use_grouping: bool,
    decimal: char,
    group: char,
    primary_grouping: u8,
    secondary_grouping: u8,
    min_grouping_digits: u8,
    currency_placement: CurrencyPlacement,
}

impl Default for LocaleFormat {
    fn default() -> Self {
        Self::new(tables::DEFAULT_LOCALE)
    }
}

impl LocaleFormat {
    /// Plain decimal format for `tag` with default options. Never fails:
    /// unknown tags resolve through the table fallbacks.
    pub fn new(tag: &str) -> Self {
        let (data, matched) = lookup_locale(tag);
        if matched != TagMatch::Exact {
            debug!(target: "locale.resolve", requested = tag, resolved = data.tag, ?matched, "locale_fallback");
        }
        Self {
            locale: data.tag,
            currency: None,
            currency_symbol: None,
            maximum_fraction_digits: DEFAULT_FRACTION_DIGITS,
            use_grouping: true,
            decimal: data.decimal,
            group: data.group,
            primary_grouping: data.primary_grouping,
            secondary_grouping: data.secondary_grouping,
            min_grouping_digits: data.min_grouping_digits,
            currency_placement: data.currency_placement,
        }
    }

    /// Start from options for `tag`; finish with `LocaleOptions::build`.
    pub fn builder(tag: impl Into<String>) -> LocaleOptions {
        LocaleOptions::new(tag)
    }

    /// Resolved tag from the locale table (may differ from the requested one).
    pub fn locale(&self) -> &'static str {
        self.locale
    }

    pub fn currency(&self) -> Option<&'static str> {
        self.currency
    }

    pub fn maximum_fraction_digits(&self) -> u8 {
        self.maximum_fraction_digits
    }

    pub fn use_grouping(&self) -> bool {
        self.use_grouping
    }

    pub fn currency_placement(&self) -> CurrencyPlacement {
        self.currency_placement
    }

    pub(crate) fn currency_symbol_raw(&self) -> Option<&'static str> {
        self.currency_symbol
    }

    pub(crate) fn decimal_symbol(&self) -> char {
        self.decimal
    }

    pub(crate) fn group_symbol(&self) -> char {
        self.group
    }

    pub(crate) fn grouping(&self) -> (u8, u8, u8) {
        (
            self.primary_grouping,
            self.secondary_grouping,
            self.min_grouping_digits,
        )
    }

    /// Same locale with a different maximum fraction digit count.
    pub fn with_maximum_fraction_digits(&self, digits: u8) -> Result<Self, LocaleError> {
        if digits > MAX_FRACTION_DIGITS {
            return Err(LocaleError::FractionDigits(digits));
        }
        Ok(Self {
            maximum_fraction_digits: digits,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_en_us_two_digits() {
        let f = LocaleFormat::default();
        assert_eq!(f.locale(), "en-US");
        assert_eq!(f.maximum_fraction_digits(), 2);
        assert!(f.currency().is_none());
    }

    #[test]
    fn currency_minor_units_drive_fraction_digits() {
        let jpy = LocaleFormat::builder("ja-JP").currency("JPY").build().unwrap();
        assert_eq!(jpy.maximum_fraction_digits(), 0);
        let kwd = LocaleFormat::builder("en-US").currency("KWD").build().unwrap();
        assert_eq!(kwd.maximum_fraction_digits(), 3);
    }

    #[test]
    fn explicit_digits_win_over_currency() {
        let f = LocaleFormat::builder("en-GB")
            .currency("GBP")
            .maximum_fraction_digits(4)
            .build()
            .unwrap();
        assert_eq!(f.maximum_fraction_digits(), 4);
        assert_eq!(f.currency(), Some("GBP"));
    }

    #[test]
    fn unknown_currency_is_an_error() {
        let err = LocaleFormat::builder("en-US").currency("ZZZ").build().unwrap_err();
        assert_eq!(err, LocaleError::UnknownCurrency("ZZZ".into()));
    }

    #[test]
    fn too_many_fraction_digits_rejected() {
        let err = LocaleFormat::builder("en-US")
            .maximum_fraction_digits(21)
            .build()
            .unwrap_err();
        assert_eq!(err, LocaleError::FractionDigits(21));
        assert!(LocaleFormat::default().with_maximum_fraction_digits(30).is_err());
    }

    #[test]
    fn colliding_overrides_rejected() {
        let err = LocaleFormat::builder("de-DE")
            .decimal_symbol('.')
            .build()
            .unwrap_err();
        assert_eq!(err, LocaleError::SeparatorCollision('.'));
        let err = LocaleFormat::builder("en-US")
            .group_symbol('7')
            .build()
            .unwrap_err();
        assert_eq!(err, LocaleError::DigitSeparator('7'));
    }
}
