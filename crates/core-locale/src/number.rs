//! Locale-aware number formatting into typed parts.
//!
//! Contract:
//! - Input: a finite, non-negative `f64`. Negative, NaN and infinite values
//!   format as `0` (the amount pipeline has no sign support).
//! - Output: an ordered list of `NumberPart`s whose concatenated values form
//!   the display string. Callers that only want the numeric glyphs filter by
//!   `PartKind::is_numeric`.
//! - Rounding: the value is taken in its shortest round-trip decimal form
//!   (never the binary expansion), rounded half-up in decimal to
//!   `maximum_fraction_digits`, then trailing fraction zeros are dropped down
//!   to `minimum_fraction_digits`.
//! - `format_digits_to_parts` skips the `f64` entirely for callers that
//!   already hold the decimal digits (typed text).

use crate::{CurrencyPlacement, LocaleFormat, tables::CURRENCY_SPACING};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Integer,
    Group,
    Decimal,
    Fraction,
    Currency,
    Literal,
}

impl PartKind {
    /// Parts that make up the amount itself (no currency decoration).
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            PartKind::Integer | PartKind::Group | PartKind::Decimal | PartKind::Fraction
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPart {
    pub kind: PartKind,
    pub value: String,
}

impl NumberPart {
    fn new(kind: PartKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// A formatter bound to one `LocaleFormat` and a fraction digit range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormatter {
    format: LocaleFormat,
    minimum_fraction_digits: u8,
    maximum_fraction_digits: u8,
}

impl NumberFormatter {
    /// Currency formats show every minor unit (`£12.00`); plain decimal
    /// formats show none they don't need (`12`).
    pub fn new(format: &LocaleFormat) -> Self {
        let max = format.maximum_fraction_digits();
        let min = if format.currency().is_some() { max } else { 0 };
        Self {
            format: format.clone(),
            minimum_fraction_digits: min,
            maximum_fraction_digits: max,
        }
    }

    /// Override the minimum fraction digits (clamped to the maximum).
    pub fn with_minimum_fraction_digits(mut self, digits: u8) -> Self {
        self.minimum_fraction_digits = digits.min(self.maximum_fraction_digits);
        self
    }

    /// Override the maximum fraction digits; the minimum follows it down.
    pub fn with_maximum_fraction_digits(mut self, digits: u8) -> Self {
        self.maximum_fraction_digits = digits.min(crate::MAX_FRACTION_DIGITS);
        self.minimum_fraction_digits = self.minimum_fraction_digits.min(self.maximum_fraction_digits);
        self
    }

    pub fn locale_format(&self) -> &LocaleFormat {
        &self.format
    }

    pub fn minimum_fraction_digits(&self) -> u8 {
        self.minimum_fraction_digits
    }

    pub fn maximum_fraction_digits(&self) -> u8 {
        self.maximum_fraction_digits
    }

    pub fn format_to_parts(&self, value: f64) -> Vec<NumberPart> {
        let value = if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        };
        // f64 Display is the shortest round-trip form and never uses exponents.
        let text = value.to_string();
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
        self.format_digits_to_parts(integer, fraction)
    }

    /// Format a non-negative decimal given as ASCII digit strings. An empty
    /// integer part reads as `0`; leading zeros are dropped. Non-digit input
    /// is ignored.
    pub fn format_digits_to_parts(&self, integer: &str, fraction: &str) -> Vec<NumberPart> {
        let (integer, mut fraction) = round_half_up(integer, fraction, self.maximum_fraction_digits as usize);
        let keep = fraction
            .trim_end_matches('0')
            .len()
            .max(self.minimum_fraction_digits as usize);
        fraction.truncate(keep.min(fraction.len()));
        while fraction.len() < keep {
            fraction.push('0');
        }
        let (integer, fraction) = (integer.as_str(), fraction.as_str());

        let mut parts = Vec::new();
        let symbol = self.format.currency_symbol_raw();
        if let Some(symbol) = symbol {
            match self.format.currency_placement() {
                CurrencyPlacement::Prefix => parts.push(NumberPart::new(PartKind::Currency, symbol)),
                CurrencyPlacement::PrefixSpaced => {
                    parts.push(NumberPart::new(PartKind::Currency, symbol));
                    parts.push(NumberPart::new(PartKind::Literal, CURRENCY_SPACING));
                }
                CurrencyPlacement::SuffixSpaced => {}
            }
        }
        self.push_integer_parts(integer, &mut parts);
        if !fraction.is_empty() {
            parts.push(NumberPart::new(
                PartKind::Decimal,
                self.format.decimal_symbol(),
            ));
            parts.push(NumberPart::new(PartKind::Fraction, fraction));
        }
        if let Some(symbol) = symbol {
            if self.format.currency_placement() == CurrencyPlacement::SuffixSpaced {
                parts.push(NumberPart::new(PartKind::Literal, CURRENCY_SPACING));
                parts.push(NumberPart::new(PartKind::Currency, symbol));
            }
        }
        parts
    }

    pub fn format(&self, value: f64) -> String {
        self.format_to_parts(value)
            .into_iter()
            .map(|p| p.value)
            .collect()
    }

    fn push_integer_parts(&self, integer: &str, parts: &mut Vec<NumberPart>) {
        let (primary, secondary, min_grouping) = self.format.grouping();
        let (primary, secondary) = (primary as usize, secondary as usize);
        if !self.format.use_grouping()
            || primary == 0
            || integer.len() < primary + min_grouping as usize
        {
            parts.push(NumberPart::new(PartKind::Integer, integer));
            return;
        }
        // Split from the right: one primary group, then secondary groups.
        let mut groups: Vec<&str> = Vec::new();
        let mut end = integer.len();
        let mut size = primary;
        while end > size {
            groups.push(&integer[end - size..end]);
            end -= size;
            size = secondary.max(1);
        }
        groups.push(&integer[..end]);
        let group = self.format.group_symbol();
        for (i, digits) in groups.iter().rev().enumerate() {
            if i > 0 {
                parts.push(NumberPart::new(PartKind::Group, group));
            }
            parts.push(NumberPart::new(PartKind::Integer, *digits));
        }
    }
}

/// Cut `fraction` to `max` digits, rounding half-up on the first dropped
/// digit and carrying into the integer part. Returns owned digit strings with
/// no leading integer zeros (but at least `"0"`).
fn round_half_up(integer: &str, fraction: &str, max: usize) -> (String, String) {
    let mut digits: Vec<u8> = integer.bytes().filter(u8::is_ascii_digit).collect();
    let int_len = digits.len();
    let mut frac = fraction.bytes().filter(u8::is_ascii_digit);
    digits.extend(frac.by_ref().take(max));
    let frac_len = digits.len() - int_len;
    let round_up = frac.next().is_some_and(|d| d >= b'5');

    let mut carry = round_up;
    for d in digits.iter_mut().rev() {
        if !carry {
            break;
        }
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            carry = false;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    let split = digits.len() - frac_len;
    let (int_digits, frac_digits) = digits.split_at(split);
    let int_digits = match int_digits.iter().position(|&d| d != b'0') {
        Some(first) => &int_digits[first..],
        None => &b"0"[..],
    };
    (
        String::from_utf8_lossy(int_digits).into_owned(),
        String::from_utf8_lossy(frac_digits).into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(tag: &str) -> NumberFormatter {
        NumberFormatter::new(&LocaleFormat::new(tag))
    }

    #[test]
    fn en_us_grouping_and_fraction() {
        assert_eq!(plain("en-US").format(1234567.5), "1,234,567.5");
        assert_eq!(plain("en-US").format(12.0), "12");
        assert_eq!(plain("en-US").format(999.0), "999");
    }

    #[test]
    fn de_de_swaps_symbols() {
        assert_eq!(plain("de-DE").format(1234.56), "1.234,56");
    }

    #[test]
    fn indian_secondary_grouping() {
        assert_eq!(plain("en-IN").format(1234567.0), "12,34,567");
        assert_eq!(plain("en-IN").format(100000.0), "1,00,000");
    }

    #[test]
    fn minimum_grouping_digits_leaves_four_digits_alone() {
        assert_eq!(plain("es-ES").format(1000.0), "1000");
        assert_eq!(plain("es-ES").format(10000.0), "10.000");
    }

    #[test]
    fn grouping_can_be_disabled() {
        let f = LocaleFormat::builder("en-US").use_grouping(false).build().unwrap();
        assert_eq!(NumberFormatter::new(&f).format(1234567.0), "1234567");
    }

    #[test]
    fn rounds_to_maximum_fraction_digits() {
        assert_eq!(plain("en-US").format(1.236), "1.24");
        assert_eq!(plain("en-US").format(0.999), "1");
        assert_eq!(plain("en-US").format(999.995), "1,000");
    }

    #[test]
    fn wide_fraction_digits_show_shortest_decimal() {
        let f = LocaleFormat::builder("en-US")
            .maximum_fraction_digits(20)
            .build()
            .unwrap();
        let nf = NumberFormatter::new(&f);
        assert_eq!(nf.format(0.1), "0.1");
        assert_eq!(nf.format(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn digit_strings_format_without_float_noise() {
        let f = LocaleFormat::builder("en-US")
            .maximum_fraction_digits(8)
            .build()
            .unwrap();
        let nf = NumberFormatter::new(&f);
        let text: String = nf
            .format_digits_to_parts("999999999", "12345678")
            .into_iter()
            .map(|p| p.value)
            .collect();
        assert_eq!(text, "999,999,999.12345678");
        let text: String = nf
            .format_digits_to_parts("", "5")
            .into_iter()
            .map(|p| p.value)
            .collect();
        assert_eq!(text, "0.5");
    }

    #[test]
    fn round_half_up_carries_into_integer() {
        assert_eq!(round_half_up("9", "996", 2), ("10".into(), "00".into()));
        assert_eq!(round_half_up("007", "1", 2), ("7".into(), "1".into()));
        assert_eq!(round_half_up("", "", 2), ("0".into(), "".into()));
        assert_eq!(round_half_up("1", "5", 0), ("2".into(), "".into()));
    }

    #[test]
    fn negative_and_non_finite_format_as_zero() {
        assert_eq!(plain("en-US").format(-5.0), "0");
        assert_eq!(plain("en-US").format(f64::NAN), "0");
        assert_eq!(plain("en-US").format(f64::INFINITY), "0");
    }

    #[test]
    fn currency_parts_prefix_and_suffix() {
        let gbp = LocaleFormat::builder("en-GB").currency("GBP").build().unwrap();
        let parts = NumberFormatter::new(&gbp).format_to_parts(1000.0);
        let kinds: Vec<PartKind> = parts.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PartKind::Currency,
                PartKind::Integer,
                PartKind::Group,
                PartKind::Integer,
                PartKind::Decimal,
                PartKind::Fraction,
            ]
        );
        assert_eq!(NumberFormatter::new(&gbp).format(1000.0), "£1,000.00");

        let eur = LocaleFormat::builder("de-DE").currency("EUR").build().unwrap();
        assert_eq!(NumberFormatter::new(&eur).format(5.5), "5,50\u{a0}€");
    }

    #[test]
    fn minimum_zero_drops_currency_zeros() {
        let gbp = LocaleFormat::builder("en-GB").currency("GBP").build().unwrap();
        let f = NumberFormatter::new(&gbp).with_minimum_fraction_digits(0);
        let numeric: String = f
            .format_to_parts(12.5)
            .into_iter()
            .filter(|p| p.kind.is_numeric())
            .map(|p| p.value)
            .collect();
        assert_eq!(numeric, "12.5");
    }
}
