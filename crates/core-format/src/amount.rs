//! Amount Formatter.
//!
//! `format_amount` is a pure function of the typed text and the locale
//! format. It yields the canonical value (`as_number`, never NaN, within
//! `[0, MAX_AMOUNT]`) and the display text (`as_string`), which is the
//! locale rendering of the value plus, when the user is mid-entry, the
//! trailing separator and zeros they typed (`12.` / `12.0`).

use crate::normalize::{CanonicalToken, normalize};
use core_locale::{LocaleFormat, NumberFormatter, SeparatorSet};
use tracing::trace;

/// Values above this saturate instead of erroring.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FormattedAmount {
    pub as_number: f64,
    pub as_string: String,
}

impl FormattedAmount {
    /// Text for a submission field: plain decimal, no grouping, no exponent.
    pub fn submission_value(&self) -> String {
        self.as_number.to_string()
    }
}

/// Formatter and separators resolved once for a locale format, reused across
/// keystrokes.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountContext {
    formatter: NumberFormatter,
    separators: SeparatorSet,
}

impl AmountContext {
    pub fn new(format: &LocaleFormat) -> Self {
        Self {
            formatter: NumberFormatter::new(format).with_minimum_fraction_digits(0),
            separators: SeparatorSet::resolve(format),
        }
    }

    pub fn separators(&self) -> &SeparatorSet {
        &self.separators
    }

    pub fn locale_format(&self) -> &LocaleFormat {
        self.formatter.locale_format()
    }

    pub fn maximum_fraction_digits(&self) -> u8 {
        self.formatter.maximum_fraction_digits()
    }

    pub fn normalize(&self, raw: &str) -> CanonicalToken {
        normalize(raw, &self.separators, self.maximum_fraction_digits())
    }
}

pub fn format_amount(format: &LocaleFormat, raw: &str) -> FormattedAmount {
    format_amount_with(&AmountContext::new(format), raw)
}

/// Format a numeric value (e.g. a controlled field value) through the same
/// pipeline as typed text. Negative and non-finite values become 0.
pub fn format_amount_value(format: &LocaleFormat, value: f64) -> FormattedAmount {
    format_value_with(&AmountContext::new(format), value)
}

pub fn format_value_with(ctx: &AmountContext, value: f64) -> FormattedAmount {
    let value = if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    };
    // f64 Display never uses exponent notation, so this is plain digits.
    let text = value.to_string();
    let decimal = ctx.separators.decimal;
    let typed: String = text
        .chars()
        .map(|c| if c == '.' { decimal } else { c })
        .collect();
    format_amount_with(ctx, &typed)
}

pub fn format_amount_with(ctx: &AmountContext, raw: &str) -> FormattedAmount {
    let token = ctx.normalize(raw);
    let parsed = token.value();
    let clamped = parsed > MAX_AMOUNT;
    let as_number = parsed.clamp(0.0, MAX_AMOUNT);

    let decimal = ctx.separators.decimal;
    // Format the typed digits themselves so wide fraction settings never
    // surface float noise; a clamped value has no typed digits to reuse.
    let parts = if clamped {
        ctx.formatter.format_to_parts(as_number)
    } else {
        ctx.formatter
            .format_digits_to_parts(token.integer_digits(), token.fraction_digits())
    };
    let mut as_string: String = parts
        .into_iter()
        .filter(|p| p.kind.is_numeric())
        .map(|p| p.value)
        .collect();
    strip_trailing_fraction_zeros(&mut as_string, decimal);

    let mut readded = 0usize;
    if !as_string.contains(decimal) {
        if let Some(tail) = typed_trailing_fraction(raw, decimal, ctx.maximum_fraction_digits()) {
            readded = tail.chars().count();
            as_string.push_str(&tail);
        }
    }

    trace!(
        target: "format.amount",
        token_len = token.as_str().len(),
        clamped,
        readded,
        "amount_formatted"
    );
    FormattedAmount {
        as_number,
        as_string,
    }
}

/// `12.50` -> `12.5`, `12.00` -> `12`, `12.` -> `12`.
fn strip_trailing_fraction_zeros(s: &mut String, decimal: char) {
    if let Some(idx) = s.rfind(decimal) {
        let tail = &s[idx + decimal.len_utf8()..];
        if tail.chars().all(|c| c == '0') {
            s.truncate(idx);
        } else {
            let trimmed = s.trim_end_matches('0').len();
            s.truncate(trimmed);
        }
    }
}

/// The separator plus up to `max_zeros` zeros ending the typed text, when the
/// typed text ends with the separator followed only by zeros.
fn typed_trailing_fraction(raw: &str, decimal: char, max_zeros: u8) -> Option<String> {
    if max_zeros == 0 {
        return None;
    }
    let without_zeros = raw.trim_end_matches('0');
    if !without_zeros.ends_with(decimal) {
        return None;
    }
    let zeros = (raw.len() - without_zeros.len()).min(max_zeros as usize);
    let mut tail = String::with_capacity(decimal.len_utf8() + zeros);
    tail.push(decimal);
    tail.extend(std::iter::repeat_n('0', zeros));
    Some(tail)
}
