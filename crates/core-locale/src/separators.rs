//! Locale Descriptor Resolver.
//!
//! Separators depend on the fully resolved options (currency, fraction
//! digits, overrides), so they are discovered by formatting two probe numbers
//! and reading the `Decimal` / `Group` parts back out. A locale that emits no
//! such part gets a fallback symbol instead of an error.

use crate::{LocaleFormat, NumberFormatter, PartKind};
use tracing::debug;

const NUMBER_WITH_DECIMAL: f64 = 1.1;
const NUMBER_WITH_THOUSANDS: f64 = 10_000.0;

pub const FALLBACK_DECIMAL: char = '.';
pub const FALLBACK_GROUP: char = ',';

/// The decimal and grouping characters of one locale format.
///
/// Invariant: `decimal != group`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeparatorSet {
    pub decimal: char,
    pub group: char,
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self {
            decimal: FALLBACK_DECIMAL,
            group: FALLBACK_GROUP,
        }
    }
}

impl SeparatorSet {
    pub fn resolve(format: &LocaleFormat) -> Self {
        // Probe with at least one fraction digit so zero-digit currencies still
        // reveal the locale's decimal symbol.
        let probe = NumberFormatter::new(format)
            .with_maximum_fraction_digits(format.maximum_fraction_digits().max(1))
            .with_minimum_fraction_digits(0);
        let decimal = first_part(&probe, NUMBER_WITH_DECIMAL, PartKind::Decimal);
        let group = first_part(&probe, NUMBER_WITH_THOUSANDS, PartKind::Group);
        let decimal = decimal.unwrap_or_else(|| {
            debug!(target: "locale.resolve", locale = format.locale(), "decimal_fallback");
            FALLBACK_DECIMAL
        });
        let group = group.unwrap_or_else(|| {
            debug!(target: "locale.resolve", locale = format.locale(), "group_fallback");
            if decimal == FALLBACK_GROUP {
                FALLBACK_DECIMAL
            } else {
                FALLBACK_GROUP
            }
        });
        Self { decimal, group }
    }

    pub fn contains(&self, c: char) -> bool {
        c == self.decimal || c == self.group
    }

    pub fn is_decimal(&self, glyph: &str) -> bool {
        is_single(glyph, self.decimal)
    }

    pub fn is_group(&self, glyph: &str) -> bool {
        is_single(glyph, self.group)
    }

    pub fn as_array(&self) -> [char; 2] {
        [self.decimal, self.group]
    }
}

fn is_single(glyph: &str, c: char) -> bool {
    let mut chars = glyph.chars();
    chars.next() == Some(c) && chars.next().is_none()
}

fn first_part(formatter: &NumberFormatter, probe: f64, kind: PartKind) -> Option<char> {
    formatter
        .format_to_parts(probe)
        .into_iter()
        .find(|p| p.kind == kind)
        .and_then(|p| p.value.chars().next())
}

/// Currency symbol as it appears in formatted output, if the format has one.
pub fn currency_symbol(format: &LocaleFormat) -> Option<String> {
    NumberFormatter::new(format)
        .format_to_parts(0.0)
        .into_iter()
        .find(|p| p.kind == PartKind::Currency)
        .map(|p| p.value)
}
