//! Input Normalizer.
//!
//! Turns arbitrary typed text into a `CanonicalToken`: ASCII digits and at
//! most one `.`, with the integer part capped at `MAX_INTEGER_DIGITS` and the
//! fraction capped at the format's maximum fraction digits.
//!
//! Each step is total over the previous result:
//! 1. drop everything that is neither an ASCII digit nor the decimal symbol
//! 2. map the decimal symbol to `.`
//! 3. keep the first `.`, drop later ones but keep their digits
//! 4. truncate integer and fraction parts
//!
//! A bare `.` (or `12.`) survives so the formatter can echo the separator the
//! user just typed. With zero fraction digits the point is dropped along with
//! any fraction.

use core_locale::SeparatorSet;
use std::fmt;

pub const MAX_INTEGER_DIGITS: usize = 10;
pub const CANONICAL_POINT: char = '.';

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CanonicalToken(String);

impl CanonicalToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_point(&self) -> bool {
        self.0.contains(CANONICAL_POINT)
    }

    pub fn integer_digits(&self) -> &str {
        self.0.split(CANONICAL_POINT).next().unwrap_or_default()
    }

    pub fn fraction_digits(&self) -> &str {
        self.0
            .split_once(CANONICAL_POINT)
            .map(|(_, f)| f)
            .unwrap_or_default()
    }

    /// Numeric value of the token; anything unparseable (empty, bare `.`) is 0.
    pub fn value(&self) -> f64 {
        match self.0.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => 0.0,
        }
    }
}

impl fmt::Display for CanonicalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize(raw: &str, separators: &SeparatorSet, maximum_fraction_digits: u8) -> CanonicalToken {
    let mut integer = String::new();
    let mut fraction = String::new();
    let mut seen_point = false;
    for c in raw.chars() {
        if c == separators.decimal {
            seen_point = true;
        } else if c.is_ascii_digit() {
            if seen_point {
                fraction.push(c);
            } else {
                integer.push(c);
            }
        }
    }
    integer.truncate(MAX_INTEGER_DIGITS);
    fraction.truncate(maximum_fraction_digits as usize);

    let mut token = integer;
    if seen_point && maximum_fraction_digits > 0 {
        token.push(CANONICAL_POINT);
        token.push_str(&fraction);
    }
    CanonicalToken(token)
}
