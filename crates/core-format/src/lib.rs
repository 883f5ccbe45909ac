//! Typed text -> canonical amount value + locale display string.
//!
//! Data flow: raw text -> `normalize` (`CanonicalToken`) -> `format_amount`
//! (`FormattedAmount`). Everything here is pure; the `LocaleFormat` is an
//! explicit argument and no state survives between calls.

pub mod amount;
pub mod normalize;

pub use amount::{
    AmountContext, FormattedAmount, MAX_AMOUNT, format_amount, format_amount_value,
    format_amount_with, format_value_with,
};
pub use normalize::{CanonicalToken, MAX_INTEGER_DIGITS, normalize};
