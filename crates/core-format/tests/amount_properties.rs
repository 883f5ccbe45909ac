//! Range and idempotence properties across the built-in locales.

use core_format::{AmountContext, MAX_AMOUNT, format_amount_with};
use core_locale::LocaleFormat;
use core_locale::tables::LOCALES;
use proptest::prelude::*;

fn ctx(idx: usize) -> AmountContext {
    AmountContext::new(&LocaleFormat::new(LOCALES[idx].tag))
}

proptest! {
    #[test]
    fn value_always_in_range(idx in 0usize..LOCALES.len(), raw in ".{0,40}") {
        let a = format_amount_with(&ctx(idx), &raw);
        prop_assert!(a.as_number.is_finite());
        prop_assert!((0.0..=MAX_AMOUNT).contains(&a.as_number));
    }

    #[test]
    fn reformatting_display_is_stable(idx in 0usize..LOCALES.len(), raw in "[0-9.,]{0,16}") {
        let ctx = ctx(idx);
        let first = format_amount_with(&ctx, &raw);
        let second = format_amount_with(&ctx, &first.as_string);
        prop_assert_eq!(&second.as_string, &first.as_string);
        prop_assert_eq!(second.as_number, first.as_number);
    }

    #[test]
    fn integer_part_never_exceeds_ten_digits(raw in "[0-9]{0,30}") {
        let token = ctx(0).normalize(&raw);
        prop_assert!(token.integer_digits().len() <= 10);
    }

    #[test]
    fn display_contains_only_digits_and_separators(idx in 0usize..LOCALES.len(), raw in ".{0,24}") {
        let ctx = ctx(idx);
        let seps = *ctx.separators();
        let a = format_amount_with(&ctx, &raw);
        prop_assert!(a.as_string.chars().all(|c| c.is_ascii_digit() || seps.contains(c)));
    }
}
