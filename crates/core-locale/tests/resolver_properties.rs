//! Every table locale resolves to distinct separators, and the separators the
//! resolver reports are exactly the ones the formatter emits.

use core_locale::tables::LOCALES;
use core_locale::{LocaleFormat, NumberFormatter, PartKind, SeparatorSet};
use proptest::prelude::*;

#[test]
fn all_locales_resolve_distinct_separators() {
    for data in LOCALES {
        let set = SeparatorSet::resolve(&LocaleFormat::new(data.tag));
        assert_ne!(set.decimal, set.group, "{}", data.tag);
        assert_eq!(set.decimal, data.decimal, "{}", data.tag);
        assert_eq!(set.group, data.group, "{}", data.tag);
    }
}

proptest! {
    #[test]
    fn formatted_separators_come_from_the_set(idx in 0usize..LOCALES.len(), value in 0.0f64..1e9) {
        let format = LocaleFormat::new(LOCALES[idx].tag);
        let set = SeparatorSet::resolve(&format);
        for part in NumberFormatter::new(&format).format_to_parts(value) {
            match part.kind {
                PartKind::Decimal => prop_assert_eq!(part.value, set.decimal.to_string()),
                PartKind::Group => prop_assert_eq!(part.value, set.group.to_string()),
                PartKind::Integer | PartKind::Fraction => {
                    prop_assert!(part.value.chars().all(|c| c.is_ascii_digit()))
                }
                PartKind::Currency | PartKind::Literal => prop_assert!(false, "no currency configured"),
            }
        }
    }
}
