use core_format::{format_amount, format_amount_value};
use core_locale::LocaleFormat;
use pretty_assertions::assert_eq;

fn en() -> LocaleFormat {
    LocaleFormat::new("en-US")
}

fn fmt(format: &LocaleFormat, raw: &str) -> (f64, String) {
    let a = format_amount(format, raw);
    (a.as_number, a.as_string)
}

#[test]
fn plain_digits_are_grouped() {
    assert_eq!(fmt(&en(), "1234567"), (1234567.0, "1,234,567".to_string()));
}

#[test]
fn trailing_separator_preserved_while_typing() {
    assert_eq!(fmt(&en(), "12."), (12.0, "12.".to_string()));
    assert_eq!(fmt(&en(), "12.0"), (12.0, "12.0".to_string()));
    assert_eq!(fmt(&en(), "12.00"), (12.0, "12.00".to_string()));
}

#[test]
fn trailing_zeros_capped_at_fraction_digits() {
    assert_eq!(fmt(&en(), "12.000"), (12.0, "12.00".to_string()));
}

#[test]
fn nonzero_fraction_drops_trailing_zero() {
    assert_eq!(fmt(&en(), "12.50"), (12.5, "12.5".to_string()));
}

#[test]
fn fraction_truncated_not_rounded() {
    assert_eq!(fmt(&en(), "1.2345"), (1.23, "1.23".to_string()));
    assert_eq!(fmt(&en(), "1.999"), (1.99, "1.99".to_string()));
}

#[test]
fn integer_truncated_to_ten_digits_then_clamped() {
    let (n, s) = fmt(&en(), "123456789012");
    assert_eq!(n, 1_000_000_000.0);
    assert_eq!(s, "1,000,000,000");
    assert_eq!(fmt(&en(), "999999999"), (999_999_999.0, "999,999,999".to_string()));
}

#[test]
fn empty_and_garbage_map_to_zero() {
    assert_eq!(fmt(&en(), ""), (0.0, "0".to_string()));
    assert_eq!(fmt(&en(), "abc"), (0.0, "0".to_string()));
    assert_eq!(fmt(&en(), "-"), (0.0, "0".to_string()));
}

#[test]
fn lone_separator_becomes_zero_point() {
    assert_eq!(fmt(&en(), "."), (0.0, "0.".to_string()));
    assert_eq!(fmt(&en(), ".5"), (0.5, "0.5".to_string()));
}

#[test]
fn pasted_grouping_is_reparsed() {
    assert_eq!(fmt(&en(), "$1,000.5"), (1000.5, "1,000.5".to_string()));
    assert_eq!(fmt(&en(), "1,000."), (1000.0, "1,000.".to_string()));
}

#[test]
fn german_symbols() {
    let de = LocaleFormat::new("de-DE");
    assert_eq!(fmt(&de, "1234,5"), (1234.5, "1.234,5".to_string()));
    assert_eq!(fmt(&de, "1.000,"), (1000.0, "1.000,".to_string()));
    // A typed period is a group symbol in de-DE and is discarded.
    assert_eq!(fmt(&de, "12.5"), (125.0, "125".to_string()));
}

#[test]
fn french_narrow_space_grouping() {
    let fr = LocaleFormat::new("fr-FR");
    assert_eq!(fmt(&fr, "1234567,25"), (1234567.25, "1\u{202F}234\u{202F}567,25".to_string()));
}

#[test]
fn indian_grouping() {
    let hi = LocaleFormat::new("en-IN");
    assert_eq!(fmt(&hi, "1234567"), (1234567.0, "12,34,567".to_string()));
}

#[test]
fn currency_format_shows_no_symbol_or_forced_zeros() {
    let gbp = LocaleFormat::builder("en-GB").currency("GBP").build().unwrap();
    assert_eq!(fmt(&gbp, "12"), (12.0, "12".to_string()));
    assert_eq!(fmt(&gbp, "12.5"), (12.5, "12.5".to_string()));
}

#[test]
fn zero_fraction_currency_never_shows_separator() {
    let jpy = LocaleFormat::builder("ja-JP").currency("JPY").build().unwrap();
    assert_eq!(fmt(&jpy, "1500."), (1500.0, "1,500".to_string()));
    assert_eq!(fmt(&jpy, "1500.75"), (1500.0, "1,500".to_string()));
}

#[test]
fn three_digit_currency() {
    let kwd = LocaleFormat::builder("en-US").currency("KWD").build().unwrap();
    assert_eq!(fmt(&kwd, "1.2345"), (1.234, "1.234".to_string()));
    assert_eq!(fmt(&kwd, "1.000"), (1.0, "1.000".to_string()));
}

#[test]
fn controlled_values_format_through_pipeline() {
    let de = LocaleFormat::new("de-DE");
    let a = format_amount_value(&de, 1234.5);
    assert_eq!(a.as_string, "1.234,5");
    assert_eq!(a.as_number, 1234.5);
    assert_eq!(format_amount_value(&de, -3.0).as_number, 0.0);
    assert_eq!(format_amount_value(&de, f64::NAN).as_string, "0");
    assert_eq!(format_amount_value(&en(), 5e12).as_number, 1_000_000_000.0);
}

#[test]
fn submission_value_for_hidden_field() {
    assert_eq!(format_amount(&en(), "1,234.5").submission_value(), "1234.5");
    assert_eq!(format_amount(&en(), "12.").submission_value(), "12");
}

#[test]
fn wide_fraction_digits_echo_typed_digits() {
    let wide = LocaleFormat::builder("en-US")
        .maximum_fraction_digits(20)
        .build()
        .unwrap();
    assert_eq!(fmt(&wide, "0.1"), (0.1, "0.1".to_string()));

    let eight = LocaleFormat::builder("en-US")
        .maximum_fraction_digits(8)
        .build()
        .unwrap();
    let a = format_amount(&eight, "999999999.12345678");
    assert_eq!(a.as_string, "999,999,999.12345678");
    assert_eq!(format_amount_value(&wide, 0.1).as_string, "0.1");
}
