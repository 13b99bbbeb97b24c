use num_bigint::{BigInt, Sign};
use test_strategy::proptest;

use super::super::radix::Radix;
use super::{format, parse, parse_strict, ParseFailure};

fn big(n: i64) -> BigInt {
    BigInt::from(n)
}

#[test]
fn test_parse_empty_is_zero() {
    for r in Radix::ALL {
        assert_eq!(parse("", r), big(0));
        assert_eq!(parse("   ", r), big(0));
        assert_eq!(parse_strict("", r), Ok(big(0)));
    }
}

#[test]
fn test_parse_hex() {
    assert_eq!(parse("FF", Radix::Hexadecimal), big(255));
    assert_eq!(parse("ff", Radix::Hexadecimal), big(255));
    assert_eq!(parse("-1F", Radix::Hexadecimal), big(-31));
}

#[test]
fn test_parse_negative_decimal() {
    assert_eq!(parse("-10", Radix::Decimal), big(-10));
    assert_eq!(parse("  -10\t", Radix::Decimal), big(-10));
}

#[test]
fn test_parse_leading_zeros() {
    assert_eq!(parse("000123", Radix::Decimal), big(123));
    assert_eq!(parse("-0007", Radix::Octal), big(-7));
    assert_eq!(parse("0000", Radix::Binary), big(0));
}

#[test]
fn test_parse_lone_minus_is_zero() {
    assert_eq!(parse_strict("-", Radix::Decimal), Ok(big(0)));
    assert_eq!(parse_strict("-0", Radix::Hexadecimal), Ok(big(0)));
}

#[test]
fn test_parse_binary_and_octal() {
    assert_eq!(parse("1010", Radix::Binary), big(10));
    assert_eq!(parse("777", Radix::Octal), big(511));
}

#[test]
fn test_parse_invalid_digit_reports_position() {
    assert_eq!(
        parse_strict("12", Radix::Binary),
        Err(ParseFailure::InvalidDigit {
            ch: '2',
            offset: 1,
            radix: Radix::Binary,
        })
    );
    assert_eq!(
        parse_strict(" -0019", Radix::Octal),
        Err(ParseFailure::InvalidDigit {
            ch: '9',
            offset: 4,
            radix: Radix::Octal,
        })
    );
}

#[test]
fn test_parse_failures_fall_back_to_zero() {
    // A digit which is fine in hex but not in decimal; this is what
    // a base switch can leave behind in a register.
    assert_eq!(parse("1A", Radix::Decimal), big(0));
    // The sign key appends, so it can end up anywhere.
    assert_eq!(parse("5-3", Radix::Decimal), big(0));
    assert_eq!(parse("--5", Radix::Decimal), big(0));
    // These are not digits in any base.
    assert_eq!(parse("+5", Radix::Decimal), big(0));
    assert_eq!(parse("1_000", Radix::Decimal), big(0));
    assert_eq!(parse("0x10", Radix::Hexadecimal), big(0));
    assert_eq!(parse("1 0", Radix::Decimal), big(0));
}

#[test]
fn test_format_basics() {
    assert_eq!(format(&big(0), Radix::Decimal), "0");
    assert_eq!(format(&big(0), Radix::Binary), "0");
    assert_eq!(format(&big(255), Radix::Hexadecimal), "FF");
    assert_eq!(format(&big(255), Radix::Octal), "377");
    assert_eq!(format(&big(5), Radix::Binary), "101");
    assert_eq!(format(&big(-10), Radix::Decimal), "-10");
    assert_eq!(format(&big(-255), Radix::Hexadecimal), "-FF");
}

#[test]
fn test_format_beyond_native_width() {
    let n: BigInt = BigInt::from(1) << 100;
    assert_eq!(
        format(&n, Radix::Hexadecimal),
        "10000000000000000000000000"
    );
    assert_eq!(format(&n, Radix::Decimal), "1267650600228229401496703205376");
    assert_eq!(parse("1267650600228229401496703205376", Radix::Decimal), n);
}

#[proptest]
fn format_then_parse_gives_back_the_value(negative: bool, limbs: Vec<u32>, radix: Radix) {
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    let value = BigInt::from_slice(sign, &limbs);
    let text = format(&value, radix);
    assert_eq!(parse_strict(&text, radix), Ok(value));
}

#[proptest]
fn formatted_text_is_canonical(value: i64, radix: Radix) {
    let text = format(&BigInt::from(value), radix);
    let digits = text.strip_prefix('-').unwrap_or(&text);
    assert!(!digits.is_empty());
    assert!(digits == "0" || !digits.starts_with('0'), "{text}");
    assert!(!digits.chars().any(|ch| ch.is_ascii_lowercase()), "{text}");
}

#[proptest]
fn parse_is_total(raw: String, radix: Radix) {
    // Must not panic, whatever the input.
    let _ = parse(&raw, radix);
}
