//!
//! Tests for the number formatter.
//!

use crate::format::unit::Unit;

#[test]
fn buckets() {
    assert_eq!(super::format_number(0.0), ("0.00".to_owned(), 0));
    assert_eq!(super::format_number(9.994), ("9.99".to_owned(), 0));
    assert_eq!(super::format_number(99.5), ("99.5".to_owned(), 0));
    assert_eq!(super::format_number(999.0), ("999".to_owned(), 0));
    assert_eq!(super::format_number(1000.0), ("1.00".to_owned(), 1));
    assert_eq!(super::format_number(42_000.0), ("42.0".to_owned(), 1));
    assert_eq!(super::format_number(7_250_000_000.0), ("7.25".to_owned(), 3));
}

#[test]
fn mantissa_recovers_value() {
    for value in [0.004, 3.3, 12.34, 456.7, 8_765.0, 91_234.0, 123_456_789.0] {
        let (mantissa, tier) = super::format_number(value);
        let mantissa: f64 = mantissa.parse().expect("Always numeric");
        let recovered = mantissa * super::TIER_STEP.powi(tier as i32);
        let tolerance = 0.5 * super::TIER_STEP.powi(tier as i32);
        assert!(
            (recovered - value).abs() <= tolerance,
            "{value} recovered as {recovered}"
        );
    }
}

#[test]
fn size_precision() {
    assert_eq!(super::format_size(5.0), ("5.0".to_owned(), 0));
    assert_eq!(super::format_size(64.0), ("64.0".to_owned(), 0));
    assert_eq!(super::format_size(512.0), ("512".to_owned(), 0));
    assert_eq!(super::format_size(1536.0), ("1.5".to_owned(), 1));
    assert_eq!(super::format_size(2_500_000.0), ("2.5".to_owned(), 2));
}

#[test]
fn non_finite_does_not_scale() {
    assert_eq!(super::format_number(f64::INFINITY), ("inf".to_owned(), 0));
    assert_eq!(super::format_number(f64::NAN).1, 0);
}

#[test]
fn tier_is_clamped() {
    assert_eq!(
        super::scale(5_000_000.0, super::Precision::Standard, Some(1)),
        ("5000".to_owned(), 1)
    );
    assert_eq!(Unit::Count.format(2_000_000_000.0), "2000m");
    assert_eq!(Unit::Duration.format(5_000_000_000.0), "5000 s");
    assert_eq!(Unit::Size.format(3_000_000_000_000.0), "3000 GB");
}

#[test]
fn unit_suffixes() {
    assert_eq!(Unit::Count.format(5000.0), "5.00k");
    assert_eq!(Unit::Count.format(42.0), "42.0");
    assert_eq!(Unit::Duration.format(100.0), "100 us");
    assert_eq!(Unit::Duration.format(2500.0), "2.50 ms");
    assert_eq!(Unit::Duration.format(3_000_000.0), "3.00 s");
    assert_eq!(Unit::Size.format(16_384.0), "16.4 KB");
    assert_eq!(Unit::Ratio.format(0.1), "10.0%");
}

#[test]
fn percentage() {
    assert_eq!(super::format_percentage(0.0), "0.0%");
    assert_eq!(super::format_percentage(0.1), "10.0%");
    assert_eq!(super::format_percentage(1.234), "123.4%");
}

#[test]
fn unit_from_str() {
    assert_eq!("Duration".parse::<Unit>().expect("Always valid"), Unit::Duration);
    assert!("furlongs".parse::<Unit>().is_err());
}
