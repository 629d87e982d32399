//!
//! Number formatting for report cells.
//!

pub mod latex;
pub mod unit;

#[cfg(test)]
mod tests;

/// The magnitude ratio between two neighbouring scale tiers.
pub const TIER_STEP: f64 = 1000.0;

///
/// Decimal precision policy of the lowest magnitude bucket.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Two decimals below 10, one below 100, none below 1000.
    #[default]
    Standard,
    /// One decimal below 100, none below 1000.
    /// Byte counts never need two decimals.
    Size,
}

///
/// Scales `value` into a short mantissa and its power-of-1000 tier.
///
/// # Example
///
/// ```rust
/// use benchmark_reporter::format::format_number;
///
/// assert_eq!(format_number(5.0), ("5.00".to_owned(), 0));
/// assert_eq!(format_number(42.0), ("42.0".to_owned(), 0));
/// assert_eq!(format_number(500.0), ("500".to_owned(), 0));
/// assert_eq!(format_number(5000.0), ("5.00".to_owned(), 1));
/// assert_eq!(format_number(1_500_000.0), ("1.50".to_owned(), 2));
/// ```
pub fn format_number(value: f64) -> (String, usize) {
    scale(value, Precision::Standard, None)
}

///
/// Same as [`format_number`], but with the [`Precision::Size`] policy.
///
pub fn format_size(value: f64) -> (String, usize) {
    scale(value, Precision::Size, None)
}

///
/// Scales `value` down by [`TIER_STEP`] until it is below it, or until `max_tier`
/// is reached, and formats the remaining mantissa.
///
/// Non-finite values are returned as is at tier 0.
///
pub fn scale(value: f64, precision: Precision, max_tier: Option<usize>) -> (String, usize) {
    if !value.is_finite() {
        return (value.to_string(), 0);
    }

    let mut mantissa = value;
    let mut tier = 0;
    while mantissa >= TIER_STEP && max_tier.map_or(true, |max_tier| tier < max_tier) {
        mantissa /= TIER_STEP;
        tier += 1;
    }

    let text = if mantissa < 10.0 && precision == Precision::Standard {
        format!("{mantissa:.2}")
    } else if mantissa < 100.0 {
        format!("{mantissa:.1}")
    } else {
        format!("{mantissa:.0}")
    };
    (text, tier)
}

///
/// Formats a ratio as a percentage with one decimal, e.g. `0.1` as `10.0%`.
///
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
