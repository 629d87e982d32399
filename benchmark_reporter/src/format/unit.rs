//!
//! Unit kinds of report columns.
//!

use std::str::FromStr;

use crate::format::Precision;

///
/// Unit kind of a report column.
///
/// Selects the suffix table and the scaling rule used for the column cells.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Plain counts: `5.00k`.
    #[default]
    Count,
    /// Durations measured in microseconds: `5.00 ms`.
    Duration,
    /// Byte sizes: `1.5 KB`.
    Size,
    /// Relative standard deviation, shown as a percentage.
    Ratio,
}

impl Unit {
    ///
    /// Returns the suffixes indexed by scale tier.
    ///
    pub fn suffixes(&self) -> &'static [&'static str] {
        match self {
            Self::Count => &["", "k", "m"],
            Self::Duration => &["us", "ms", "s"],
            Self::Size => &["B", "KB", "MB", "GB"],
            Self::Ratio => &["%"],
        }
    }

    ///
    /// Formats a cell value.
    ///
    /// Scaling stops at the largest suffix, so a value beyond it is shown in that unit.
    ///
    pub fn format(&self, value: f64) -> String {
        let (separator, precision) = match self {
            Self::Ratio => return crate::format::format_percentage(value),
            Self::Count => ("", Precision::Standard),
            Self::Duration => (" ", Precision::Standard),
            Self::Size => (" ", Precision::Size),
        };
        let suffixes = self.suffixes();
        let (mantissa, tier) =
            crate::format::scale(value, precision, Some(suffixes.len() - 1));
        format!("{mantissa}{separator}{}", suffixes[tier])
    }
}

impl FromStr for Unit {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "count" => Ok(Self::Count),
            "duration" => Ok(Self::Duration),
            "size" => Ok(Self::Size),
            "ratio" => Ok(Self::Ratio),
            string => anyhow::bail!(
                "Unknown unit `{string}`. Supported units: {}",
                [Self::Count, Self::Duration, Self::Size, Self::Ratio]
                    .into_iter()
                    .map(|unit| unit.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count => write!(f, "count"),
            Self::Duration => write!(f, "duration"),
            Self::Size => write!(f, "size"),
            Self::Ratio => write!(f, "ratio"),
        }
    }
}
