//!
//! Report columns.
//!

use crate::format::unit::Unit;
use crate::table::error::Error as TableError;

///
/// Report column.
///
/// Every workload column group repeats the same columns.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The statistic category, `None` for flat results.
    pub statistic: Option<String>,
    /// The metric name.
    pub metric: String,
    /// The cell unit.
    pub unit: Unit,
}

impl Column {
    /// The metric shown as a ratio to the average by default.
    pub const STDDEV_METRIC: &'static str = "stddev";
    /// The metric a ratio column is divided by.
    pub const AVERAGE_METRIC: &'static str = "average";

    ///
    /// A column of categorized results.
    ///
    pub fn categorized(statistic: &str, metric: &str, unit: Unit) -> Self {
        Self {
            statistic: Some(statistic.to_owned()),
            metric: metric.to_owned(),
            unit,
        }
    }

    ///
    /// A column of flat results.
    ///
    pub fn flat(metric: &str, unit: Unit) -> Self {
        Self {
            statistic: None,
            metric: metric.to_owned(),
            unit,
        }
    }

    ///
    /// Returns the default unit of a metric.
    ///
    pub fn default_unit(metric: &str) -> Unit {
        if metric == Self::STDDEV_METRIC {
            Unit::Ratio
        } else {
            Unit::Count
        }
    }

    ///
    /// Builds columns from parallel statistic and metric lists.
    ///
    /// `units`, if not empty, must be parallel to the other two lists as well.
    /// Otherwise the unit of each column is [`Self::default_unit`].
    ///
    pub fn from_lists<S, M>(
        statistics: &[S],
        metrics: &[M],
        units: &[Unit],
    ) -> Result<Vec<Self>, TableError>
    where
        S: AsRef<str>,
        M: AsRef<str>,
    {
        if statistics.len() != metrics.len() {
            return Err(TableError::ColumnMismatch {
                statistics: statistics.len(),
                metrics: metrics.len(),
            });
        }
        if !units.is_empty() && units.len() != metrics.len() {
            return Err(TableError::UnitMismatch {
                columns: metrics.len(),
                units: units.len(),
            });
        }

        Ok(statistics
            .iter()
            .zip(metrics.iter())
            .enumerate()
            .map(|(index, (statistic, metric))| {
                let unit = units
                    .get(index)
                    .copied()
                    .unwrap_or_else(|| Self::default_unit(metric.as_ref()));
                Self::categorized(statistic.as_ref(), metric.as_ref(), unit)
            })
            .collect())
    }
}
