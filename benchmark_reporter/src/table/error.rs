//!
//! Report table errors.
//!

use crate::model::error::LookupError;

///
/// Report table error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The statistic and metric lists differ in length.
    #[error("Got {statistics} statistics and {metrics} metrics, please provide the same number of each")]
    ColumnMismatch {
        /// The number of statistics.
        statistics: usize,
        /// The number of metrics.
        metrics: usize,
    },
    /// The unit list differs in length from the column lists.
    #[error("Got {units} units for {columns} columns")]
    UnitMismatch {
        /// The number of columns.
        columns: usize,
        /// The number of units.
        units: usize,
    },
    /// No configurations to render.
    #[error("No configurations to render")]
    NoConfigurations,
    /// No workloads to render.
    #[error("No workloads to render")]
    NoWorkloads,
    /// No columns to render.
    #[error("No columns to render")]
    NoColumns,
    /// A cell refers to a missing measurement.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
