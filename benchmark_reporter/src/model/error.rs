//!
//! Result lookup errors.
//!

///
/// A measurement requested by the report is missing from the results.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The configuration is unknown.
    #[error("Configuration `{configuration}` not found in the results")]
    Configuration {
        /// The configuration identifier.
        configuration: String,
    },
    /// The configuration has no results for the workload.
    #[error("Workload `{workload}` not found for configuration `{configuration}`")]
    Workload {
        /// The configuration identifier.
        configuration: String,
        /// The workload identifier.
        workload: String,
    },
    /// The workload results have no such metric.
    #[error("Metric `{metric}` not found for configuration `{configuration}` and workload `{workload}`")]
    Metric {
        /// The configuration identifier.
        configuration: String,
        /// The workload identifier.
        workload: String,
        /// The metric, qualified with its statistic category if any.
        metric: String,
    },
}
