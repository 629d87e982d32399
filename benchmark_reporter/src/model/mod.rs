//!
//! The benchmark result model.
//!

pub mod error;
pub mod workload;


use crate::util::ordered_map::OrderedMap;

use self::error::LookupError;
use self::workload::WorkloadResult;

///
/// Workload results of a single configuration, keyed by workload identifier.
///
pub type ConfigResults = OrderedMap<WorkloadResult>;

///
/// The benchmark result collection.
///
/// Maps configuration identifiers to their workload results. The configuration
/// order is the row order of the rendered report.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
#[serde(transparent)]
pub struct ResultCollection {
    /// Results keyed by configuration identifier.
    pub configurations: OrderedMap<ConfigResults>,
}

impl ResultCollection {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Inserts the results of a configuration, replacing any previous ones.
    ///
    pub fn insert(&mut self, configuration: String, results: ConfigResults) {
        self.configurations.insert(configuration, results);
    }

    ///
    /// Merges another collection into this one.
    ///
    /// Configurations of `other` replace the whole sub-tree of an identical
    /// configuration. Returns the replaced configuration identifiers.
    ///
    pub fn merge(&mut self, other: Self) -> Vec<String> {
        self.configurations.merge(other.configurations)
    }

    ///
    /// Returns the configuration identifiers in row order.
    ///
    pub fn configurations(&self) -> Vec<String> {
        self.configurations.keys().map(str::to_owned).collect()
    }

    ///
    /// Returns the workload identifiers of the first configuration.
    ///
    /// Every configuration is expected to expose the same workloads.
    ///
    pub fn workloads(&self) -> Vec<String> {
        self.configurations
            .first()
            .map(|(_, results)| results.keys().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    ///
    /// Looks up a single measurement.
    ///
    /// `statistic` is `None` for flat results.
    ///
    pub fn value(
        &self,
        configuration: &str,
        workload: &str,
        statistic: Option<&str>,
        metric: &str,
    ) -> Result<f64, LookupError> {
        let workloads =
            self.configurations
                .get(configuration)
                .ok_or_else(|| LookupError::Configuration {
                    configuration: configuration.to_owned(),
                })?;
        let result = workloads
            .get(workload)
            .ok_or_else(|| LookupError::Workload {
                configuration: configuration.to_owned(),
                workload: workload.to_owned(),
            })?;
        result
            .get(statistic, metric)
            .ok_or_else(|| LookupError::Metric {
                configuration: configuration.to_owned(),
                workload: workload.to_owned(),
                metric: qualified_metric(statistic, metric),
            })
    }
}

///
/// Returns the relative standard deviation, defined as zero for a zero average.
///
pub fn relative_stddev(stddev: f64, average: f64) -> f64 {
    if average == 0.0 {
        0.0
    } else {
        stddev / average
    }
}

///
/// Returns `statistic(metric)`, or just `metric` for flat results.
///
pub fn qualified_metric(statistic: Option<&str>, metric: &str) -> String {
    match statistic {
        Some(statistic) => format!("{statistic}({metric})"),
        None => metric.to_owned(),
    }
}
