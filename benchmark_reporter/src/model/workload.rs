//!
//! Results of a single workload run under a single configuration.
//!

use serde::Deserialize;
use serde::Deserializer;

use crate::util::ordered_map::OrderedMap;

///
/// Metric values keyed by metric name.
///
pub type Metrics = OrderedMap<f64>;

///
/// Results of a single workload run under a single configuration.
///
#[derive(Debug, Clone, PartialEq)]
pub enum WorkloadResult {
    /// Metrics grouped by statistic category, e.g. `latency` → `p99` → value.
    Categorized(OrderedMap<Metrics>),
    /// Metrics without a category, e.g. `throughput` → value.
    Flat(Metrics),
}

impl WorkloadResult {
    ///
    /// Returns a metric value.
    ///
    /// Categorized results require a statistic category, flat results must not get one.
    ///
    pub fn get(&self, statistic: Option<&str>, metric: &str) -> Option<f64> {
        match (self, statistic) {
            (Self::Categorized(categories), Some(statistic)) => {
                categories.get(statistic)?.get(metric).copied()
            }
            (Self::Flat(metrics), None) => metrics.get(metric).copied(),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for WorkloadResult {
    ///
    /// Load generators put run metadata such as `url` or `errors` next to the
    /// statistic categories, so only object members are kept as categories and
    /// only numeric members as metrics.
    ///
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let members = OrderedMap::<serde_json::Value>::deserialize(deserializer)?;
        let categories = members
            .into_iter()
            .filter_map(|(category, value)| match value {
                serde_json::Value::Object(metrics) => Some((
                    category,
                    metrics
                        .iter()
                        .filter_map(|(metric, value)| {
                            value.as_f64().map(|value| (metric.to_owned(), value))
                        })
                        .collect::<Metrics>(),
                )),
                _ => None,
            })
            .collect();
        Ok(Self::Categorized(categories))
    }
}
