//!
//! Display name overrides loaded from a JSON file.
//!

use std::collections::BTreeMap;
use std::path::Path;

///
/// Display name overrides.
///
/// ```json
/// {
///     "configurations": { "stock": "Baseline" },
///     "workloads": { "echo_server": "\\cdnEcho" },
///     "metrics": { "latency(p99_9)": "Tail" }
/// }
/// ```
///
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Overrides {
    /// Configuration labels.
    pub configurations: BTreeMap<String, String>,
    /// Workload labels.
    pub workloads: BTreeMap<String, String>,
    /// Metric labels.
    pub metrics: BTreeMap<String, String>,
}

impl TryFrom<&Path> for Overrides {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("Display names file {path:?} reading: {error}"))?;
        let overrides: Self = serde_json::from_str(text.as_str())
            .map_err(|error| anyhow::anyhow!("Display names file {path:?} parsing: {error}"))?;
        Ok(overrides)
    }
}
