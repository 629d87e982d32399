//!
//! JSON benchmark report.
//!

use std::path::Path;

use crate::input::error::Error as InputError;
use crate::model::ResultCollection;

///
/// JSON benchmark report.
///
/// The document maps configurations to workloads to statistic categories to metrics:
/// `{ "stock": { "echo_server": { "latency": { "p99": 12.5 } } } }`.
///
#[derive(Debug, serde::Deserialize)]
#[serde(transparent)]
pub struct JsonReport(pub ResultCollection);

impl TryFrom<&Path> for JsonReport {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let report: Self =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(report)
    }
}
