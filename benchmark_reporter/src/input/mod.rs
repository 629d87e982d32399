//!
//! Benchmark result ingestion.
//!

pub mod artifact;
pub mod error;
pub mod json;
pub mod text;


use std::path::Path;

use crate::model::ResultCollection;

use self::error::Error as InputError;
use self::json::JsonReport;

///
/// Merged JSON reports.
///
#[derive(Debug, Default)]
pub struct Merged {
    /// The merged results.
    pub results: ResultCollection,
    /// Configurations replaced by a later report, in replacement order.
    pub overridden: Vec<String>,
}

///
/// Reads and merges JSON reports.
///
/// A configuration present in several reports takes the results of the last one.
///
pub fn read_json_reports<P>(paths: &[P]) -> Result<Merged, InputError>
where
    P: AsRef<Path>,
{
    let mut merged = Merged::default();
    for path in paths.iter() {
        let JsonReport(results) = JsonReport::try_from(path.as_ref())?;
        let overridden = merged.results.merge(results);
        merged.overridden.extend(overridden);
    }
    Ok(merged)
}
