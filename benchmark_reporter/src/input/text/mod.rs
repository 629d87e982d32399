//!
//! Text benchmark result folders.
//!
//! Every folder holds one file per workload and configuration, named
//! `<workload>_<configuration>.<extension>`. A file starts with a header line
//! followed by one number per line, one line per metric.
//!

pub mod metric;

use std::collections::BTreeSet;
use std::path::Path;

use regex::Regex;

use crate::input::artifact::ArtifactFolder;
use crate::input::error::Error as InputError;
use crate::model::workload::Metrics;
use crate::model::workload::WorkloadResult;
use crate::model::ConfigResults;
use crate::model::ResultCollection;

use self::metric::Metric;
use self::metric::Source;

///
/// Text benchmark result ingestor.
///
#[derive(Debug, Clone)]
pub struct TextIngestor {
    /// Known configuration identifiers, in row order.
    configurations: Vec<String>,
    /// Metrics in file line order.
    metrics: Vec<Metric>,
    /// The result file extension, without the dot.
    extension: String,
    /// The companion artifact folder.
    artifacts: Option<ArtifactFolder>,
}

impl TextIngestor {
    /// The default result file extension.
    pub const DEFAULT_EXTENSION: &'static str = "txt";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(configurations: Vec<String>, metrics: Vec<Metric>) -> Self {
        Self {
            configurations,
            metrics,
            extension: Self::DEFAULT_EXTENSION.to_owned(),
            artifacts: None,
        }
    }

    ///
    /// Sets the result file extension.
    ///
    pub fn with_extension(mut self, extension: String) -> Self {
        self.extension = extension;
        self
    }

    ///
    /// Sets the companion artifact folder.
    ///
    pub fn with_artifacts(mut self, artifacts: ArtifactFolder) -> Self {
        self.artifacts = Some(artifacts);
        self
    }

    ///
    /// Reads all result files of the known configurations from `folders`.
    ///
    /// Every known configuration appears in the result, in the configured order.
    /// A file found in several folders takes the values of the last one.
    ///
    pub fn ingest<P>(&self, folders: &[P]) -> Result<ResultCollection, InputError>
    where
        P: AsRef<Path>,
    {
        if let Some(metric) = self.metrics.iter().find(|metric| {
            metric.source == Source::ArtifactSize && self.artifacts.is_none()
        }) {
            return Err(InputError::NoArtifactFolder {
                metric: metric.name.clone(),
            });
        }

        let mut results = ResultCollection::new();
        for configuration in self.configurations.iter() {
            results.insert(configuration.to_owned(), ConfigResults::new());
        }
        let matcher = self.file_name_matcher()?;

        for folder in folders.iter() {
            let folder = folder.as_ref();
            if !folder.is_dir() {
                return Err(InputError::NotADirectory {
                    path: folder.to_path_buf(),
                });
            }

            let pattern = format!(
                "{}/*.{}",
                glob::Pattern::escape(folder.to_string_lossy().as_ref()),
                glob::Pattern::escape(self.extension.as_str()),
            );
            let paths = glob::glob(pattern.as_str()).map_err(|error| {
                InputError::ListingPattern {
                    error,
                    path: folder.to_path_buf(),
                }
            })?;
            for path in paths {
                let path = path.map_err(|error| InputError::Listing {
                    error,
                    path: folder.to_path_buf(),
                })?;
                let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                    continue;
                };
                let Some(captures) = matcher.captures(file_name) else {
                    continue;
                };
                let workload = &captures["workload"];
                let configuration = &captures["configuration"];

                let result = self.parse_file(path.as_path(), workload, configuration)?;
                if let Some(workloads) = results.configurations.get_mut(configuration) {
                    workloads.insert(workload.to_owned(), result);
                }
            }
        }

        Self::check_workloads(&results)?;
        Ok(results)
    }

    ///
    /// Parses a single result file of `workload` run under `configuration`.
    ///
    /// Lines after the last metric are ignored.
    ///
    pub fn parse_file(
        &self,
        path: &Path,
        workload: &str,
        configuration: &str,
    ) -> Result<WorkloadResult, InputError> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;

        let expected = self
            .metrics
            .iter()
            .filter(|metric| metric.source == Source::Line)
            .count();
        let mut lines = text.lines().enumerate().skip(1);
        let mut found = 0;

        let mut metrics = Metrics::with_capacity(self.metrics.len());
        for metric in self.metrics.iter() {
            let value = match metric.source {
                Source::Line => {
                    let (index, line) = lines.next().ok_or_else(|| InputError::MissingLines {
                        path: path.to_path_buf(),
                        expected,
                        found,
                    })?;
                    found += 1;
                    line.trim()
                        .parse::<f64>()
                        .map_err(|_| InputError::InvalidNumber {
                            path: path.to_path_buf(),
                            line: index + 1,
                            value: line.to_owned(),
                        })?
                }
                Source::ArtifactSize => {
                    let artifacts =
                        self.artifacts
                            .as_ref()
                            .ok_or_else(|| InputError::NoArtifactFolder {
                                metric: metric.name.clone(),
                            })?;
                    artifacts.size(format!("{workload}_{configuration}").as_str())? as f64
                }
            };
            metrics.insert(metric.name.clone(), value);
        }

        Ok(WorkloadResult::Flat(metrics))
    }

    ///
    /// Builds the `<workload>_<configuration>.<extension>` file name matcher.
    ///
    /// The workload part is matched lazily, so with overlapping identifiers such as
    /// `full` and `sfi_full` the longest configuration wins.
    ///
    fn file_name_matcher(&self) -> Result<Regex, InputError> {
        let configurations = self
            .configurations
            .iter()
            .map(|configuration| regex::escape(configuration))
            .collect::<Vec<String>>()
            .join("|");
        let pattern = format!(
            r"^(?P<workload>.+?)_(?P<configuration>{configurations})\.{}$",
            regex::escape(self.extension.as_str())
        );
        Ok(Regex::new(pattern.as_str())?)
    }

    ///
    /// Checks that every configuration has the workloads of the first one.
    ///
    fn check_workloads(results: &ResultCollection) -> Result<(), InputError> {
        let Some((reference, reference_workloads)) = results.configurations.first() else {
            return Ok(());
        };
        let expected: BTreeSet<&str> = reference_workloads.keys().collect();

        for (configuration, workloads) in results.configurations.iter().skip(1) {
            let found: BTreeSet<&str> = workloads.keys().collect();
            if found != expected {
                return Err(InputError::InconsistentWorkloads {
                    reference: reference.to_owned(),
                    expected: expected.iter().map(|workload| workload.to_string()).collect(),
                    configuration: configuration.to_owned(),
                    found: found.iter().map(|workload| workload.to_string()).collect(),
                });
            }
        }
        Ok(())
    }
}
