//!
//! Benchmark result ingestion errors.
//!

use std::path::PathBuf;

///
/// Benchmark result ingestion error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading an input file.
    #[error("Reading input file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Error parsing a JSON input file.
    #[error("Parsing input file {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Empty JSON input file.
    #[error("Input file {path:?} is empty")]
    EmptyFile {
        /// The path to the input file.
        path: PathBuf,
    },
    /// A text result file ends before all metrics are read.
    #[error("Input file {path:?} has {found} of {expected} expected metric lines")]
    MissingLines {
        /// The path to the input file.
        path: PathBuf,
        /// The number of metric lines expected after the header.
        expected: usize,
        /// The number of metric lines found.
        found: usize,
    },
    /// A text result line is not a number.
    #[error("Input file {path:?} line {line}: `{value}` is not a number")]
    InvalidNumber {
        /// The path to the input file.
        path: PathBuf,
        /// The 1-based line number.
        line: usize,
        /// The offending line.
        value: String,
    },
    /// A result folder does not exist or is not a directory.
    #[error("Input folder {path:?} is not a directory")]
    NotADirectory {
        /// The path to the folder.
        path: PathBuf,
    },
    /// Error listing a result folder.
    #[error("Listing input folder {path:?}: {error}")]
    Listing {
        /// The underlying listing error.
        error: glob::GlobError,
        /// The path to the folder.
        path: PathBuf,
    },
    /// Invalid folder listing pattern.
    #[error("Input folder {path:?} listing pattern: {error}")]
    ListingPattern {
        /// The underlying pattern error.
        error: glob::PatternError,
        /// The path to the folder.
        path: PathBuf,
    },
    /// Invalid result file name pattern.
    #[error("Result file name pattern: {0}")]
    FileNamePattern(#[from] regex::Error),
    /// The companion artifact of a result file is missing.
    #[error("Artifact {path:?} not found")]
    MissingArtifact {
        /// The expected artifact path.
        path: PathBuf,
    },
    /// An artifact-sourced metric is requested without an artifact folder.
    #[error("Metric `{metric}` requires an artifact folder")]
    NoArtifactFolder {
        /// The metric name.
        metric: String,
    },
    /// Configurations expose different workload sets.
    #[error("Configuration `{configuration}` workloads {found:?} differ from `{reference}` workloads {expected:?}")]
    InconsistentWorkloads {
        /// The configuration whose workloads are taken as reference.
        reference: String,
        /// The reference workloads.
        expected: Vec<String>,
        /// The configuration that differs.
        configuration: String,
        /// The workloads of the differing configuration.
        found: Vec<String>,
    },
}
