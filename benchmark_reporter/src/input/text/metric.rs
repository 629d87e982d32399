//!
//! Metrics of text result files.
//!

///
/// Where a text result metric comes from.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The next line of the result file.
    Line,
    /// The byte size of the companion artifact.
    ArtifactSize,
}

///
/// A metric of text result files.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    /// The metric name.
    pub name: String,
    /// The value source.
    pub source: Source,
}

impl Metric {
    ///
    /// A metric read from the next result file line.
    ///
    pub fn line(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            source: Source::Line,
        }
    }

    ///
    /// A metric taken from the companion artifact size.
    ///
    pub fn artifact_size(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            source: Source::ArtifactSize,
        }
    }
}
