//!
//! Represents a single report output in a set of many.
//!

use std::path::PathBuf;

///
/// Where a report output goes.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The standard output.
    Stdout,
    /// A file, created or truncated.
    File(PathBuf),
}

impl From<Option<PathBuf>> for Destination {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Stdout,
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => write!(f, "stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

///
/// Represents a single report output in a set of many.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// The output destination.
    pub destination: Destination,
    /// File content.
    pub content: String,
}

impl File {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(destination: Destination, content: String) -> Self {
        Self {
            destination,
            content,
        }
    }
}
