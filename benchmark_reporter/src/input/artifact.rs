//!
//! Companion artifact folder.
//!

use std::path::PathBuf;

use crate::input::error::Error as InputError;

///
/// Folder with compiled artifacts named after the result files they belong to,
/// e.g. `echo_server_stock.so` for `echo_server_stock.txt`.
///
#[derive(Debug, Clone)]
pub struct ArtifactFolder {
    /// The folder path.
    pub path: PathBuf,
    /// The artifact file extension, without the dot.
    pub extension: String,
}

impl ArtifactFolder {
    /// The default artifact extension.
    pub const DEFAULT_EXTENSION: &'static str = "so";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf, extension: String) -> Self {
        Self { path, extension }
    }

    ///
    /// Returns the path of the artifact with the given stem.
    ///
    pub fn artifact_path(&self, stem: &str) -> PathBuf {
        self.path.join(format!("{stem}.{}", self.extension))
    }

    ///
    /// Returns the byte size of the artifact with the given stem.
    ///
    pub fn size(&self, stem: &str) -> Result<u64, InputError> {
        let path = self.artifact_path(stem);
        match std::fs::metadata(path.as_path()) {
            Ok(metadata) if metadata.is_file() => Ok(metadata.len()),
            Ok(_) => Err(InputError::MissingArtifact { path }),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                Err(InputError::MissingArtifact { path })
            }
            Err(error) => Err(InputError::Reading { error, path }),
        }
    }
}
