//!
//! Report output.
//!

pub mod arguments;
pub mod file;

#[cfg(test)]
mod tests;

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::table::error::Error as TableError;
use crate::table::partition::Partition;
use crate::table::Table;

use self::file::Destination;
use self::file::File;

///
/// Destinations of the main and the bottom tables.
///
/// An unset destination is the standard output.
///
#[derive(Debug, Default, Clone)]
pub struct Destinations {
    /// The main table destination.
    pub primary: Option<PathBuf>,
    /// The bottom table destination.
    pub secondary: Option<PathBuf>,
}

///
/// Rendered report tables with their destinations.
///
#[derive(Debug, Default)]
pub struct Output {
    /// Outputs in writing order, one per distinct destination.
    pub files: Vec<File>,
}

impl Output {
    ///
    /// Adds content to a destination, after any content it already has.
    ///
    pub fn push(&mut self, destination: Destination, content: String) {
        match self
            .files
            .iter_mut()
            .find(|file| file.destination == destination)
        {
            Some(file) => {
                if !file.content.is_empty() {
                    file.content.push('\n');
                }
                file.content.push_str(content.as_str());
            }
            None => self.files.push(File::new(destination, content)),
        }
    }

    ///
    /// Writes every output to its destination.
    ///
    /// Files are staged next to their destinations and only moved into place once
    /// all of them are written, so a failed write leaves no report file behind.
    /// The standard output is written last.
    ///
    pub fn write(self) -> anyhow::Result<()> {
        let mut staged = Vec::with_capacity(self.files.len());
        let mut printed = Vec::new();
        for File {
            destination,
            content,
        } in self.files.into_iter()
        {
            match destination {
                Destination::Stdout => printed.push(content),
                Destination::File(path) => {
                    let file = Self::stage(path.as_path(), content.as_str())?;
                    staged.push((file, path));
                }
            }
        }

        for (file, path) in staged.into_iter() {
            file.persist(path.as_path()).map_err(|error| {
                anyhow::anyhow!("Report file {path:?} writing: {}", error.error)
            })?;
        }

        let mut stdout = std::io::stdout().lock();
        for content in printed.into_iter() {
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|error| anyhow::anyhow!("Report writing to stdout: {error}"))?;
        }
        Ok(())
    }

    ///
    /// Writes `content` to a temporary file in the directory of `path`.
    ///
    fn stage(path: &Path, content: &str) -> anyhow::Result<tempfile::NamedTempFile> {
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(directory)
            .map_err(|error| anyhow::anyhow!("Report file {path:?} creating: {error}"))?;
        file.write_all(content.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
        Ok(file)
    }
}

impl<'a, 'b> TryFrom<(Table<'a>, &'b Partition, &'b Destinations)> for Output {
    type Error = TableError;

    ///
    /// Renders the main and the bottom tables.
    ///
    /// A table without workloads is skipped along with its destination.
    ///
    fn try_from(
        (table, partition, destinations): (Table<'a>, &'b Partition, &'b Destinations),
    ) -> Result<Self, Self::Error> {
        if partition.primary.is_empty() && partition.secondary.is_empty() {
            return Err(TableError::NoWorkloads);
        }

        let mut output = Self::default();
        for (workloads, destination) in [
            (&partition.primary, &destinations.primary),
            (&partition.secondary, &destinations.secondary),
        ] {
            if workloads.is_empty() {
                continue;
            }
            let content = table.with_workloads(workloads.as_slice()).render()?;
            output.push(Destination::from(destination.clone()), content);
        }
        Ok(output)
    }
}
