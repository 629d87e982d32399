//!
//! Command line arguments shared by the report binaries.
//!

use std::path::PathBuf;

use crate::names::overrides::Overrides;
use crate::names::NameResolver;
use crate::output::Destinations;
use crate::variant::Variant;

///
/// Command line arguments shared by the report binaries.
///
#[derive(Debug, Default, clap::Args)]
#[group(id = "output")]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The main table output file. If unset, the table is printed to `stdout`.
    #[arg(long = "o1")]
    pub primary_output: Option<PathBuf>,

    /// The bottom table output file. If unset, the table is printed to `stdout`.
    #[arg(long = "o2")]
    pub secondary_output: Option<PathBuf>,

    /// Workloads moved from the main table to the bottom table.
    #[arg(long, num_args = 1..)]
    pub bottom: Vec<String>,

    /// JSON file with display names of configurations, workloads and metrics.
    #[arg(long)]
    pub names: Option<PathBuf>,
}

impl Arguments {
    /// The long flags that may also be spelled with a single dash.
    pub const LONG_FLAGS: [&'static str; 4] = ["o1", "o2", "bottom", "names"];

    ///
    /// Returns the built-in display names of `variant` with the `--names` overrides.
    ///
    pub fn names(&self, variant: Variant) -> anyhow::Result<NameResolver> {
        let mut names = variant.names();
        if let Some(path) = self.names.as_deref() {
            names.extend(Overrides::try_from(path)?);
        }
        Ok(names)
    }

    ///
    /// Returns the table destinations.
    ///
    pub fn destinations(&self) -> Destinations {
        Destinations {
            primary: self.primary_output.clone(),
            secondary: self.secondary_output.clone(),
        }
    }
}
