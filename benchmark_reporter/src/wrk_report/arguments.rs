//!
//! The wrk report arguments.
//!

use std::path::PathBuf;

use clap::Parser;

use benchmark_reporter::ArtifactFolder;
use benchmark_reporter::TextIngestor;
use benchmark_reporter::Variant;

///
/// The wrk report arguments.
///
#[derive(Debug, Parser)]
#[command(
    name = "wrk-report",
    about,
    long_about = None,
    arg_required_else_help = true
)]
pub struct Arguments {
    /// Folders with text result files named `<workload>_<configuration>.<extension>`.
    /// A file found in several folders takes the values of the last one.
    #[arg(long, num_args = 1.., required = true)]
    pub folders: Vec<PathBuf>,

    /// Folder with the compiled workloads. If set, their sizes are added as the `bin_size` column.
    #[arg(long)]
    pub sofolder: Option<PathBuf>,

    /// Extension of the text result files.
    #[arg(long, default_value = TextIngestor::DEFAULT_EXTENSION)]
    pub extension: String,

    /// Extension of the compiled workloads in `--sofolder`.
    #[arg(long, default_value = ArtifactFolder::DEFAULT_EXTENSION)]
    pub binary_extension: String,

    /// Configurations, in row order.
    #[arg(long, num_args = 1.., default_values = Variant::WRK_CONFIGURATIONS)]
    pub configurations: Vec<String>,

    /// Output arguments.
    #[command(flatten)]
    pub output: benchmark_reporter::OutputArguments,
}

impl Arguments {
    /// The long flags that may also be spelled with a single dash.
    pub const LONG_FLAGS: [&'static str; 5] = [
        "folders",
        "sofolder",
        "extension",
        "binary-extension",
        "configurations",
    ];

    ///
    /// Parses the process arguments, accepting single-dash long flags.
    ///
    pub fn parse_normalized() -> Result<Self, clap::Error> {
        Self::try_parse_from(Self::normalize(std::env::args_os()))
    }

    ///
    /// Rewrites the single-dash long flags of `arguments`.
    ///
    pub fn normalize<I>(arguments: I) -> Vec<std::ffi::OsString>
    where
        I: IntoIterator<Item = std::ffi::OsString>,
    {
        let long_flags: Vec<&str> = Self::LONG_FLAGS
            .into_iter()
            .chain(benchmark_reporter::OutputArguments::LONG_FLAGS)
            .collect();
        benchmark_reporter::util::args::normalize_long_flags(arguments, long_flags.as_slice())
    }

    ///
    /// Returns the result ingestor configured by the arguments.
    ///
    pub fn ingestor(&self) -> TextIngestor {
        let metrics = Variant::wrk_metrics(self.sofolder.is_some());
        let ingestor = TextIngestor::new(self.configurations.clone(), metrics)
            .with_extension(self.extension.clone());
        match self.sofolder.as_ref() {
            Some(path) => ingestor.with_artifacts(ArtifactFolder::new(
                path.to_owned(),
                self.binary_extension.clone(),
            )),
            None => ingestor,
        }
    }
}
