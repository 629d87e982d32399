//!
//! The autocannon report arguments.
//!

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::CommandFactory;
use clap::Parser;

use benchmark_reporter::Unit;
use benchmark_reporter::Variant;

///
/// The autocannon report arguments.
///
#[derive(Debug, Parser)]
#[command(
    name = "autocannon-report",
    about,
    long_about = None,
    arg_required_else_help = true
)]
pub struct Arguments {
    /// JSON result files to import.
    /// A configuration found in several files takes the results of the last one.
    #[arg(long = "file", num_args = 1.., required = true)]
    pub files: Vec<PathBuf>,

    /// Statistic categories of the columns: `requests`, `latency`, or `throughput`.
    #[arg(long = "statistic", num_args = 1.., default_values = Variant::AUTOCANNON_STATISTICS)]
    pub statistics: Vec<String>,

    /// Metrics of the columns: `average`, `mean`, `stddev`, `min`, `max`, or a percentile
    /// such as `p90` or `p99_9`.
    #[arg(long = "metric", num_args = 1.., default_values = Variant::AUTOCANNON_METRICS)]
    pub metrics: Vec<String>,

    /// Units of the columns: `count`, `duration`, `size`, or `ratio`.
    /// Defaults to `ratio` for `stddev` and `count` otherwise.
    #[arg(long = "unit", num_args = 1..)]
    pub units: Vec<Unit>,

    /// Output arguments.
    #[command(flatten)]
    pub output: benchmark_reporter::OutputArguments,
}

impl Arguments {
    /// The long flags that may also be spelled with a single dash.
    pub const LONG_FLAGS: [&'static str; 4] = ["file", "statistic", "metric", "unit"];

    ///
    /// Parses the process arguments, accepting single-dash long flags.
    ///
    pub fn parse_normalized() -> Result<Self, clap::Error> {
        let long_flags: Vec<&str> = Self::LONG_FLAGS
            .into_iter()
            .chain(benchmark_reporter::OutputArguments::LONG_FLAGS)
            .collect();
        Self::try_parse_from(benchmark_reporter::util::args::normalize_long_flags(
            std::env::args_os(),
            long_flags.as_slice(),
        ))
    }

    ///
    /// Validates the command line arguments.
    ///
    pub fn validate(&self) -> Result<(), clap::Error> {
        if self.statistics.len() != self.metrics.len() {
            return Err(Self::command().error(
                ErrorKind::WrongNumberOfValues,
                "please provide the same number of arguments to `--statistic` and `--metric`",
            ));
        }
        if !self.units.is_empty() && self.units.len() != self.metrics.len() {
            return Err(Self::command().error(
                ErrorKind::WrongNumberOfValues,
                "please provide either no `--unit` or one per `--metric`",
            ));
        }
        Ok(())
    }
}
