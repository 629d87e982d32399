//!
//! The autocannon report binary.
//!

pub(crate) mod arguments;

use colored::Colorize;

use benchmark_reporter::Column;
use benchmark_reporter::Output;
use benchmark_reporter::Partition;
use benchmark_reporter::Table;
use benchmark_reporter::Variant;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let arguments = Arguments::parse_normalized().unwrap_or_else(|error| error.exit());
    if let Err(error) = arguments.validate() {
        error.exit();
    }

    let exit_code = match main_inner(arguments) {
        Ok(()) => benchmark_reporter::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{} {error:?}", "Error:".bright_red().bold());
            benchmark_reporter::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let quiet = arguments.output.quiet;
    if !quiet {
        eprintln!(
            "    {} {} report v{} ({} result file(s))",
            "Starting".bright_green().bold(),
            Variant::Autocannon,
            env!("CARGO_PKG_VERSION"),
            arguments.files.len(),
        );
    }

    let columns = Column::from_lists(
        arguments.statistics.as_slice(),
        arguments.metrics.as_slice(),
        arguments.units.as_slice(),
    )?;
    let names = arguments.output.names(Variant::Autocannon)?;

    let merged = benchmark_reporter::read_json_reports(arguments.files.as_slice())?;
    if !quiet {
        for configuration in merged.overridden.iter() {
            eprintln!(
                "{} Configuration `{configuration}` is replaced by a later result file",
                "Warning:".yellow().bold(),
            );
        }
    }
    let results = merged.results;

    let configurations = results.configurations();
    let workloads = results.workloads();
    let table = Table::new(
        &results,
        configurations.as_slice(),
        workloads.as_slice(),
        columns.as_slice(),
        &names,
        Variant::Autocannon.corner(),
    );
    let partition = Partition::by_membership(
        workloads.as_slice(),
        arguments.output.bottom.as_slice(),
    );

    let output = Output::try_from((table, &partition, &arguments.output.destinations()))?;
    let destinations = output
        .files
        .iter()
        .map(|file| file.destination.to_string())
        .collect::<Vec<String>>();
    output.write()?;

    if !quiet {
        eprintln!(
            "    {} {} configuration(s) x {} workload(s) to {}",
            "Finished".bright_green().bold(),
            configurations.len(),
            workloads.len(),
            destinations.join(", "),
        );
    }
    Ok(())
}
