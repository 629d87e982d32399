//!
//! Tests for the wrk report arguments.
//!

#![cfg(test)]

use std::ffi::OsString;
use std::path::PathBuf;

use clap::CommandFactory;
use clap::Parser;

use benchmark_reporter::Variant;

use super::arguments::Arguments;

#[test]
fn command_is_consistent() {
    let command = Arguments::command();
    assert_eq!(command.get_name(), "wrk-report");
    command.debug_assert();
}

#[test]
fn defaults() {
    let arguments =
        Arguments::try_parse_from(["wrk-report", "--folders", "run1"]).expect("Valid arguments");
    assert_eq!(arguments.folders, vec![PathBuf::from("run1")]);
    assert_eq!(arguments.sofolder, None);
    assert_eq!(arguments.extension, "txt");
    assert_eq!(arguments.binary_extension, "so");
    assert_eq!(arguments.configurations, Variant::WRK_CONFIGURATIONS.to_vec());
    assert!(!arguments.output.quiet);
}

#[test]
fn folders_are_required() {
    assert!(Arguments::try_parse_from(["wrk-report", "--sofolder", "bin"]).is_err());
}

#[test]
fn legacy_flags() {
    let arguments = Arguments::try_parse_from(Arguments::normalize(
        [
            "wrk-report",
            "-folders",
            "run1",
            "run2",
            "-sofolder",
            "bin",
            "-o1",
            "main.tex",
            "-o2",
            "bottom.tex",
            "-bottom",
            "tflite",
        ]
        .map(OsString::from),
    ))
    .expect("Valid arguments");
    assert_eq!(arguments.folders.len(), 2);
    assert_eq!(arguments.sofolder, Some(PathBuf::from("bin")));
    assert_eq!(arguments.output.primary_output, Some(PathBuf::from("main.tex")));
    assert_eq!(arguments.output.secondary_output, Some(PathBuf::from("bottom.tex")));
    assert_eq!(arguments.output.bottom, vec!["tflite"]);
}

#[test]
fn configurations_override() {
    let arguments = Arguments::try_parse_from([
        "wrk-report",
        "--folders",
        "run1",
        "--configurations",
        "stock",
        "hardened",
    ])
    .expect("Valid arguments");
    assert_eq!(arguments.configurations, vec!["stock", "hardened"]);
}

#[test]
fn ingest_through_arguments() {
    let results = tempfile::tempdir().expect("Temporary directory");
    let binaries = tempfile::tempdir().expect("Temporary directory");
    std::fs::write(
        results.path().join("echo_stock.txt"),
        "header\n100\n200\n5000\n",
    )
    .expect("Result file");
    std::fs::write(binaries.path().join("echo_stock.bin"), vec![0u8; 2048])
        .expect("Artifact file");

    let arguments = Arguments::try_parse_from([
        OsString::from("wrk-report"),
        OsString::from("--folders"),
        results.path().as_os_str().to_owned(),
        OsString::from("--sofolder"),
        binaries.path().as_os_str().to_owned(),
        OsString::from("--binary-extension"),
        OsString::from("bin"),
        OsString::from("--configurations"),
        OsString::from("stock"),
    ])
    .expect("Valid arguments");

    let collection = arguments
        .ingestor()
        .ingest(arguments.folders.as_slice())
        .expect("Ingested");
    assert_eq!(
        collection.value("stock", "echo", None, "bin_size"),
        Ok(2048.0)
    );
    assert_eq!(
        collection.value("stock", "echo", None, "throughput"),
        Ok(5000.0)
    );
}
