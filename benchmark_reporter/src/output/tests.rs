//!
//! Tests for the report output.
//!

use crate::format::unit::Unit;
use crate::model::ResultCollection;
use crate::names::NameResolver;
use crate::table::column::Column;
use crate::table::error::Error as TableError;
use crate::table::partition::Partition;
use crate::table::Table;

use super::file::Destination;
use super::Destinations;
use super::Output;

fn results() -> ResultCollection {
    serde_json::from_str(
        r#"{
            "stock": {
                "echo_server": { "latency": { "p99": 1 } },
                "tflite": { "latency": { "p99": 2 } },
                "fib_c": { "latency": { "p99": 3 } }
            },
            "spectre_cet_full": {
                "echo_server": { "latency": { "p99": 4 } },
                "tflite": { "latency": { "p99": 5 } },
                "fib_c": { "latency": { "p99": 6 } }
            }
        }"#,
    )
    .expect("Valid results")
}

#[test]
fn split_tables_go_to_separate_files() {
    let folder = tempfile::tempdir().expect("Failed to create a temporary directory");
    let results = results();
    let configurations = results.configurations();
    let workloads = results.workloads();
    let columns = vec![Column::categorized("latency", "p99", Unit::Count)];
    let names = NameResolver::default();
    let table = Table::new(&results, &configurations, &workloads, &columns, &names, "");
    let partition = Partition::by_membership(&workloads, &["tflite"]);
    let destinations = Destinations {
        primary: Some(folder.path().join("top.tex")),
        secondary: Some(folder.path().join("bottom.tex")),
    };

    let output =
        Output::try_from((table, &partition, &destinations)).expect("Failed to render tables");
    assert_eq!(output.files.len(), 2);
    output.write().expect("Failed to write tables");

    let top = std::fs::read_to_string(folder.path().join("top.tex")).expect("Top table exists");
    let bottom =
        std::fs::read_to_string(folder.path().join("bottom.tex")).expect("Bottom table exists");

    assert!(top.contains(r"{echo\_server}"));
    assert!(top.contains(r"{fib\_c}"));
    assert!(!top.contains("tflite"));
    assert!(top.contains(r"\\\cline{2-3}"));

    assert!(bottom.contains("{tflite}"));
    assert!(!bottom.contains("echo"));
    assert!(!bottom.contains("fib"));
    assert!(bottom.contains(r"\\\cline{2-2}"));
    assert!(bottom.contains(&format!("{:<15}\n", " & 5.00")));
}

#[test]
fn empty_bottom_table_is_not_written() {
    let folder = tempfile::tempdir().expect("Failed to create a temporary directory");
    let results = results();
    let configurations = results.configurations();
    let workloads = results.workloads();
    let columns = vec![Column::categorized("latency", "p99", Unit::Count)];
    let names = NameResolver::default();
    let table = Table::new(&results, &configurations, &workloads, &columns, &names, "");
    let partition = Partition::by_membership(&workloads, &["absent"]);
    let destinations = Destinations {
        primary: Some(folder.path().join("top.tex")),
        secondary: Some(folder.path().join("bottom.tex")),
    };

    let output =
        Output::try_from((table, &partition, &destinations)).expect("Failed to render tables");
    output.write().expect("Failed to write tables");

    assert!(folder.path().join("top.tex").exists());
    assert!(!folder.path().join("bottom.tex").exists());
}

#[test]
fn failed_write_leaves_no_report_file() {
    let folder = tempfile::tempdir().expect("Failed to create a temporary directory");
    let results = results();
    let configurations = results.configurations();
    let workloads = results.workloads();
    let columns = vec![Column::categorized("latency", "p99", Unit::Count)];
    let names = NameResolver::default();
    let table = Table::new(&results, &configurations, &workloads, &columns, &names, "");
    let partition = Partition::by_membership(&workloads, &["tflite"]);
    let destinations = Destinations {
        primary: Some(folder.path().join("top.tex")),
        secondary: Some(folder.path().join("absent").join("bottom.tex")),
    };

    let output =
        Output::try_from((table, &partition, &destinations)).expect("Failed to render tables");
    assert!(output.write().is_err());

    assert!(!folder.path().join("top.tex").exists());
    let leftovers = std::fs::read_dir(folder.path())
        .expect("Temporary directory is readable")
        .count();
    assert_eq!(leftovers, 0);
}

#[test]
fn shared_destination_gets_both_tables() {
    let results = results();
    let configurations = results.configurations();
    let workloads = results.workloads();
    let columns = vec![Column::categorized("latency", "p99", Unit::Count)];
    let names = NameResolver::default();
    let table = Table::new(&results, &configurations, &workloads, &columns, &names, "");
    let partition = Partition::by_membership(&workloads, &["fib_c"]);

    let output = Output::try_from((table, &partition, &Destinations::default()))
        .expect("Failed to render tables");

    assert_eq!(output.files.len(), 1);
    assert_eq!(output.files[0].destination, Destination::Stdout);
    let content = output.files[0].content.as_str();
    assert_eq!(content.matches(r"\multirow").count(), 2);
    let first_table_end = content.find(r"{fib\_c}").expect("Bottom table is rendered");
    assert!(content[..first_table_end].contains("tflite"));
}

#[test]
fn failing_table_produces_no_output() {
    let results = results();
    let configurations = results.configurations();
    let workloads = results.workloads();
    let columns = vec![Column::categorized("latency", "p50", Unit::Count)];
    let names = NameResolver::default();
    let table = Table::new(&results, &configurations, &workloads, &columns, &names, "");
    let partition = Partition::by_membership::<&str>(&workloads, &[]);

    assert!(matches!(
        Output::try_from((table, &partition, &Destinations::default())),
        Err(TableError::Lookup(_))
    ));
}

#[test]
fn no_workloads_is_an_error() {
    let results = ResultCollection::new();
    let names = NameResolver::default();
    let columns = vec![Column::categorized("latency", "p99", Unit::Count)];
    let table = Table::new(&results, &[], &[], &columns, &names, "");

    assert!(matches!(
        Output::try_from((table, &Partition::default(), &Destinations::default())),
        Err(TableError::NoWorkloads)
    ));
}
