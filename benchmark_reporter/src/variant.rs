//!
//! Report variants of the supported load generators.
//!

use crate::format::unit::Unit;
use crate::input::text::metric::Metric;
use crate::names::NameResolver;
use crate::names::NameTable;
use crate::table::column::Column;

///
/// Report variant.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// autocannon JSON results.
    #[default]
    Autocannon,
    /// wrk text results.
    Wrk,
}

impl Variant {
    /// The default autocannon statistic categories of the report columns.
    pub const AUTOCANNON_STATISTICS: [&'static str; 4] =
        ["latency", "latency", "throughput", "throughput"];
    /// The default autocannon metrics of the report columns.
    pub const AUTOCANNON_METRICS: [&'static str; 4] = ["p99_9", "stddev", "average", "stddev"];

    /// The wrk configurations, in row order.
    pub const WRK_CONFIGURATIONS: [&'static str; 5] = [
        "stock",
        "spectre_sfi_aslr",
        "spectre_sfi_full",
        "spectre_cet_aslr",
        "spectre_cet_full",
    ];
    /// The wrk metrics, in result file line order.
    pub const WRK_METRICS: [&'static str; 3] = [
        "avg_lat_microseconds",
        "tail_lat_microseconds",
        "throughput",
    ];
    /// The wrk metric joined from the artifact folder.
    pub const WRK_BINARY_SIZE_METRIC: &'static str = "bin_size";

    ///
    /// Returns the label of the top-left header cell.
    ///
    pub fn corner(&self) -> &'static str {
        match self {
            Self::Autocannon => "Configuration",
            Self::Wrk => "Protection",
        }
    }

    ///
    /// Returns the built-in display names.
    ///
    pub fn names(&self) -> NameResolver {
        match self {
            Self::Autocannon => NameResolver::default(),
            Self::Wrk => NameResolver::new(
                NameTable::from_iter([
                    ("stock", "Stock --- unsafe"),
                    ("spectre_sfi_aslr", r"\sysDesignOne with ASLR"),
                    ("spectre_sfi_full", r"\sysDesignOne deterministic (CBP-to-BTB)"),
                    ("spectre_cet_aslr", r"\sysDesignTwo with ASLR"),
                    ("spectre_cet_full", r"\sysDesignTwo deterministic (Interlock)"),
                ]),
                NameTable::from_iter([
                    ("msghash_check_c", r"\cdnHash"),
                    ("html_template", r"\cdnTemplatedHTML"),
                    ("xml_to_json", r"\cdnXMLtoJSON"),
                    ("jpeg_resize_c", r"\cdnJpgQuality"),
                    ("tflite", r"\cdnML"),
                ]),
                NameTable::from_iter([
                    ("avg_lat_microseconds", "Avg Lat"),
                    ("tail_lat_microseconds", "Tail Lat"),
                    ("throughput", "Thru-put"),
                    (Self::WRK_BINARY_SIZE_METRIC, "Bin Size"),
                ]),
            ),
        }
    }

    ///
    /// Returns the wrk result file metrics, with the artifact size last if requested.
    ///
    pub fn wrk_metrics(with_binary_size: bool) -> Vec<Metric> {
        let mut metrics: Vec<Metric> = Self::WRK_METRICS
            .iter()
            .map(|name| Metric::line(name))
            .collect();
        if with_binary_size {
            metrics.push(Metric::artifact_size(Self::WRK_BINARY_SIZE_METRIC));
        }
        metrics
    }

    ///
    /// Returns the flat report columns of wrk metrics.
    ///
    pub fn wrk_columns(metrics: &[Metric]) -> anyhow::Result<Vec<Column>> {
        metrics
            .iter()
            .map(|metric| {
                let unit = match metric.name.as_str() {
                    "avg_lat_microseconds" | "tail_lat_microseconds" => Unit::Duration,
                    "throughput" => Unit::Count,
                    Self::WRK_BINARY_SIZE_METRIC => Unit::Size,
                    name => anyhow::bail!("Unknown unit for metric `{name}`"),
                };
                Ok(Column::flat(metric.name.as_str(), unit))
            })
            .collect()
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Autocannon => write!(f, "autocannon"),
            Self::Wrk => write!(f, "wrk"),
        }
    }
}
