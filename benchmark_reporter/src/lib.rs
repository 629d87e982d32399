//!
//! The benchmark reporter library.
//!

pub mod format;
pub mod input;
pub mod model;
pub mod names;
pub mod output;
pub mod table;
pub mod util;
pub mod variant;

pub use crate::format::format_number;
pub use crate::format::format_percentage;
pub use crate::format::format_size;
pub use crate::format::unit::Unit;
pub use crate::input::artifact::ArtifactFolder;
pub use crate::input::error::Error as InputError;
pub use crate::input::read_json_reports;
pub use crate::input::text::metric::Metric as TextMetric;
pub use crate::input::text::TextIngestor;
pub use crate::model::error::LookupError;
pub use crate::model::workload::WorkloadResult;
pub use crate::model::ResultCollection;
pub use crate::names::overrides::Overrides as NameOverrides;
pub use crate::names::NameResolver;
pub use crate::names::NameTable;
pub use crate::output::arguments::Arguments as OutputArguments;
pub use crate::output::file::Destination;
pub use crate::output::Destinations;
pub use crate::output::Output;
pub use crate::table::column::Column;
pub use crate::table::error::Error as TableError;
pub use crate::table::partition::Partition;
pub use crate::table::Table;
pub use crate::variant::Variant;

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;
/// The process exit code on a failed report.
pub const EXIT_CODE_FAILURE: i32 = 1;
