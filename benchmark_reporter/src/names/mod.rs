//!
//! Display names of report rows, column groups and columns.
//!

pub mod overrides;


use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::format::latex;

use self::overrides::Overrides;

///
/// Identifier to label table.
///
/// Labels are emitted verbatim, so they may carry LaTeX macros such as `\cdnHash`.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameTable {
    /// Labels keyed by identifier.
    labels: BTreeMap<String, String>,
}

impl NameTable {
    ///
    /// Looks up the label of `identifier`, falling back to the escaped identifier.
    ///
    pub fn resolve<'a>(&'a self, identifier: &'a str) -> Cow<'a, str> {
        match self.labels.get(identifier) {
            Some(label) => Cow::Borrowed(label.as_str()),
            None => latex::escape(identifier),
        }
    }

    ///
    /// Returns the label of `identifier` if the table has one.
    ///
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.labels.get(identifier).map(String::as_str)
    }

    ///
    /// Adds or replaces a label.
    ///
    pub fn insert(&mut self, identifier: String, label: String) {
        self.labels.insert(identifier, label);
    }
}

impl<S> FromIterator<(S, S)> for NameTable
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, S)>>(entries: I) -> Self {
        Self {
            labels: entries
                .into_iter()
                .map(|(identifier, label)| (identifier.into(), label.into()))
                .collect(),
        }
    }
}

///
/// Display name resolver.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameResolver {
    /// Configuration labels, shown at the start of each row.
    pub configurations: NameTable,
    /// Workload labels, shown above each column group.
    pub workloads: NameTable,
    /// Metric labels, shown above each column.
    pub metrics: NameTable,
}

impl NameResolver {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(configurations: NameTable, workloads: NameTable, metrics: NameTable) -> Self {
        Self {
            configurations,
            workloads,
            metrics,
        }
    }

    ///
    /// Returns the label of a workload.
    ///
    pub fn workload<'a>(&'a self, identifier: &'a str) -> Cow<'a, str> {
        self.workloads.resolve(identifier)
    }

    ///
    /// Returns the label of a metric.
    ///
    pub fn metric<'a>(&'a self, identifier: &'a str) -> Cow<'a, str> {
        self.metrics.resolve(identifier)
    }

    ///
    /// Returns the header label of a column.
    ///
    /// Looks up `statistic(metric)` first and `metric` second, falling back to the
    /// escaped `statistic(metric)`.
    ///
    pub fn column<'a>(&'a self, statistic: Option<&str>, metric: &'a str) -> Cow<'a, str> {
        match self.column_label(statistic, metric) {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(
                latex::escape(crate::model::qualified_metric(statistic, metric).as_str())
                    .into_owned(),
            ),
        }
    }

    ///
    /// Returns the mapped header label of a column, if any.
    ///
    pub fn column_label(&self, statistic: Option<&str>, metric: &str) -> Option<&str> {
        if statistic.is_some() {
            let qualified = crate::model::qualified_metric(statistic, metric);
            if let Some(label) = self.metrics.get(qualified.as_str()) {
                return Some(label);
            }
        }
        self.metrics.get(metric)
    }

    ///
    /// Adds or replaces labels with the ones from `overrides`.
    ///
    pub fn extend(&mut self, overrides: Overrides) {
        for (identifier, label) in overrides.configurations.into_iter() {
            self.configurations.insert(identifier, label);
        }
        for (identifier, label) in overrides.workloads.into_iter() {
            self.workloads.insert(identifier, label);
        }
        for (identifier, label) in overrides.metrics.into_iter() {
            self.metrics.insert(identifier, label);
        }
    }
}
