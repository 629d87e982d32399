//!
//! LaTeX report table.
//!

pub mod column;
pub mod error;
pub mod partition;


use std::fmt::Write;

use crate::format::latex;
use crate::format::unit::Unit;
use crate::model::ResultCollection;
use crate::names::NameResolver;

use self::column::Column;
use self::error::Error as TableError;

///
/// LaTeX report table.
///
/// Rows are configurations, column groups are workloads, and every group repeats
/// the same columns.
///
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    /// The measurements.
    pub results: &'a ResultCollection,
    /// The configurations, in row order.
    pub configurations: &'a [String],
    /// The workloads, in column group order.
    pub workloads: &'a [String],
    /// The columns of every workload group.
    pub columns: &'a [Column],
    /// The display names.
    pub names: &'a NameResolver,
    /// The label of the top-left header cell.
    pub corner: &'a str,
}

impl<'a> Table<'a> {
    /// The width data cells are padded to.
    pub const CELL_WIDTH: usize = 15;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        results: &'a ResultCollection,
        configurations: &'a [String],
        workloads: &'a [String],
        columns: &'a [Column],
        names: &'a NameResolver,
        corner: &'a str,
    ) -> Self {
        Self {
            results,
            configurations,
            workloads,
            columns,
            names,
            corner,
        }
    }

    ///
    /// Returns the same table restricted to `workloads`.
    ///
    pub fn with_workloads<'b>(&self, workloads: &'b [String]) -> Table<'b>
    where
        'a: 'b,
    {
        Table {
            results: self.results,
            configurations: self.configurations,
            workloads,
            columns: self.columns,
            names: self.names,
            corner: self.corner,
        }
    }

    ///
    /// Renders the table.
    ///
    /// Every cell is resolved before anything is written, so a missing measurement
    /// yields an error and no partial table.
    ///
    pub fn render(&self) -> Result<String, TableError> {
        if self.configurations.is_empty() {
            return Err(TableError::NoConfigurations);
        }
        if self.workloads.is_empty() {
            return Err(TableError::NoWorkloads);
        }
        if self.columns.is_empty() {
            return Err(TableError::NoColumns);
        }

        let rows = self
            .configurations
            .iter()
            .map(|configuration| self.row(configuration.as_str()))
            .collect::<Result<Vec<Vec<String>>, TableError>>()?;

        let mut content = String::with_capacity(self.estimate_size());
        self.write_workload_header(&mut content);
        self.write_column_header(&mut content);
        for (configuration, cells) in self.configurations.iter().zip(rows.iter()) {
            match self.names.configurations.get(configuration.as_str()) {
                Some(label) => writeln!(content, "{label}"),
                None => writeln!(content, "{} ", latex::escape(configuration.as_str())),
            }
            .expect("Always valid");
            for group in cells.chunks(self.columns.len()) {
                for cell in group.iter() {
                    write!(
                        content,
                        "{:<width$}",
                        format!(" & {cell}"),
                        width = Self::CELL_WIDTH
                    )
                    .expect("Always valid");
                }
                content.push('\n');
            }
            content.push_str("\\\\\\hline\n\n");
        }
        Ok(content)
    }

    ///
    /// Computes the formatted cells of a configuration row.
    ///
    fn row(&self, configuration: &str) -> Result<Vec<String>, TableError> {
        let mut cells = Vec::with_capacity(self.workloads.len() * self.columns.len());
        for workload in self.workloads.iter() {
            for column in self.columns.iter() {
                let value = self.results.value(
                    configuration,
                    workload.as_str(),
                    column.statistic.as_deref(),
                    column.metric.as_str(),
                )?;
                let value = match column.unit {
                    Unit::Ratio => {
                        let average = self.results.value(
                            configuration,
                            workload.as_str(),
                            column.statistic.as_deref(),
                            Column::AVERAGE_METRIC,
                        )?;
                        crate::model::relative_stddev(value, average)
                    }
                    _ => value,
                };
                cells.push(latex::escape(column.unit.format(value).as_str()).into_owned());
            }
        }
        Ok(cells)
    }

    ///
    /// Writes the header row with one multi-column cell per workload.
    ///
    fn write_workload_header(&self, content: &mut String) {
        writeln!(content, "\\multirow{{2}}{{1cm}}{{{}}} ", self.corner).expect("Always valid");
        for workload in self.workloads.iter() {
            writeln!(
                content,
                " & \\multicolumn{{{}}}{{c|}}{{{}}}",
                self.columns.len(),
                self.names.workload(workload.as_str())
            )
            .expect("Always valid");
        }
        writeln!(
            content,
            "\\\\\\cline{{2-{}}}\n",
            self.workloads.len() * self.columns.len() + 1
        )
        .expect("Always valid");
    }

    ///
    /// Writes the header row with one cell per workload column.
    ///
    fn write_column_header(&self, content: &mut String) {
        for _workload in self.workloads.iter() {
            for column in self.columns.iter() {
                let statistic = column.statistic.as_deref();
                match self.names.column_label(statistic, column.metric.as_str()) {
                    Some(label) => write!(content, " & {label} \t"),
                    None => write!(
                        content,
                        " & {}\t",
                        self.names.column(statistic, column.metric.as_str())
                    ),
                }
                .expect("Always valid");
            }
            content.push('\n');
        }
        content.push_str("\\\\\\hline\n\n");
    }

    ///
    /// Estimates the rendered size to preallocate the output buffer.
    ///
    fn estimate_size(&self) -> usize {
        let cells = (self.configurations.len() + 1) * self.workloads.len() * self.columns.len();
        let lines = self.configurations.len() * (self.workloads.len() + 3);
        cells * (Self::CELL_WIDTH + 1) + lines * 48
    }
}
