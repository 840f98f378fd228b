//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DayRows, MetricsRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// `write_day` receives one committed day at a time, in chronological
/// order; backends that support transactions wrap each call in one.
pub trait OutputWriter {
    /// Write one day's run, visits, and reports.
    fn write_day(&mut self, rows: &DayRows) -> OutputResult<()>;

    /// Write one day's workforce-metrics row.
    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
