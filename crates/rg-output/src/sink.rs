//! `PersistSink<W>` — bridges the driver's `RunSink` to an `OutputWriter`.

use rg_route::RouteRun;
use rg_sim::RunSink;

use crate::row::{DayRows, MetricsRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`RunSink`] that flattens each committed day into rows and hands them
/// to any [`OutputWriter`] backend (CSV, SQLite, …).
///
/// Metrics are written by default; [`without_metrics`][Self::without_metrics]
/// models a deployment whose store lacks the workforce-metrics capability —
/// the driver probes `supports_metrics` and skips the write entirely.
pub struct PersistSink<W: OutputWriter> {
    writer: W,
    metrics: bool,
}

impl<W: OutputWriter> PersistSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, metrics: true }
    }

    /// Drop the metrics capability.
    pub fn without_metrics(mut self) -> Self {
        self.metrics = false;
        self
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: OutputWriter> RunSink for PersistSink<W> {
    type Error = OutputError;

    fn commit_day(&mut self, run: &RouteRun) -> Result<(), OutputError> {
        self.writer.write_day(&DayRows::from_run(run))
    }

    fn supports_metrics(&self) -> bool {
        self.metrics
    }

    fn write_metrics(&mut self, run: &RouteRun) -> Result<(), OutputError> {
        self.writer.write_metrics(&MetricsRow::from_run(run))
    }

    fn finish(&mut self) -> Result<(), OutputError> {
        self.writer.finish()
    }
}
