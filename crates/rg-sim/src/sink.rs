//! The persistence contract between the engine and its storage collaborator.

use std::convert::Infallible;

use rg_route::RouteRun;

/// Receives one [`RouteRun`] per simulated day, in chronological order.
///
/// Commit granularity is one day: the driver treats a day as durable only
/// once `commit_day` returns `Ok`, and any error aborts the run at that day
/// with nothing silently skipped.
///
/// # Optional metrics
///
/// Some deployments have no workforce-metrics store.  That absence is a
/// *capability*, probed via [`supports_metrics`][Self::supports_metrics] —
/// never an error to be caught.  A sink that claims the capability and then
/// fails in [`write_metrics`][Self::write_metrics] fails the run like any
/// other sink error.
pub trait RunSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist one day's route run (visits, reports, and all).
    fn commit_day(&mut self, run: &RouteRun) -> Result<(), Self::Error>;

    /// Whether this sink can store per-run workforce metrics.
    fn supports_metrics(&self) -> bool {
        true
    }

    /// Persist the run's aggregate metrics.  Called only when
    /// [`supports_metrics`][Self::supports_metrics] returned `true`.
    fn write_metrics(&mut self, _run: &RouteRun) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Flush and close.  Called once after the final day; idempotent.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// ── MemorySink ────────────────────────────────────────────────────────────────

/// A [`RunSink`] that keeps every run in memory.  The default sink for
/// tests and for callers that post-process the event stream themselves.
#[derive(Default)]
pub struct MemorySink {
    pub runs: Vec<RouteRun>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unwrap the collected runs.
    pub fn into_runs(self) -> Vec<RouteRun> {
        self.runs
    }
}

impl RunSink for MemorySink {
    type Error = Infallible;

    fn commit_day(&mut self, run: &RouteRun) -> Result<(), Infallible> {
        self.runs.push(run.clone());
        Ok(())
    }
}
