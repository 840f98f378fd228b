//! `rg-route` — one simulated day of field work.
//!
//! [`RouteGenerator::generate_day`] turns the current stop state into a
//! [`RouteRun`]: an ordered list of timestamped [`StopVisit`]s plus
//! aggregate [`RunMetrics`].  The generator owns every state mutation
//! (volume resets, deep-clean dates); the decision logic it calls into
//! (`rg-events`) stays side-effect-free.

pub mod generator;
pub mod run;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use generator::{RouteGenerator, draw_shift_start};
pub use run::{HazardReport, InfraReport, RouteRun, RunMetrics, StopVisit};
