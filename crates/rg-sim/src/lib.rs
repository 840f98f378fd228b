//! `rg-sim` — the day-loop orchestrator.
//!
//! # Daily cycle
//!
//! ```text
//! for day in 0..config.num_days:
//!   ① Fill      — every stop accumulates its class rate (visited or not).
//!   ② Route     — the generator produces the day's RouteRun, mutating
//!                 visited stops as the walk progresses.
//!   ③ Commit    — the run is handed to the RunSink; one day = one commit.
//!   ④ Metrics   — written only when the sink reports the capability.
//! ```
//!
//! Days run strictly in order: each day's fill and deep-clean clocks depend
//! on the previous day's outcomes, so there is no parallel-day mode.  Sink
//! failures propagate immediately — a day only counts as committed once the
//! sink returns `Ok`, and the driver never skips-and-continues.

pub mod driver;
pub mod error;
pub mod sink;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use driver::Simulation;
pub use error::{SimError, SimResult};
pub use sink::{MemorySink, RunSink};
