//! `rg-events` — what happens during one stop visit.
//!
//! This crate only *decides*; it never mutates stop state.  [`compose`]
//! reads a profile and returns a [`WorkDecision`]; the route generator owns
//! all resulting state transitions (volume reset, deep-clean date update).
//! Keeping the decision logic side-effect-free makes it independently
//! testable against the probability contract.

pub mod decision;
pub mod duration;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use decision::{WorkDecision, compose, level3_probability};
pub use duration::{compute_duration, service_window};
