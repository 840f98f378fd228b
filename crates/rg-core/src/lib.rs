//! `rg-core` — foundational types for the `routegen` synthetic-history
//! generator.
//!
//! This crate is a dependency of every other `rg-*` crate.  It intentionally
//! has no `rg-*` dependencies and minimal external ones (only `rand`,
//! `chrono`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`ids`]    | `StopId`, `RunId`, `VisitId`, `ReportId`                  |
//! | [`kinds`]  | `PriorityClass`, `HazardKind`, `InfraKind`, `OriginKind`, `ServiceLevel` |
//! | [`rng`]    | `SimRng` — the single seeded random stream                |
//! | [`time`]   | `Calendar`, `at_minutes`                                  |
//! | [`config`] | `GenConfig`                                               |
//! | [`error`]  | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.          |

pub mod config;
pub mod error;
pub mod ids;
pub mod kinds;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::GenConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{ReportId, RunId, StopId, VisitId};
pub use kinds::{HazardKind, InfraKind, OriginKind, PriorityClass, ServiceLevel};
pub use rng::SimRng;
pub use time::{Calendar, at_minutes};
