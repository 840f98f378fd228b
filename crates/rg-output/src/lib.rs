//! `rg-output` — file-based persistence backends for generated history.
//!
//! The simulation driver talks to a `RunSink`; [`PersistSink`] implements
//! that contract on top of any [`OutputWriter`] backend:
//!
//! - [`CsvWriter`] — five CSV files, one per record family.
//! - [`SqliteWriter`] (feature `sqlite`) — one database, one transaction per
//!   simulated day.
//!
//! Both backends write the same table set: `route_runs`, `stop_visits`,
//! `hazards`, `infrastructure_issues`, `workforce_metrics`.

pub mod csv;
pub mod error;
pub mod row;
pub mod sink;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{DayRows, HazardRow, InfraRow, MetricsRow, RouteRunRow, VisitRow};
pub use sink::PersistSink;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
pub use writer::OutputWriter;
