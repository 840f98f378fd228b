//! Plain record types produced by the daily route generator.
//!
//! All of these are transient within the core: a [`RouteRun`] is handed to
//! the persistence collaborator at the day boundary and can be dropped once
//! the caller acknowledges the commit.

use chrono::{NaiveDate, NaiveDateTime};

use rg_core::{HazardKind, InfraKind, OriginKind, ReportId, RunId, StopId, VisitId};
use rg_events::WorkDecision;

// ── Reports ───────────────────────────────────────────────────────────────────

/// A hazard found during a visit, reported shortly after arrival.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HazardReport {
    pub id: ReportId,
    pub stop: StopId,
    pub visit: VisitId,
    /// Visit arrival plus up to 30 minutes of reporting lag.
    pub reported_at: NaiveDateTime,
    /// Always the stop's favored hazard kind.
    pub kind: HazardKind,
    /// 1 (minor) to 3 (severe).
    pub severity: u8,
}

/// An infrastructure issue found during a visit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfraReport {
    pub id: ReportId,
    pub stop: StopId,
    pub visit: VisitId,
    pub reported_at: NaiveDateTime,
    /// Always the stop's favored infrastructure kind.
    pub kind: InfraKind,
    pub severity: u8,
}

// ── StopVisit ─────────────────────────────────────────────────────────────────

/// One serviced stop within a route run.
#[derive(Clone, Debug, PartialEq)]
pub struct StopVisit {
    pub id: VisitId,
    pub stop: StopId,
    /// The platform's opaque stop key, echoed into every downstream record.
    pub stop_key: String,
    /// Position within the run, starting at 1.
    pub sequence: u32,
    pub origin: OriginKind,
    pub arrived_at: NaiveDateTime,
    pub departed_at: NaiveDateTime,
    /// Route-sheet estimate of the leg into this stop, meters.
    pub planned_distance_m: f64,
    /// Route-sheet estimate of the service time, seconds.
    pub planned_duration_s: f64,
    /// The work performed, as decided at arrival.
    pub work: WorkDecision,
    /// Actual minutes spent, after the priority-window clamp.
    pub duration_minutes: u32,
    /// When the crew logged the can volume (just before servicing).
    pub volume_logged_at: NaiveDateTime,
    pub hazard: Option<HazardReport>,
    pub infra: Option<InfraReport>,
}

// ── RunMetrics ────────────────────────────────────────────────────────────────

/// Workforce metrics aggregated over one route run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunMetrics {
    pub total_stops: u32,
    pub total_minutes: u32,
    /// Visits that produced a hazard report.
    pub hazard_visits: u32,
    /// Compactor servicing is not generated yet; always 0.
    pub compactor_visits: u32,
    /// `0.5 × hazard_visits + 0.01 × total_minutes`, rounded to 2 decimals.
    pub difficulty_score: f64,
}

impl RunMetrics {
    pub fn new(total_stops: u32, total_minutes: u32, hazard_visits: u32) -> Self {
        let raw = 0.5 * hazard_visits as f64 + 0.01 * total_minutes as f64;
        Self {
            total_stops,
            total_minutes,
            hazard_visits,
            compactor_visits: 0,
            difficulty_score: (raw * 100.0).round() / 100.0,
        }
    }
}

// ── RouteRun ──────────────────────────────────────────────────────────────────

/// One simulated day's full set of stop visits plus aggregates.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteRun {
    pub id: RunId,
    pub date: NaiveDate,
    /// Operator user id stamped on every record of this run.
    pub operator_id: i64,
    pub pool_id: String,
    pub base_id: String,
    /// Crew shift start, within the 06:30–08:30 window.
    pub shift_start: NaiveDateTime,
    /// Visits in service order.
    pub visits: Vec<StopVisit>,
    pub metrics: RunMetrics,
}
