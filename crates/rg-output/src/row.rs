//! Plain data rows written by output backends.
//!
//! Flattened from the `rg-route` record types once per day; timestamps are
//! pre-rendered as `YYYY-MM-DD[ HH:MM:SS]` strings so every backend stores
//! identical values.

use rg_route::{RouteRun, StopVisit};

/// Component column written on every infrastructure issue.
pub const INFRA_COMPONENT: &str = "SHELTER";
/// Cause column written on every infrastructure issue.
pub const INFRA_CAUSE: &str = "WEAR_AND_TEAR";

/// One `route_runs` row.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRunRow {
    pub run_id: u32,
    pub operator_id: i64,
    pub pool_id: String,
    pub base_id: String,
    pub run_date: String,
    pub shift_start: String,
}

/// One `stop_visits` row.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitRow {
    pub visit_id: u64,
    pub run_id: u32,
    pub stop_key: String,
    pub sequence: u32,
    pub origin: &'static str,
    pub arrived_at: String,
    pub departed_at: String,
    pub planned_distance_m: f64,
    pub planned_duration_s: f64,
    pub duration_minutes: u32,
    pub picked_up_litter: bool,
    pub emptied_trash: bool,
    pub washed_shelter: bool,
    pub washed_pad: bool,
    pub washed_can: bool,
    pub level: u8,
    pub logged_volume: u8,
    pub volume_logged_at: String,
    pub hazard_id: Option<u64>,
    pub infra_id: Option<u64>,
}

/// One `hazards` row.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardRow {
    pub hazard_id: u64,
    pub stop_key: String,
    pub visit_id: u64,
    pub reported_at: String,
    pub hazard_type: &'static str,
    pub severity: u8,
}

/// One `infrastructure_issues` row.
#[derive(Debug, Clone, PartialEq)]
pub struct InfraRow {
    pub infra_id: u64,
    pub stop_key: String,
    pub visit_id: u64,
    pub reported_at: String,
    pub issue_type: &'static str,
    pub severity: u8,
}

/// One `workforce_metrics` row.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRow {
    pub run_id: u32,
    pub operator_id: i64,
    pub run_date: String,
    pub total_stops: u32,
    pub total_minutes: u32,
    pub hazard_visits: u32,
    pub compactor_visits: u32,
    pub difficulty_score: f64,
}

impl MetricsRow {
    pub fn from_run(run: &RouteRun) -> Self {
        Self {
            run_id: run.id.0,
            operator_id: run.operator_id,
            run_date: run.date.to_string(),
            total_stops: run.metrics.total_stops,
            total_minutes: run.metrics.total_minutes,
            hazard_visits: run.metrics.hazard_visits,
            compactor_visits: run.metrics.compactor_visits,
            difficulty_score: run.metrics.difficulty_score,
        }
    }
}

// ── DayRows ───────────────────────────────────────────────────────────────────

/// Everything one committed day writes, minus the optional metrics row.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRows {
    pub run: RouteRunRow,
    pub visits: Vec<VisitRow>,
    pub hazards: Vec<HazardRow>,
    pub infra: Vec<InfraRow>,
}

impl DayRows {
    pub fn from_run(run: &RouteRun) -> Self {
        let run_row = RouteRunRow {
            run_id: run.id.0,
            operator_id: run.operator_id,
            pool_id: run.pool_id.clone(),
            base_id: run.base_id.clone(),
            run_date: run.date.to_string(),
            shift_start: run.shift_start.to_string(),
        };

        let mut visits = Vec::with_capacity(run.visits.len());
        let mut hazards = Vec::new();
        let mut infra = Vec::new();
        for visit in &run.visits {
            visits.push(visit_row(run.id.0, visit));
            if let Some(h) = &visit.hazard {
                hazards.push(HazardRow {
                    hazard_id: h.id.0,
                    stop_key: visit.stop_key.clone(),
                    visit_id: visit.id.0,
                    reported_at: h.reported_at.to_string(),
                    hazard_type: h.kind.as_str(),
                    severity: h.severity,
                });
            }
            if let Some(i) = &visit.infra {
                infra.push(InfraRow {
                    infra_id: i.id.0,
                    stop_key: visit.stop_key.clone(),
                    visit_id: visit.id.0,
                    reported_at: i.reported_at.to_string(),
                    issue_type: i.kind.as_str(),
                    severity: i.severity,
                });
            }
        }

        Self { run: run_row, visits, hazards, infra }
    }
}

fn visit_row(run_id: u32, visit: &StopVisit) -> VisitRow {
    VisitRow {
        visit_id: visit.id.0,
        run_id,
        stop_key: visit.stop_key.clone(),
        sequence: visit.sequence,
        origin: visit.origin.as_str(),
        arrived_at: visit.arrived_at.to_string(),
        departed_at: visit.departed_at.to_string(),
        planned_distance_m: visit.planned_distance_m,
        planned_duration_s: visit.planned_duration_s,
        duration_minutes: visit.duration_minutes,
        picked_up_litter: visit.work.picked_up_litter,
        emptied_trash: visit.work.emptied_trash,
        washed_shelter: visit.work.washed_shelter,
        washed_pad: visit.work.washed_pad,
        washed_can: visit.work.washed_can,
        level: visit.work.level.as_u8(),
        logged_volume: visit.work.logged_volume,
        volume_logged_at: visit.volume_logged_at.to_string(),
        hazard_id: visit.hazard.as_ref().map(|h| h.id.0),
        infra_id: visit.infra.as_ref().map(|i| i.id.0),
    }
}
