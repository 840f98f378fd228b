//! The daily route generator.
//!
//! `generate_day` walks one simulated day in four phases, mirroring how a
//! crew's shift unfolds:
//!
//! 1. **Select** — sample up to the target count of stops uniformly without
//!    replacement.  No prioritization weighting at selection time; selection
//!    bias belongs to future work, not this engine.
//! 2. **Shift start** — draw a start time inside the 06:30–08:30 window.
//! 3. **Walk** — visit the sampled stops in sample order, advancing a
//!    simulated clock through travel gaps and service durations, deciding
//!    work via `rg_events::compose` and applying the resulting state
//!    mutations here (the composer never mutates).
//! 4. **Aggregate** — run totals and the difficulty score.
//!
//! Every random draw below comes from the shared stream; the order in this
//! file is the reproducibility contract for a day.

use chrono::{Duration, NaiveDate};

use rg_core::{GenConfig, OriginKind, ReportId, RunId, SimRng, StopId, VisitId, at_minutes};
use rg_events::{compose, compute_duration};
use rg_stops::StopStore;

use crate::run::{HazardReport, InfraReport, RouteRun, RunMetrics, StopVisit};

/// Shift starts no earlier than 06:30...
pub const SHIFT_EARLIEST_MIN: u32 = 6 * 60 + 30;
/// ...and no later than 08:30.
pub const SHIFT_LATEST_MIN: u32 = 8 * 60 + 30;

/// Draw a shift start as minutes from midnight, inside
/// [`SHIFT_EARLIEST_MIN`]..=[`SHIFT_LATEST_MIN`].
///
/// Hour uniform [6, 8] then minute uniform [0, 59]; the edge hours clamp to
/// the half-hour boundary (6:xx can't start before :30, 8:xx can't start
/// after :30).
pub fn draw_shift_start(rng: &mut SimRng) -> u32 {
    let hour: u32 = rng.gen_range(6..=8);
    let minute: u32 = rng.gen_range(0..=59);
    (hour * 60 + minute).clamp(SHIFT_EARLIEST_MIN, SHIFT_LATEST_MIN)
}

// ── RouteGenerator ────────────────────────────────────────────────────────────

/// Produces one [`RouteRun`] per call, carrying its id counters across days
/// so visit and report ids stay unique over the whole horizon.
pub struct RouteGenerator {
    target_stops: usize,
    operator_id: i64,
    pool_id: String,
    base_id: String,
    next_run: u32,
    next_visit: u64,
    next_report: u64,
}

impl RouteGenerator {
    pub fn new(config: &GenConfig) -> Self {
        Self {
            target_stops: config.target_stops_per_day,
            operator_id: config.operator_id,
            pool_id: config.pool_id.clone(),
            base_id: config.base_id.clone(),
            next_run: 0,
            next_visit: 0,
            next_report: 0,
        }
    }

    /// Generate one day's route over the current stop state.
    ///
    /// The caller is responsible for having applied that day's fill
    /// accumulation first; this method applies the visit-driven mutations
    /// (volume resets, deep-clean dates) as the walk progresses.
    pub fn generate_day(
        &mut self,
        date: NaiveDate,
        store: &mut StopStore,
        rng: &mut SimRng,
    ) -> RouteRun {
        let run_id = RunId(self.next_run);
        self.next_run += 1;

        // ── Phase 1: select today's stops ─────────────────────────────────
        let count = store.len().min(self.target_stops);
        let selected: Vec<StopId> = rng
            .sample(store.len(), count)
            .into_iter()
            .map(|i| StopId(i as u32))
            .collect();

        // ── Phase 2: shift start ──────────────────────────────────────────
        let shift_start = at_minutes(date, draw_shift_start(rng) as i64);
        let mut clock = shift_start;

        // ── Phase 3: walk the stops in sample order ───────────────────────
        let mut visits = Vec::with_capacity(count);
        let mut total_minutes: u32 = 0;
        let mut hazard_visits: u32 = 0;

        for (i, &stop_id) in selected.iter().enumerate() {
            let sequence = (i + 1) as u32;

            let origin = match rng.random::<f64>() {
                r if r < 0.85 => OriginKind::Planned,
                r if r < 0.95 => OriginKind::Emergency,
                _ => OriginKind::AdHoc,
            };

            let travel_gap: i64 = rng.gen_range(2..=12);
            clock += Duration::minutes(travel_gap);
            let arrived_at = clock;

            // Decide, then time the work.
            let profile = store.profile(stop_id);
            let class = profile.priority();
            let work = compose(profile, date, rng);
            let base_minutes: u32 = rng.gen_range(6..=12);
            let duration_minutes = compute_duration(base_minutes, &work, class, rng);

            clock += Duration::minutes(duration_minutes as i64);
            let departed_at = clock;
            total_minutes += duration_minutes;

            // Apply the stop's state transitions (the composer only decided).
            let profile = store.profile_mut(stop_id);
            if work.emptied_trash {
                profile.reset_volume();
            }
            if work.is_level3 {
                profile.record_level3(date);
            }

            // Record supplements, drawn after the state transitions.
            let planned_distance_m: f64 = rng.gen_range(100.0..2000.0);
            let planned_duration_s: f64 = rng.gen_range(120.0..600.0);
            let volume_logged_at = arrived_at - Duration::minutes(rng.gen_range(0..=5));

            let visit_id = VisitId(self.next_visit);
            self.next_visit += 1;

            let profile = store.profile(stop_id);
            let hazard = if work.has_hazard {
                hazard_visits += 1;
                Some(HazardReport {
                    id: self.next_report_id(),
                    stop: stop_id,
                    visit: visit_id,
                    reported_at: arrived_at + Duration::minutes(rng.gen_range(0..=30)),
                    kind: profile.traits().favored_hazard,
                    severity: rng.gen_range(1..=3),
                })
            } else {
                None
            };
            let infra = if work.has_infra {
                Some(InfraReport {
                    id: self.next_report_id(),
                    stop: stop_id,
                    visit: visit_id,
                    reported_at: arrived_at + Duration::minutes(rng.gen_range(0..=30)),
                    kind: profile.traits().favored_infra,
                    severity: rng.gen_range(1..=3),
                })
            } else {
                None
            };

            visits.push(StopVisit {
                id: visit_id,
                stop: stop_id,
                stop_key: profile.key().to_owned(),
                sequence,
                origin,
                arrived_at,
                departed_at,
                planned_distance_m,
                planned_duration_s,
                work,
                duration_minutes,
                volume_logged_at,
                hazard,
                infra,
            });
        }

        // ── Phase 4: aggregate metrics ────────────────────────────────────
        let metrics = RunMetrics::new(visits.len() as u32, total_minutes, hazard_visits);

        RouteRun {
            id: run_id,
            date,
            operator_id: self.operator_id,
            pool_id: self.pool_id.clone(),
            base_id: self.base_id.clone(),
            shift_start,
            visits,
            metrics,
        }
    }

    fn next_report_id(&mut self) -> ReportId {
        let id = ReportId(self.next_report);
        self.next_report += 1;
        id
    }
}
