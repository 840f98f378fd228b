//! CSV output backend.
//!
//! Creates five files in the configured output directory:
//! - `route_runs.csv`
//! - `stop_visits.csv`
//! - `hazards.csv`
//! - `infrastructure_issues.csv`
//! - `workforce_metrics.csv`
//!
//! Optional foreign keys (`hazard_id`, `infra_issue_id`) are written as
//! empty fields when absent.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::{DayRows, INFRA_CAUSE, INFRA_COMPONENT, MetricsRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes generated history to five CSV files.
pub struct CsvWriter {
    runs: Writer<File>,
    visits: Writer<File>,
    hazards: Writer<File>,
    infra: Writer<File>,
    metrics: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the five CSV files in `dir` and write header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut runs = Writer::from_path(dir.join("route_runs.csv"))?;
        runs.write_record([
            "run_id", "user_id", "route_pool_id", "base_id", "run_date", "shift_start", "status",
        ])?;

        let mut visits = Writer::from_path(dir.join("stop_visits.csv"))?;
        visits.write_record([
            "visit_id", "route_run_id", "stop_id", "sequence", "origin_type",
            "arrived_at", "departed_at", "planned_distance_m", "planned_duration_s",
            "duration_minutes", "picked_up_litter", "emptied_trash", "washed_shelter",
            "washed_pad", "washed_can", "level", "logged_volume", "volume_logged_at",
            "hazard_id", "infra_issue_id",
        ])?;

        let mut hazards = Writer::from_path(dir.join("hazards.csv"))?;
        hazards.write_record([
            "hazard_id", "stop_id", "stop_visit_id", "reported_at", "hazard_type", "severity",
        ])?;

        let mut infra = Writer::from_path(dir.join("infrastructure_issues.csv"))?;
        infra.write_record([
            "infra_id", "stop_id", "stop_visit_id", "reported_at", "issue_type",
            "severity", "component", "cause", "needs_facilities",
        ])?;

        let mut metrics = Writer::from_path(dir.join("workforce_metrics.csv"))?;
        metrics.write_record([
            "route_run_id", "user_id", "run_date", "total_stops", "total_minutes",
            "total_hazards", "total_compactors", "difficulty_score",
        ])?;

        Ok(Self { runs, visits, hazards, infra, metrics, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_day(&mut self, rows: &DayRows) -> OutputResult<()> {
        let run = &rows.run;
        self.runs.write_record(&[
            run.run_id.to_string(),
            run.operator_id.to_string(),
            run.pool_id.clone(),
            run.base_id.clone(),
            run.run_date.clone(),
            run.shift_start.clone(),
            "done".to_string(),
        ])?;

        for v in &rows.visits {
            self.visits.write_record(&[
                v.visit_id.to_string(),
                v.run_id.to_string(),
                v.stop_key.clone(),
                v.sequence.to_string(),
                v.origin.to_string(),
                v.arrived_at.clone(),
                v.departed_at.clone(),
                v.planned_distance_m.to_string(),
                v.planned_duration_s.to_string(),
                v.duration_minutes.to_string(),
                (v.picked_up_litter as u8).to_string(),
                (v.emptied_trash as u8).to_string(),
                (v.washed_shelter as u8).to_string(),
                (v.washed_pad as u8).to_string(),
                (v.washed_can as u8).to_string(),
                v.level.to_string(),
                v.logged_volume.to_string(),
                v.volume_logged_at.clone(),
                v.hazard_id.map(|id| id.to_string()).unwrap_or_default(),
                v.infra_id.map(|id| id.to_string()).unwrap_or_default(),
            ])?;
        }

        for h in &rows.hazards {
            self.hazards.write_record(&[
                h.hazard_id.to_string(),
                h.stop_key.clone(),
                h.visit_id.to_string(),
                h.reported_at.clone(),
                h.hazard_type.to_string(),
                h.severity.to_string(),
            ])?;
        }

        for i in &rows.infra {
            self.infra.write_record(&[
                i.infra_id.to_string(),
                i.stop_key.clone(),
                i.visit_id.to_string(),
                i.reported_at.clone(),
                i.issue_type.to_string(),
                i.severity.to_string(),
                INFRA_COMPONENT.to_string(),
                INFRA_CAUSE.to_string(),
                "0".to_string(),
            ])?;
        }

        Ok(())
    }

    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()> {
        self.metrics.write_record(&[
            row.run_id.to_string(),
            row.operator_id.to_string(),
            row.run_date.clone(),
            row.total_stops.to_string(),
            row.total_minutes.to_string(),
            row.hazard_visits.to_string(),
            row.compactor_visits.to_string(),
            row.difficulty_score.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.runs.flush()?;
        self.visits.flush()?;
        self.hazards.flush()?;
        self.infra.flush()?;
        self.metrics.flush()?;
        Ok(())
    }
}
