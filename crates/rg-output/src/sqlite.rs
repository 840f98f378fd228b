//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `history.db` in the configured output directory with
//! five tables.  Each `write_day` call runs inside one transaction — the
//! commit granularity is one simulated day, so an interrupted generation
//! loses at most the in-flight day.

use std::path::Path;

use rusqlite::Connection;

use crate::row::{DayRows, INFRA_CAUSE, INFRA_COMPONENT, MetricsRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes generated history to an SQLite database.
pub struct SqliteWriter {
    conn: Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `history.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("history.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS route_runs (
                 id            INTEGER PRIMARY KEY,
                 user_id       INTEGER NOT NULL,
                 route_pool_id TEXT    NOT NULL,
                 base_id       TEXT    NOT NULL,
                 run_date      TEXT    NOT NULL,
                 shift_start   TEXT    NOT NULL,
                 status        TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS stop_visits (
                 id                 INTEGER PRIMARY KEY,
                 route_run_id       INTEGER NOT NULL,
                 stop_id            TEXT    NOT NULL,
                 sequence           INTEGER NOT NULL,
                 origin_type        TEXT    NOT NULL,
                 arrived_at         TEXT    NOT NULL,
                 departed_at        TEXT    NOT NULL,
                 planned_distance_m REAL    NOT NULL,
                 planned_duration_s REAL    NOT NULL,
                 duration_minutes   INTEGER NOT NULL,
                 picked_up_litter   INTEGER NOT NULL,
                 emptied_trash      INTEGER NOT NULL,
                 washed_shelter     INTEGER NOT NULL,
                 washed_pad         INTEGER NOT NULL,
                 washed_can         INTEGER NOT NULL,
                 level              INTEGER NOT NULL,
                 logged_volume      INTEGER NOT NULL,
                 volume_logged_at   TEXT    NOT NULL,
                 hazard_id          INTEGER,
                 infra_issue_id     INTEGER
             );
             CREATE TABLE IF NOT EXISTS hazards (
                 id            INTEGER PRIMARY KEY,
                 stop_id       TEXT    NOT NULL,
                 stop_visit_id INTEGER NOT NULL,
                 reported_at   TEXT    NOT NULL,
                 hazard_type   TEXT    NOT NULL,
                 severity      INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS infrastructure_issues (
                 id               INTEGER PRIMARY KEY,
                 stop_id          TEXT    NOT NULL,
                 stop_visit_id    INTEGER NOT NULL,
                 reported_at      TEXT    NOT NULL,
                 issue_type       TEXT    NOT NULL,
                 severity         INTEGER NOT NULL,
                 component        TEXT    NOT NULL,
                 cause            TEXT    NOT NULL,
                 needs_facilities INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS workforce_metrics (
                 route_run_id     INTEGER PRIMARY KEY,
                 user_id          INTEGER NOT NULL,
                 run_date         TEXT    NOT NULL,
                 total_stops      INTEGER NOT NULL,
                 total_minutes    INTEGER NOT NULL,
                 total_hazards    INTEGER NOT NULL,
                 total_compactors INTEGER NOT NULL,
                 difficulty_score REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_day(&mut self, rows: &DayRows) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let run = &rows.run;
            tx.execute(
                "INSERT INTO route_runs \
                 (id, user_id, route_pool_id, base_id, run_date, shift_start, status) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, 'done')",
                rusqlite::params![
                    run.run_id,
                    run.operator_id,
                    run.pool_id,
                    run.base_id,
                    run.run_date,
                    run.shift_start,
                ],
            )?;

            let mut visit_stmt = tx.prepare_cached(
                "INSERT INTO stop_visits \
                 (id, route_run_id, stop_id, sequence, origin_type, arrived_at, departed_at, \
                  planned_distance_m, planned_duration_s, duration_minutes, picked_up_litter, \
                  emptied_trash, washed_shelter, washed_pad, washed_can, level, logged_volume, \
                  volume_logged_at, hazard_id, infra_issue_id) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, \
                         ?16, ?17, ?18, ?19, ?20)",
            )?;
            for v in &rows.visits {
                visit_stmt.execute(rusqlite::params![
                    v.visit_id,
                    v.run_id,
                    v.stop_key,
                    v.sequence,
                    v.origin,
                    v.arrived_at,
                    v.departed_at,
                    v.planned_distance_m,
                    v.planned_duration_s,
                    v.duration_minutes,
                    v.picked_up_litter as i64,
                    v.emptied_trash as i64,
                    v.washed_shelter as i64,
                    v.washed_pad as i64,
                    v.washed_can as i64,
                    v.level,
                    v.logged_volume,
                    v.volume_logged_at,
                    v.hazard_id,
                    v.infra_id,
                ])?;
            }

            let mut hazard_stmt = tx.prepare_cached(
                "INSERT INTO hazards \
                 (id, stop_id, stop_visit_id, reported_at, hazard_type, severity) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for h in &rows.hazards {
                hazard_stmt.execute(rusqlite::params![
                    h.hazard_id,
                    h.stop_key,
                    h.visit_id,
                    h.reported_at,
                    h.hazard_type,
                    h.severity,
                ])?;
            }

            let mut infra_stmt = tx.prepare_cached(
                "INSERT INTO infrastructure_issues \
                 (id, stop_id, stop_visit_id, reported_at, issue_type, severity, \
                  component, cause, needs_facilities) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 0)",
            )?;
            for i in &rows.infra {
                infra_stmt.execute(rusqlite::params![
                    i.infra_id,
                    i.stop_key,
                    i.visit_id,
                    i.reported_at,
                    i.issue_type,
                    i.severity,
                    INFRA_COMPONENT,
                    INFRA_CAUSE,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO workforce_metrics \
             (route_run_id, user_id, run_date, total_stops, total_minutes, \
              total_hazards, total_compactors, difficulty_score) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                row.run_id,
                row.operator_id,
                row.run_date,
                row.total_stops,
                row.total_minutes,
                row.hazard_visits,
                row.compactor_visits,
                row.difficulty_score,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
