//! Integration tests for the simulation driver.

use chrono::NaiveDate;
use std::fmt;

use rg_core::{GenConfig, PriorityClass};
use rg_route::RouteRun;
use rg_stops::{RosterEntry, VOLUME_CAPACITY};

use crate::driver::Simulation;
use crate::sink::{MemorySink, RunSink};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn config(seed: u64, num_days: u32) -> GenConfig {
    let mut cfg = GenConfig::new(seed, d(2024, 1, 1), num_days);
    cfg.operator_id = 123;
    cfg.pool_id = "NW_D".into();
    cfg.base_id = "NORTH".into();
    cfg
}

fn roster(total: usize, hotspots: usize) -> Vec<RosterEntry> {
    (0..total)
        .map(|i| RosterEntry::new(format!("STOP-{i:04}"), i < hotspots))
        .collect()
}

/// Sink that fails `commit_day` on one specific day index.
struct FailingSink {
    committed: usize,
    fail_at: usize,
}

#[derive(Debug)]
struct InjectedFailure;

impl fmt::Display for InjectedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("injected sink failure")
    }
}

impl std::error::Error for InjectedFailure {}

impl RunSink for FailingSink {
    type Error = InjectedFailure;

    fn commit_day(&mut self, _run: &RouteRun) -> Result<(), InjectedFailure> {
        if self.committed == self.fail_at {
            return Err(InjectedFailure);
        }
        self.committed += 1;
        Ok(())
    }
}

/// Sink without the metrics capability; records whether the driver ever
/// tried to write metrics anyway.
struct NoMetricsSink {
    days: usize,
    metrics_calls: usize,
}

impl RunSink for NoMetricsSink {
    type Error = std::convert::Infallible;

    fn commit_day(&mut self, _run: &RouteRun) -> Result<(), Self::Error> {
        self.days += 1;
        Ok(())
    }

    fn supports_metrics(&self) -> bool {
        false
    }

    fn write_metrics(&mut self, _run: &RouteRun) -> Result<(), Self::Error> {
        self.metrics_calls += 1;
        Ok(())
    }
}

// ── Construction and validation ───────────────────────────────────────────────

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn empty_roster_is_fatal() {
        let result = Simulation::new(config(42, 10), &[]);
        assert!(matches!(result, Err(crate::SimError::Stops(_))));
    }

    #[test]
    fn zero_days_is_fatal() {
        let result = Simulation::new(config(42, 0), &roster(10, 1));
        assert!(matches!(result, Err(crate::SimError::Config(_))));
    }

    #[test]
    fn priorities_assigned_at_construction() {
        let sim = Simulation::new(config(42, 5), &roster(40, 6)).unwrap();
        for profile in sim.store().iter() {
            if profile.is_hotspot() {
                assert_eq!(profile.priority(), PriorityClass::Hotspot);
            }
        }
        // floor(34 × 0.15) = 5 light stops among the 34 non-hotspots.
        let light = sim
            .store()
            .iter()
            .filter(|p| p.priority() == PriorityClass::Light)
            .count();
        assert_eq!(light, 5);
    }
}

// ── Day loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn one_run_per_day_in_order() {
        let mut sim = Simulation::new(config(42, 14), &roster(30, 5)).unwrap();
        let runs = sim.run_collect().unwrap();
        assert_eq!(runs.len(), 14);
        for (i, run) in runs.iter().enumerate() {
            assert_eq!(run.id.0, i as u32);
            assert_eq!(run.date, d(2024, 1, 1 + i as u32));
        }
        assert_eq!(sim.days_done(), 14);
    }

    #[test]
    fn run_days_bounds_the_loop() {
        let mut sim = Simulation::new(config(42, 30), &roster(30, 5)).unwrap();
        let mut sink = MemorySink::new();
        sim.run_days(7, &mut sink).unwrap();
        assert_eq!(sink.runs.len(), 7);
        assert_eq!(sim.days_done(), 7);
        // Finish the rest.
        sim.run(&mut sink).unwrap();
        assert_eq!(sink.runs.len(), 30);
    }

    #[test]
    fn volumes_stay_bounded_over_the_horizon() {
        let mut sim = Simulation::new(config(7, 60), &roster(50, 10)).unwrap();
        let mut sink = MemorySink::new();
        for _ in 0..60 {
            sim.run_days(1, &mut sink).unwrap();
            for profile in sim.store().iter() {
                let v = profile.volume();
                assert!((0.0..=VOLUME_CAPACITY).contains(&v), "volume {v} out of bounds");
            }
        }
    }

    #[test]
    fn unserved_stops_keep_accumulating() {
        // Target 1 stop/day over a 20-stop roster: most stops go unvisited
        // and should still climb toward the capacity clamp.
        let mut cfg = config(5, 12);
        cfg.target_stops_per_day = 1;
        let mut sim = Simulation::new(cfg, &roster(20, 0)).unwrap();
        sim.run_collect().unwrap();
        let full = sim
            .store()
            .iter()
            .filter(|p| p.volume() >= VOLUME_CAPACITY - 1e-9)
            .count();
        // Medium stops reach 4.0 in 8 days; at most 12 of 20 were ever visited.
        assert!(full >= 8, "expected most unvisited stops at capacity, got {full}");
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism_tests {
    use super::*;

    #[test]
    fn identical_seeds_produce_identical_streams() {
        let make = || {
            let mut sim = Simulation::new(config(42, 20), &roster(35, 7)).unwrap();
            sim.run_collect().unwrap()
        };
        let a = make();
        let b = make();
        assert_eq!(a, b);
        // Belt and braces: the rendered form is byte-identical too.
        assert_eq!(format!("{a:?}"), format!("{b:?}"));
    }

    #[test]
    fn different_seeds_diverge() {
        let run_with = |seed| {
            let mut sim = Simulation::new(config(seed, 10), &roster(35, 7)).unwrap();
            sim.run_collect().unwrap()
        };
        assert_ne!(run_with(1), run_with(2));
    }

    #[test]
    fn single_hotspot_end_to_end() {
        // seed=42, one day, one hotspot stop, target 1.
        let mut cfg = config(42, 1);
        cfg.target_stops_per_day = 1;
        let run_once = || {
            let mut sim =
                Simulation::new(cfg.clone(), &[RosterEntry::new("A", true)]).unwrap();
            let runs = sim.run_collect().unwrap();
            assert_eq!(runs.len(), 1);
            let run = &runs[0];
            assert_eq!(run.visits.len(), 1);
            let visit = &run.visits[0];
            assert_eq!(visit.stop_key, "A");
            assert_eq!(visit.sequence, 1);
            assert!(
                (18..=35).contains(&visit.duration_minutes),
                "hotspot duration {} outside [18, 35]",
                visit.duration_minutes
            );
            runs
        };
        let first = run_once();
        let second = run_once();
        assert_eq!(first, second);
    }
}

// ── Sink contract ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod sink_tests {
    use super::*;

    #[test]
    fn sink_failure_aborts_at_that_day() {
        let mut sim = Simulation::new(config(42, 10), &roster(20, 3)).unwrap();
        let mut sink = FailingSink { committed: 0, fail_at: 4 };
        let err = sim.run(&mut sink).unwrap_err();
        assert!(matches!(err, crate::SimError::Sink(_)));
        assert_eq!(sink.committed, 4, "days before the failure stay committed");
        // The failed day was not counted as done.
        assert_eq!(sim.days_done(), 4);
    }

    #[test]
    fn metrics_skipped_without_the_capability() {
        let mut sim = Simulation::new(config(42, 6), &roster(20, 3)).unwrap();
        let mut sink = NoMetricsSink { days: 0, metrics_calls: 0 };
        sim.run(&mut sink).unwrap();
        assert_eq!(sink.days, 6);
        assert_eq!(sink.metrics_calls, 0, "write_metrics must not be called");
    }

    #[test]
    fn memory_sink_collects_everything() {
        let mut sim = Simulation::new(config(9, 3), &roster(10, 2)).unwrap();
        let mut sink = MemorySink::new();
        sim.run(&mut sink).unwrap();
        let runs = sink.into_runs();
        assert_eq!(runs.len(), 3);
        assert!(runs.iter().all(|r| !r.visits.is_empty()));
    }
}
