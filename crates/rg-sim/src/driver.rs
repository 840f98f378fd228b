//! The `Simulation` struct and its day loop.

use rg_core::{Calendar, GenConfig, SimRng};
use rg_route::{RouteGenerator, RouteRun};
use rg_stops::{RosterEntry, StopStore, assign_priorities, fill};

use crate::sink::{MemorySink, RunSink};
use crate::{SimError, SimResult};

/// The simulation driver.
///
/// Owns all mutable state — the stop store, the single seeded random
/// stream, and the route generator's id counters — and is the only
/// component that seeds the stream (once, at construction).
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = Simulation::new(config, &roster)?;
/// let mut sink = PersistSink::new(CsvWriter::new(out_dir)?);
/// sim.run(&mut sink)?;
/// ```
pub struct Simulation {
    config: GenConfig,
    calendar: Calendar,
    store: StopStore,
    rng: SimRng,
    generator: RouteGenerator,
    /// Next day to simulate (0-based offset into the calendar).
    day: u32,
}

impl Simulation {
    /// Validate the configuration, seed the stream, build the store (trait
    /// draws in roster order), and assign priority tiers.
    ///
    /// All configuration errors surface here, before any day runs.
    pub fn new(config: GenConfig, roster: &[RosterEntry]) -> SimResult<Self> {
        config.validate()?;

        let mut rng = SimRng::new(config.seed);
        let mut store = StopStore::from_roster(roster, &mut rng)?;
        assign_priorities(&mut store, &mut rng)?;

        let generator = RouteGenerator::new(&config);
        let calendar = config.calendar();

        tracing::info!(
            stops = store.len(),
            days = config.num_days,
            seed = config.seed,
            start = %calendar.start,
            "simulation initialised"
        );

        Ok(Self { config, calendar, store, rng, generator, day: 0 })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run every remaining day, handing each [`RouteRun`] to `sink`.
    ///
    /// Stops at the first sink error; the failed day is not committed and
    /// no further days start.  Calls `sink.finish()` after the final day.
    pub fn run<S: RunSink>(&mut self, sink: &mut S) -> SimResult<()> {
        while self.day < self.config.num_days {
            self.step_day(sink)?;
        }
        sink.finish().map_err(SimError::sink)?;
        Ok(())
    }

    /// Run at most `n` further days.  The unit of cancellation is "do not
    /// start the next day" — callers use this for bounded stepping.
    pub fn run_days<S: RunSink>(&mut self, n: u32, sink: &mut S) -> SimResult<()> {
        let until = (self.day + n).min(self.config.num_days);
        while self.day < until {
            self.step_day(sink)?;
        }
        Ok(())
    }

    /// Run everything and collect the runs in memory.
    pub fn run_collect(&mut self) -> SimResult<Vec<RouteRun>> {
        let mut sink = MemorySink::new();
        self.run(&mut sink)?;
        Ok(sink.into_runs())
    }

    /// Days simulated so far.
    #[inline]
    pub fn days_done(&self) -> u32 {
        self.day
    }

    /// Read access to the stop state (inspection and tests).
    #[inline]
    pub fn store(&self) -> &StopStore {
        &self.store
    }

    // ── Core day processing ───────────────────────────────────────────────

    fn step_day<S: RunSink>(&mut self, sink: &mut S) -> SimResult<()> {
        let date = self.calendar.date(self.day);

        // ── Phase 1: daily fill, visited or not ───────────────────────────
        fill::accumulate_all(&mut self.store);

        // ── Phase 2: generate the day's route ─────────────────────────────
        let run = self
            .generator
            .generate_day(date, &mut self.store, &mut self.rng);

        // ── Phase 3: commit; the day is durable only on Ok ────────────────
        sink.commit_day(&run).map_err(SimError::sink)?;

        // ── Phase 4: metrics, gated on the sink's capability ──────────────
        if sink.supports_metrics() {
            sink.write_metrics(&run).map_err(SimError::sink)?;
        }

        tracing::debug!(
            day = self.day,
            date = %date,
            stops = run.metrics.total_stops,
            minutes = run.metrics.total_minutes,
            hazards = run.metrics.hazard_visits,
            "committed day"
        );
        if self.day % 10 == 0 {
            tracing::info!(date = %date, "committed day {}/{}", self.day + 1, self.config.num_days);
        }

        self.day += 1;
        Ok(())
    }
}
