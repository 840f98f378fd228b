//! Top-level generator configuration.

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};
use crate::time::Calendar;

/// Default number of stops targeted per daily route.
pub const DEFAULT_TARGET_STOPS: usize = 25;

/// Everything the generator needs besides the roster.
///
/// Typically constructed by the application binary and passed to
/// `Simulation::new`; identical configs (plus identical rosters) always
/// produce identical output.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// First simulated date.
    pub start_date: NaiveDate,

    /// Number of days to simulate.  Must be at least 1.
    pub num_days: u32,

    /// Stops targeted per daily route (capped at the roster size on days
    /// when the roster is smaller).  Must be at least 1.
    pub target_stops_per_day: usize,

    /// Operator user id stamped on every generated record.
    pub operator_id: i64,

    /// Route pool the generated runs belong to.
    pub pool_id: String,

    /// Base (depot) id stamped on every route run.
    pub base_id: String,
}

impl GenConfig {
    /// Config with the default stops-per-day target.
    pub fn new(seed: u64, start_date: NaiveDate, num_days: u32) -> Self {
        Self {
            seed,
            start_date,
            num_days,
            target_stops_per_day: DEFAULT_TARGET_STOPS,
            operator_id: 0,
            pool_id: String::new(),
            base_id: String::new(),
        }
    }

    /// Reject configurations that cannot produce a single day of output.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_days == 0 {
            return Err(CoreError::Config("num_days must be at least 1".into()));
        }
        if self.target_stops_per_day == 0 {
            return Err(CoreError::Config(
                "target_stops_per_day must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Construct the [`Calendar`] spanning this run's horizon.
    #[inline]
    pub fn calendar(&self) -> Calendar {
        Calendar::new(self.start_date, self.num_days)
    }
}
