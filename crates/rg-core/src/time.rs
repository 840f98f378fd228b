//! Simulation calendar.
//!
//! # Design
//!
//! The horizon is a contiguous range of civil dates: `start .. start + num_days`.
//! Days are identified by a zero-based offset (which doubles as the
//! [`RunId`][crate::RunId] value), and all intra-day timestamps are built as
//! "midnight + minutes", which keeps timestamp construction infallible —
//! no partially-valid hour/minute pairs exist anywhere in the engine.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Timestamp at `minutes` past midnight on `date`.
#[inline]
pub fn at_minutes(date: NaiveDate, minutes: i64) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::minutes(minutes)
}

// ── Calendar ──────────────────────────────────────────────────────────────────

/// The simulated horizon: a start date and a day count.
///
/// Cheap to copy; holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calendar {
    /// First simulated date (day 0).
    pub start: NaiveDate,
    /// Number of simulated days.
    pub num_days: u32,
}

impl Calendar {
    pub fn new(start: NaiveDate, num_days: u32) -> Self {
        Self { start, num_days }
    }

    /// The civil date of day `day` (zero-based).
    #[inline]
    pub fn date(&self, day: u32) -> NaiveDate {
        self.start + Duration::days(day as i64)
    }

    /// The day after the last simulated day.
    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.date(self.num_days)
    }

    /// Iterate `(day_offset, date)` pairs in chronological order.
    pub fn iter(self) -> impl Iterator<Item = (u32, NaiveDate)> {
        (0..self.num_days).map(move |d| (d, self.start + Duration::days(d as i64)))
    }
}
