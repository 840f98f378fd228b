//! Per-visit work decision.
//!
//! # Draw order
//!
//! All randomness comes from the shared stream; [`compose`] consumes it in
//! this fixed order, which is part of the reproducibility contract:
//!
//! 1. shelter wash — Bernoulli(0.1)
//! 2. pad wash — hotspots roll Bernoulli(0.8) first; the fallback
//!    Bernoulli(0.2) is rolled only when that misses (short-circuit OR)
//! 3. can wash — Bernoulli(0.3)
//! 4. Level-3 clean — Bernoulli([`level3_probability`])
//! 5. hazard — Bernoulli(propensity × 0.3); hotspots OR in one extra
//!    Bernoulli(0.3), skipped when the first roll already hit
//! 6. infrastructure issue — Bernoulli(propensity × 0.15)
//!
//! Everything else is derived without consuming the stream.

use chrono::NaiveDate;

use rg_core::{PriorityClass, ServiceLevel, SimRng};
use rg_stops::StopProfile;

/// Hazard probability ceiling for a propensity of 1.0.
const HAZARD_SCALE: f64 = 0.3;
/// Extra hazard floor rolled for hotspot stops.
const HOTSPOT_HAZARD_FLOOR: f64 = 0.3;
/// Infrastructure probability ceiling for a propensity of 1.0.
const INFRA_SCALE: f64 = 0.15;
/// A stop is overdue for a deep clean after this many days without one.
const LEVEL3_OVERDUE_DAYS: i64 = 30;

// ── WorkDecision ──────────────────────────────────────────────────────────────

/// The boolean action set and derived service level for one visit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WorkDecision {
    /// Crews always do a litter pass.
    pub picked_up_litter: bool,
    /// True iff the integer-truncated volume was positive.
    pub emptied_trash: bool,
    pub washed_shelter: bool,
    pub washed_pad: bool,
    pub washed_can: bool,
    /// Compactor servicing exists in the duration model but is never
    /// generated yet — reserved for compactor-equipped stops.
    pub serviced_compactor: bool,
    /// Deep (Level-3) clean performed.
    pub is_level3: bool,
    /// Service tier implied by the actions and volume.
    pub level: ServiceLevel,
    pub has_hazard: bool,
    pub has_infra: bool,
    /// Integer-truncated volume at visit time (0..=4).
    pub logged_volume: u8,
}

/// Probability of a Level-3 clean for a stop with the given deep-clean age.
///
/// Base 0.05; 0.20 when the stop is overdue (30+ days) or has never had
/// one; hotspots add a further 0.10.
pub fn level3_probability(days_since_deep: Option<i64>, class: PriorityClass) -> f64 {
    let mut p = if days_since_deep.is_none_or(|d| d >= LEVEL3_OVERDUE_DAYS) {
        0.20
    } else {
        0.05
    };
    if class == PriorityClass::Hotspot {
        p += 0.10;
    }
    p
}

/// Decide the work performed during one visit to `profile` on `date`.
///
/// Pure with respect to stop state: the caller applies the volume reset and
/// deep-clean date update after computing the visit duration.
pub fn compose(profile: &StopProfile, date: NaiveDate, rng: &mut SimRng) -> WorkDecision {
    let class = profile.priority();
    let hotspot = class == PriorityClass::Hotspot;

    let logged_volume = profile.logged_volume();
    let emptied_trash = logged_volume > 0;

    let washed_shelter = rng.gen_bool(0.1);
    let washed_pad = (hotspot && rng.gen_bool(0.8)) || rng.gen_bool(0.2);
    let washed_can = rng.gen_bool(0.3);

    let is_level3 = rng.gen_bool(level3_probability(profile.days_since_level3(date), class));
    let level = if is_level3 {
        ServiceLevel::Deep
    } else if logged_volume >= 3 {
        ServiceLevel::Heavy
    } else {
        ServiceLevel::Routine
    };

    let mut has_hazard = rng.gen_bool(profile.traits().hazard_propensity * HAZARD_SCALE);
    if hotspot {
        has_hazard = has_hazard || rng.gen_bool(HOTSPOT_HAZARD_FLOOR);
    }
    let has_infra = rng.gen_bool(profile.traits().infra_propensity * INFRA_SCALE);

    WorkDecision {
        picked_up_litter: true,
        emptied_trash,
        washed_shelter,
        washed_pad,
        washed_can,
        serviced_compactor: false,
        is_level3,
        level,
        has_hazard,
        has_infra,
        logged_volume,
    }
}
