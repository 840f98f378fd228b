//! Per-stop simulation state.
//!
//! A profile splits into three layers with different mutability:
//!
//! - identity (`id`, `key`, `is_hotspot`) — fixed at construction.
//! - [`StopTraits`] — drawn once from the random stream at construction,
//!   immutable thereafter (models recurring site-specific issues).
//! - mutable state (`priority`, `current_volume`, `last_level3`) — private,
//!   changed only through the mutators below so the volume bounds and the
//!   once-only priority assignment hold by construction.

use chrono::NaiveDate;

use rg_core::{HazardKind, InfraKind, PriorityClass, SimRng, StopId};

/// Volume ceiling for every stop — a full set of cans.
pub const VOLUME_CAPACITY: f64 = 4.0;

// ── StopTraits ────────────────────────────────────────────────────────────────

/// Fixed per-stop biases, drawn once at store construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StopTraits {
    /// Per-visit hazard likelihood bias in [0, 1).
    pub hazard_propensity: f64,
    /// Per-visit infrastructure-issue likelihood bias in [0, 1).
    pub infra_propensity: f64,
    /// The one hazard category this stop ever reports.
    pub favored_hazard: HazardKind,
    /// The one infrastructure category this stop ever reports.
    pub favored_infra: InfraKind,
}

impl StopTraits {
    /// Draw a stop's traits from the shared stream.
    ///
    /// Draw order (part of the reproducibility contract): hazard propensity,
    /// infra propensity, favored hazard kind, favored infra kind.
    pub fn draw(rng: &mut SimRng) -> Self {
        let hazard_propensity: f64 = rng.random();
        let infra_propensity: f64 = rng.random();
        // ALL is non-empty, so choose() cannot return None.
        let favored_hazard = *rng.choose(&HazardKind::ALL).unwrap_or(&HazardKind::Glass);
        let favored_infra = *rng.choose(&InfraKind::ALL).unwrap_or(&InfraKind::Graffiti);
        Self {
            hazard_propensity,
            infra_propensity,
            favored_hazard,
            favored_infra,
        }
    }
}

// ── StopProfile ───────────────────────────────────────────────────────────────

/// One stop's full simulation state.  Created at simulation start, mutated
/// daily, never destroyed within a run.
#[derive(Clone, Debug, PartialEq)]
pub struct StopProfile {
    id: StopId,
    key: String,
    is_hotspot: bool,
    traits: StopTraits,
    priority: PriorityClass,
    current_volume: f64,
    last_level3: Option<NaiveDate>,
}

impl StopProfile {
    /// New profile with empty cans, no deep-clean history, and the default
    /// `Medium` priority (refined later by the priority assigner).
    pub fn new(id: StopId, key: impl Into<String>, is_hotspot: bool, traits: StopTraits) -> Self {
        Self {
            id,
            key: key.into(),
            is_hotspot,
            traits,
            priority: PriorityClass::Medium,
            current_volume: 0.0,
            last_level3: None,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> StopId {
        self.id
    }

    /// Opaque external identifier (the platform's stop key).
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn is_hotspot(&self) -> bool {
        self.is_hotspot
    }

    #[inline]
    pub fn traits(&self) -> &StopTraits {
        &self.traits
    }

    #[inline]
    pub fn priority(&self) -> PriorityClass {
        self.priority
    }

    /// Accumulated volume, always within `[0, VOLUME_CAPACITY]`.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.current_volume
    }

    /// Integer-truncated volume as logged by crews (0..=4).
    #[inline]
    pub fn logged_volume(&self) -> u8 {
        self.current_volume as u8
    }

    #[inline]
    pub fn last_level3(&self) -> Option<NaiveDate> {
        self.last_level3
    }

    /// Whole days elapsed since the last deep clean, as seen from `on`.
    /// `None` if the stop has never had one.
    pub fn days_since_level3(&self, on: NaiveDate) -> Option<i64> {
        self.last_level3
            .map(|last| on.signed_duration_since(last).num_days())
    }

    // ── State transitions ─────────────────────────────────────────────────

    /// Add accumulated volume, clamped to `[0, VOLUME_CAPACITY]`.
    pub fn add_volume(&mut self, amount: f64) {
        self.current_volume = (self.current_volume + amount).clamp(0.0, VOLUME_CAPACITY);
    }

    /// Trash was emptied during a visit: volume drops to exactly zero.
    pub fn reset_volume(&mut self) {
        self.current_volume = 0.0;
    }

    /// A Level-3 clean happened on `date`; restarts the deep-clean clock.
    pub fn record_level3(&mut self, date: NaiveDate) {
        self.last_level3 = Some(date);
    }

    pub(crate) fn set_priority(&mut self, class: PriorityClass) {
        self.priority = class;
    }
}
