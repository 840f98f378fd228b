//! One-time priority-tier assignment.
//!
//! Hotspot-flagged stops are always `Hotspot`.  Of the remaining stops, a
//! uniformly random 15% (floor, sampled without replacement) become `Light`;
//! everyone else stays `Medium`.  Deterministic given the seed and roster
//! order.

use rg_core::{PriorityClass, SimRng};

use crate::store::StopStore;
use crate::{StopError, StopResult};

/// Share of non-hotspot stops classified as light duty.
pub const LIGHT_SHARE: f64 = 0.15;

/// Classify every stop in the store.  Runs exactly once per simulation;
/// a second call fails with [`StopError::PrioritiesAlreadyAssigned`].
///
/// Consumes one `sample` call from the stream (the light-tier subset).
pub fn assign_priorities(store: &mut StopStore, rng: &mut SimRng) -> StopResult<()> {
    if store.is_empty() {
        return Err(StopError::EmptyRoster);
    }
    if store.priorities_assigned {
        return Err(StopError::PrioritiesAlreadyAssigned);
    }

    // Hotspot flag wins outright; collect the rest as light-tier candidates.
    let mut candidates = Vec::new();
    for id in store.stop_ids() {
        let profile = store.profile_mut(id);
        if profile.is_hotspot() {
            profile.set_priority(PriorityClass::Hotspot);
        } else {
            candidates.push(id);
        }
    }

    let light_count = (candidates.len() as f64 * LIGHT_SHARE).floor() as usize;
    for picked in rng.sample(candidates.len(), light_count) {
        store.profile_mut(candidates[picked]).set_priority(PriorityClass::Light);
    }
    // Everyone else keeps the Medium default.

    store.priorities_assigned = true;
    Ok(())
}
