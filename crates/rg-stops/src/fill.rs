//! Daily trash-accumulation model.
//!
//! Rates are volume units per day, tuned so a hotspot saturates in ~3 days
//! and a light stop in ~13.  Accumulation runs for every stop once per
//! simulated day, before routing, so volumes reflect the current day even
//! for stops the route never reaches.

use rg_core::PriorityClass;

use crate::profile::StopProfile;
use crate::store::StopStore;

/// Daily accumulation rate for a priority tier.
pub fn fill_rate(class: PriorityClass) -> f64 {
    match class {
        PriorityClass::Light => 0.3,
        PriorityClass::Medium => 0.5,
        PriorityClass::Hotspot => 1.2,
    }
}

/// Advance one stop by one day of accumulation (clamped at capacity).
#[inline]
pub fn accumulate(profile: &mut StopProfile) {
    profile.add_volume(fill_rate(profile.priority()));
}

/// Advance every stop in the store by one day.
pub fn accumulate_all(store: &mut StopStore) {
    for profile in store.iter_mut() {
        accumulate(profile);
    }
}
