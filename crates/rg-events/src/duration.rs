//! Service-duration model.
//!
//! Duration starts from a base drawn by the caller and grows by an
//! independent uniform increment per performed action, then clamps to the
//! priority class's shift-expectation window.  The clamp comes last — a
//! hotspot visit can never be booked under 18 minutes no matter how little
//! was done, and a light stop never over 18 no matter how much.

use rg_core::{PriorityClass, SimRng};

use crate::decision::WorkDecision;

/// Logged volume at which the load itself slows the crew down.
const VOLUME_TAX_THRESHOLD: u8 = 3;

/// Inclusive `(min, max)` duration window in minutes for a priority tier.
pub fn service_window(class: PriorityClass) -> (u32, u32) {
    match class {
        PriorityClass::Light => (8, 18),
        PriorityClass::Medium => (12, 24),
        PriorityClass::Hotspot => (18, 35),
    }
}

/// Compute the minutes spent at one visit.
///
/// `base_minutes` is drawn by the caller (uniform [6, 12]).  Increments are
/// drawn in a fixed order, one per true condition: emptied trash [2, 6],
/// pad wash [6, 12], shelter wash [3, 8], compactor service [3, 10],
/// volume tax [3, 8], hazard handling [4, 12], Level-3 clean [8, 18].
pub fn compute_duration(
    base_minutes: u32,
    work: &WorkDecision,
    class: PriorityClass,
    rng: &mut SimRng,
) -> u32 {
    let mut duration = base_minutes;

    if work.emptied_trash {
        duration += rng.gen_range(2..=6);
    }
    if work.washed_pad {
        duration += rng.gen_range(6..=12);
    }
    if work.washed_shelter {
        duration += rng.gen_range(3..=8);
    }
    if work.serviced_compactor {
        duration += rng.gen_range(3..=10);
    }

    if work.logged_volume >= VOLUME_TAX_THRESHOLD {
        duration += rng.gen_range(3..=8);
    }
    if work.has_hazard {
        duration += rng.gen_range(4..=12);
    }
    if work.is_level3 {
        duration += rng.gen_range(8..=18);
    }

    let (min, max) = service_window(class);
    duration.clamp(min, max)
}
