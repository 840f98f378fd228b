//! The stop store: every profile for one simulation run.

use rg_core::{SimRng, StopId};

use crate::profile::{StopProfile, StopTraits};
use crate::roster::RosterEntry;
use crate::{StopError, StopResult};

/// Owns one [`StopProfile`] per roster entry, indexed by [`StopId`]
/// (the roster position).
///
/// Construction draws each stop's traits from the shared stream in roster
/// order, so roster order is part of the reproducibility contract.
pub struct StopStore {
    profiles: Vec<StopProfile>,
    /// Latch: priority tiers may be assigned exactly once.
    pub(crate) priorities_assigned: bool,
}

impl StopStore {
    /// Build the store from a roster, drawing per-stop traits in order.
    ///
    /// Fails with [`StopError::EmptyRoster`] if the roster has no stops.
    pub fn from_roster(roster: &[RosterEntry], rng: &mut SimRng) -> StopResult<Self> {
        if roster.is_empty() {
            return Err(StopError::EmptyRoster);
        }
        let profiles = roster
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let traits = StopTraits::draw(rng);
                StopProfile::new(StopId(i as u32), entry.stop_id.clone(), entry.is_hotspot, traits)
            })
            .collect();
        Ok(Self { profiles, priorities_assigned: false })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Shared access to one profile.  `id` must come from this store.
    #[inline]
    pub fn profile(&self, id: StopId) -> &StopProfile {
        &self.profiles[id.index()]
    }

    /// Exclusive access to one profile.  `id` must come from this store.
    #[inline]
    pub fn profile_mut(&mut self, id: StopId) -> &mut StopProfile {
        &mut self.profiles[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &StopProfile> {
        self.profiles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut StopProfile> {
        self.profiles.iter_mut()
    }

    /// All stop ids in roster order.
    pub fn stop_ids(&self) -> impl Iterator<Item = StopId> + use<> {
        (0..self.profiles.len() as u32).map(StopId)
    }
}
