//! Unit tests for rg-stops.

use rg_core::SimRng;

use crate::roster::RosterEntry;
use crate::store::StopStore;

fn roster(total: usize, hotspots: usize) -> Vec<RosterEntry> {
    (0..total)
        .map(|i| RosterEntry::new(format!("STOP-{i:04}"), i < hotspots))
        .collect()
}

#[cfg(test)]
mod roster_tests {
    use std::io::Cursor;

    use crate::roster::load_roster_reader;

    const ROSTER_CSV: &str = "\
stop_id,is_hotspot\n\
NW-0001,false\n\
NW-0002,true\n\
NW-0003,false\n\
";

    #[test]
    fn loads_rows_in_order() {
        let roster = load_roster_reader(Cursor::new(ROSTER_CSV)).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].stop_id, "NW-0001");
        assert!(!roster[0].is_hotspot);
        assert!(roster[1].is_hotspot);
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let bad = "stop_id,is_hotspot\nNW-0001,maybe\n";
        let err = load_roster_reader(Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, crate::StopError::Parse(_)));
    }

    #[test]
    fn empty_file_gives_empty_roster() {
        let roster = load_roster_reader(Cursor::new("stop_id,is_hotspot\n")).unwrap();
        assert!(roster.is_empty());
    }
}

#[cfg(test)]
mod store_tests {
    use super::*;
    use rg_core::StopId;

    #[test]
    fn empty_roster_rejected() {
        let mut rng = SimRng::new(1);
        assert!(matches!(
            StopStore::from_roster(&[], &mut rng),
            Err(crate::StopError::EmptyRoster)
        ));
    }

    #[test]
    fn profiles_indexed_in_roster_order() {
        let mut rng = SimRng::new(1);
        let store = StopStore::from_roster(&roster(5, 2), &mut rng).unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(store.profile(StopId(0)).key(), "STOP-0000");
        assert!(store.profile(StopId(1)).is_hotspot());
        assert!(!store.profile(StopId(4)).is_hotspot());
    }

    #[test]
    fn traits_deterministic_per_seed() {
        let mut r1 = SimRng::new(77);
        let mut r2 = SimRng::new(77);
        let s1 = StopStore::from_roster(&roster(10, 1), &mut r1).unwrap();
        let s2 = StopStore::from_roster(&roster(10, 1), &mut r2).unwrap();
        for (a, b) in s1.iter().zip(s2.iter()) {
            assert_eq!(a.traits(), b.traits());
        }
    }

    #[test]
    fn propensities_in_unit_interval() {
        let mut rng = SimRng::new(5);
        let store = StopStore::from_roster(&roster(50, 0), &mut rng).unwrap();
        for profile in store.iter() {
            let t = profile.traits();
            assert!((0.0..1.0).contains(&t.hazard_propensity));
            assert!((0.0..1.0).contains(&t.infra_propensity));
        }
    }
}

#[cfg(test)]
mod profile_tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::profile::{StopProfile, StopTraits, VOLUME_CAPACITY};
    use rg_core::{HazardKind, InfraKind, StopId};

    fn test_profile() -> StopProfile {
        let traits = StopTraits {
            hazard_propensity: 0.5,
            infra_propensity: 0.5,
            favored_hazard: HazardKind::Needle,
            favored_infra: InfraKind::Graffiti,
        };
        StopProfile::new(StopId(0), "S-1", false, traits)
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn volume_clamps_at_capacity() {
        let mut p = test_profile();
        for _ in 0..40 {
            p.add_volume(1.2);
        }
        assert_eq!(p.volume(), VOLUME_CAPACITY);
        assert_eq!(p.logged_volume(), 4);
    }

    #[test]
    fn volume_never_negative() {
        let mut p = test_profile();
        p.add_volume(-10.0);
        assert_eq!(p.volume(), 0.0);
    }

    #[test]
    fn reset_returns_to_exact_zero() {
        let mut p = test_profile();
        p.add_volume(2.7);
        p.reset_volume();
        assert_eq!(p.volume(), 0.0);
    }

    #[test]
    fn logged_volume_truncates() {
        let mut p = test_profile();
        p.add_volume(2.9);
        assert_eq!(p.logged_volume(), 2);
    }

    #[test]
    fn level3_clock() {
        let mut p = test_profile();
        assert_eq!(p.days_since_level3(d(2024, 3, 1)), None);
        p.record_level3(d(2024, 2, 1));
        assert_eq!(p.days_since_level3(d(2024, 3, 1)), Some(29));
        // Recording again restarts the clock.
        p.record_level3(d(2024, 3, 1));
        assert_eq!(p.days_since_level3(d(2024, 3, 1)), Some(0));
    }
}

#[cfg(test)]
mod priority_tests {
    use super::*;
    use crate::priority::assign_priorities;
    use rg_core::PriorityClass;

    #[test]
    fn hotspots_always_hotspot() {
        let mut rng = SimRng::new(42);
        let mut store = StopStore::from_roster(&roster(30, 6), &mut rng).unwrap();
        assign_priorities(&mut store, &mut rng).unwrap();
        for profile in store.iter() {
            if profile.is_hotspot() {
                assert_eq!(profile.priority(), PriorityClass::Hotspot);
            } else {
                assert_ne!(profile.priority(), PriorityClass::Hotspot);
            }
        }
    }

    #[test]
    fn light_tier_is_floor_15_percent() {
        let mut rng = SimRng::new(42);
        // 40 non-hotspots → floor(40 × 0.15) = 6 light stops.
        let mut store = StopStore::from_roster(&roster(45, 5), &mut rng).unwrap();
        assign_priorities(&mut store, &mut rng).unwrap();
        let light = store
            .iter()
            .filter(|p| p.priority() == PriorityClass::Light)
            .count();
        assert_eq!(light, 6);
        let medium = store
            .iter()
            .filter(|p| p.priority() == PriorityClass::Medium)
            .count();
        assert_eq!(medium, 34);
    }

    #[test]
    fn tiny_roster_has_no_light_stops() {
        let mut rng = SimRng::new(1);
        // 4 non-hotspots → floor(0.6) = 0.
        let mut store = StopStore::from_roster(&roster(4, 0), &mut rng).unwrap();
        assign_priorities(&mut store, &mut rng).unwrap();
        assert!(store.iter().all(|p| p.priority() == PriorityClass::Medium));
    }

    #[test]
    fn assignment_deterministic_per_seed() {
        let run = |seed| {
            let mut rng = SimRng::new(seed);
            let mut store = StopStore::from_roster(&roster(60, 10), &mut rng).unwrap();
            assign_priorities(&mut store, &mut rng).unwrap();
            store.iter().map(|p| p.priority()).collect::<Vec<_>>()
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn second_assignment_rejected() {
        let mut rng = SimRng::new(42);
        let mut store = StopStore::from_roster(&roster(10, 1), &mut rng).unwrap();
        assign_priorities(&mut store, &mut rng).unwrap();
        assert!(matches!(
            assign_priorities(&mut store, &mut rng),
            Err(crate::StopError::PrioritiesAlreadyAssigned)
        ));
    }
}

#[cfg(test)]
mod fill_tests {
    use super::*;
    use crate::fill::{accumulate, accumulate_all, fill_rate};
    use crate::priority::assign_priorities;
    use crate::profile::VOLUME_CAPACITY;
    use rg_core::{PriorityClass, StopId};

    #[test]
    fn rates_by_class() {
        assert_eq!(fill_rate(PriorityClass::Light), 0.3);
        assert_eq!(fill_rate(PriorityClass::Medium), 0.5);
        assert_eq!(fill_rate(PriorityClass::Hotspot), 1.2);
    }

    #[test]
    fn hotspot_saturates_in_four_days() {
        let mut rng = SimRng::new(42);
        let mut store = StopStore::from_roster(&roster(1, 1), &mut rng).unwrap();
        assign_priorities(&mut store, &mut rng).unwrap();
        let profile = store.profile_mut(StopId(0));
        for _ in 0..3 {
            accumulate(profile);
        }
        assert!((profile.volume() - 3.6).abs() < 1e-9);
        accumulate(profile);
        assert_eq!(profile.volume(), VOLUME_CAPACITY);
    }

    #[test]
    fn unvisited_stop_clamps_after_40_days() {
        let mut rng = SimRng::new(42);
        let mut store = StopStore::from_roster(&roster(8, 2), &mut rng).unwrap();
        assign_priorities(&mut store, &mut rng).unwrap();
        for _ in 0..40 {
            accumulate_all(&mut store);
        }
        for profile in store.iter() {
            assert!(profile.volume() <= VOLUME_CAPACITY);
            assert_eq!(profile.volume(), VOLUME_CAPACITY);
        }
    }
}
