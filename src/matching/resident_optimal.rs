//! Resident-proposing deferred acceptance (Dubins and Freeman, 1981).

use tracing::debug;

use crate::core::matching::HospitalResidentMatching;
use crate::core::types::Player;
use crate::matching::capacity::CapacityAwareMatchState;

/// Solve a checked hospital/resident instance with residents proposing.
///
/// 1. Take the first free resident `r` and its favourite remaining hospital `h`.
/// 2. If `h` is full, its worst match goes back to being free; `r` joins `h`.
/// 3. If `h` is now full, every resident `h` ranks below its worst match is
///    pruned from `h`'s list and `h` from theirs.
/// 4. Repeat until no resident is free, then sort each hospital's residents.
///
/// Evicting before adding is the usual "add, then drop the worst if
/// over-subscribed" step: once `h` is full every resident left in its list
/// outranks its worst match, so `r` always survives and the capacity is never
/// exceeded, even transiently.
pub(crate) fn solve<P: Player>(mut state: CapacityAwareMatchState<P>) -> HospitalResidentMatching<P> {
    let mut proposals = 0usize;

    while let Some(resident) = state.next_free_resident() {
        let Some(hospital) = state.top_choice(resident) else {
            break;
        };
        proposals += 1;

        if state.is_full(hospital) {
            if let Some(worst) = state.worst_match(hospital) {
                state.unassign(hospital, worst);
            }
        }
        state.assign(hospital, resident);

        if state.is_full(hospital) {
            if let Some(worst_rank) = state.worst_match_rank(hospital) {
                let successors = state.hospital_prefs(hospital)[worst_rank + 1..].to_vec();
                for successor in successors {
                    state.prune(hospital, successor);
                }
            }
        }
    }

    debug!(
        "Resident-optimal matching: {} residents placed after {} proposals",
        state.matched_count(),
        proposals
    );

    state.into_matching()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::core::preferences::PreferenceTable;

    fn run(
        hospitals: &[(&'static str, Vec<&'static str>)],
        residents: &[(&'static str, Vec<&'static str>)],
        capacities: &[(&'static str, usize)],
    ) -> HospitalResidentMatching<&'static str> {
        let hospitals = PreferenceTable::from_entries(hospitals.iter().cloned()).unwrap();
        let residents = PreferenceTable::from_entries(residents.iter().cloned()).unwrap();
        let capacities: HashMap<_, _> = capacities.iter().copied().collect();
        solve(CapacityAwareMatchState::new(&hospitals, &residents, &capacities).unwrap())
    }

    #[test]
    fn test_capacity_keeps_hospitals_favourites() {
        let matching = run(
            &[("H", vec!["R2", "R1", "R3"])],
            &[("R1", vec!["H"]), ("R2", vec!["H"]), ("R3", vec!["H"])],
            &[("H", 2)],
        );

        assert_eq!(matching.get(&"H"), Some(&["R2", "R1"][..]));
        assert_eq!(matching.hospital_of(&"R3"), None);
    }

    #[test]
    fn test_eviction_when_better_resident_arrives() {
        // R1 takes the only place at H, then R2 (whom H prefers) pushes R1 on to J
        let matching = run(
            &[("H", vec!["R2", "R1"]), ("J", vec!["R1"])],
            &[("R1", vec!["H", "J"]), ("R2", vec!["H"])],
            &[("H", 1), ("J", 1)],
        );

        assert_eq!(matching.get(&"H"), Some(&["R2"][..]));
        assert_eq!(matching.get(&"J"), Some(&["R1"][..]));
    }

    #[test]
    fn test_residents_get_their_preferred_stable_partner() {
        let matching = run(
            &[("H1", vec!["R2", "R1"]), ("H2", vec!["R1", "R2"])],
            &[("R1", vec!["H1", "H2"]), ("R2", vec!["H2", "H1"])],
            &[("H1", 1), ("H2", 1)],
        );

        assert_eq!(matching.hospital_of(&"R1"), Some(&"H1"));
        assert_eq!(matching.hospital_of(&"R2"), Some(&"H2"));
    }

    #[test]
    fn test_mixed_instance() {
        let matching = run(
            &[
                ("X", vec!["C", "B", "D"]),
                ("Y", vec!["A", "B", "D", "C"]),
                ("Z", vec!["C", "D"]),
            ],
            &[
                ("A", vec!["Y"]),
                ("B", vec!["Y", "X"]),
                ("C", vec!["Y", "Z", "X"]),
                ("D", vec!["X", "Y", "Z"]),
            ],
            &[("X", 2), ("Y", 2), ("Z", 2)],
        );

        assert_eq!(matching.get(&"X"), Some(&["D"][..]));
        assert_eq!(matching.get(&"Y"), Some(&["A", "B"][..]));
        assert_eq!(matching.get(&"Z"), Some(&["C"][..]));
    }
}
