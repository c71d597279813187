//! Blocking-pair detection for finished matchings.
//!
//! These checks read the caller's original tables, so they can verify a
//! matching independently of how it was produced.

use std::collections::HashMap;

use crate::core::matching::{HospitalResidentMatching, MarriageMatching};
use crate::core::preferences::PreferenceTable;
use crate::core::types::Player;

/// Whether `player` strictly prefers `candidate` to `current` (being
/// unmatched is worse than any acceptable candidate).
fn prefers<P: Player>(
    table: &PreferenceTable<P>,
    player: &P,
    candidate: &P,
    current: Option<&P>,
) -> bool {
    let Some(candidate_rank) = table.rank(player, candidate) else {
        return false;
    };
    match current.and_then(|c| table.rank(player, c)) {
        Some(current_rank) => candidate_rank < current_rank,
        None => true,
    }
}

/// Find every blocking pair of a one-to-one matching.
///
/// `proposers` must be the side the matching is keyed by (the suitors of a
/// suitor-optimal solve, the reviewers of a reviewer-optimal one). Pairs are
/// returned as `(proposer, partner)` in table order; an empty result means the
/// matching is stable.
pub fn marriage_blocking_pairs<P: Player>(
    proposers: &PreferenceTable<P>,
    partners: &PreferenceTable<P>,
    matching: &MarriageMatching<P>,
) -> Vec<(P, P)> {
    let mut blocking = Vec::new();

    for (proposer, prefs) in proposers.iter() {
        let current = matching.get(proposer);
        for candidate in prefs {
            if current == Some(candidate) {
                // Everything after the current partner is worse
                break;
            }
            let candidate_current = matching.proposer_of(candidate);
            if prefers(partners, candidate, proposer, candidate_current) {
                blocking.push((proposer.clone(), candidate.clone()));
            }
        }
    }

    blocking
}

/// Find every blocking pair of a hospital/resident matching.
///
/// A resident `r` and hospital `h` block when `r` prefers `h` to its current
/// hospital (or has none), `h` ranks `r`, and `h` either has a free place or
/// prefers `r` to its worst assigned resident. Pairs are returned as
/// `(resident, hospital)` in table order.
pub fn hospital_resident_blocking_pairs<P: Player>(
    hospital_prefs: &PreferenceTable<P>,
    resident_prefs: &PreferenceTable<P>,
    capacities: &HashMap<P, usize>,
    matching: &HospitalResidentMatching<P>,
) -> Vec<(P, P)> {
    // hospital -> (has a free place, rank of its worst assigned resident)
    let standing: HashMap<&P, (bool, Option<usize>)> = hospital_prefs
        .iter()
        .map(|(hospital, ranked)| {
            let assigned = matching.get(hospital).map_or(0, <[P]>::len);
            let capacity = capacities.get(hospital).copied().unwrap_or(0);
            let worst = ranked
                .iter()
                .rposition(|r| matching.hospital_of(r) == Some(hospital));
            (hospital, (assigned < capacity, worst))
        })
        .collect();

    let mut blocking = Vec::new();

    for (resident, prefs) in resident_prefs.iter() {
        let current = matching.hospital_of(resident);
        for hospital in prefs {
            if current == Some(hospital) {
                break;
            }
            let Some(hospital_rank) = hospital_prefs.rank(hospital, resident) else {
                continue;
            };
            let Some(&(has_room, worst)) = standing.get(hospital) else {
                continue;
            };

            if has_room || worst.is_some_and(|worst| hospital_rank < worst) {
                blocking.push((resident.clone(), hospital.clone()));
            }
        }
    }

    blocking
}
