//! Hospital-proposing deferred acceptance (Roth, 1984).

use tracing::debug;

use crate::core::matching::HospitalResidentMatching;
use crate::core::types::Player;
use crate::matching::capacity::CapacityAwareMatchState;

/// Solve a checked hospital/resident instance with hospitals proposing.
///
/// 1. Take the first free hospital `h` and the best resident `r` in its list
///    that it is not already matched to.
/// 2. If `r` is matched elsewhere, it leaves that hospital; `r` joins `h`.
/// 3. Every hospital `r` ranks below `h` is pruned from `r`'s list and `r`
///    from theirs, so `r` only ever trades up.
/// 4. Repeat until no hospital is free.
///
/// A resident's list only ever holds hospitals at least as good as its current
/// one, so every proposal is accepted.
pub(crate) fn solve<P: Player>(mut state: CapacityAwareMatchState<P>) -> HospitalResidentMatching<P> {
    let mut proposals = 0usize;

    while let Some(hospital) = state.next_free_hospital() {
        let Some(resident) = state.best_unmatched_resident(hospital) else {
            break;
        };
        proposals += 1;

        if let Some(current) = state.hospital_of(resident) {
            state.unassign(current, resident);
        }
        state.assign(hospital, resident);

        if let Some(rank) = state.resident_rank(resident, hospital) {
            let successors = state.resident_prefs(resident)[rank + 1..].to_vec();
            for successor in successors {
                state.prune(successor, resident);
            }
        }
    }

    debug!(
        "Hospital-optimal matching: {} residents placed after {} proposals",
        state.matched_count(),
        proposals
    );

    // A hospital can lose a resident mid-way, so acceptance order is not
    // preference order.
    state.into_matching()
}
