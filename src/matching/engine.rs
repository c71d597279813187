use std::collections::HashMap;

use tracing::debug;

use crate::core::error::MatchError;
use crate::core::matching::{HospitalResidentMatching, MarriageMatching};
use crate::core::preferences::PreferenceTable;
use crate::core::types::{HospitalResidentOptimality, MarriageOptimality, Player};
use crate::matching::capacity::CapacityAwareMatchState;
use crate::matching::consistency::check_consistency;
use crate::matching::working::Bipartite;
use crate::matching::{hospital_optimal, marriage, resident_optimal};

/// Solve a stable marriage instance.
///
/// With `MarriageOptimality::Suitor` the suitors propose and the matching is
/// keyed by suitor; with `MarriageOptimality::Reviewer` the roles are swapped
/// and the matching is keyed by reviewer. Neither table is modified.
///
/// # Errors
///
/// Returns `MatchError::UnknownPlayer` if a list names a player with no list of
/// its own, `MatchError::InputConsistency` if a proposer ranks someone who does
/// not rank it back, or `MatchError::MalformedPreference` if a free proposer
/// runs out of candidates.
pub fn solve_stable_marriage<P: Player>(
    suitor_prefs: &PreferenceTable<P>,
    reviewer_prefs: &PreferenceTable<P>,
    optimal: MarriageOptimality,
) -> Result<MarriageMatching<P>, MatchError> {
    debug!(
        "Solving stable marriage: {} suitors, {} reviewers, {optimal}-optimal",
        suitor_prefs.len(),
        reviewer_prefs.len()
    );

    let graph = match optimal {
        MarriageOptimality::Suitor => Bipartite::build(suitor_prefs, reviewer_prefs)?,
        MarriageOptimality::Reviewer => Bipartite::build(reviewer_prefs, suitor_prefs)?,
    };

    marriage::solve(graph)
}

/// Solve a hospital/resident instance.
///
/// Preferences are checked for consistency and capacities resolved before any
/// solving starts; the strategy then decides which side proposes. Every
/// hospital appears in the result with its residents ordered by its own
/// preferences. Neither table is modified.
///
/// # Errors
///
/// Returns `MatchError::InputConsistency` or `MatchError::UnknownPlayer` if the
/// two sides disagree on who ranks whom, and `MatchError::MissingCapacity` or
/// `MatchError::ZeroCapacity` for unusable capacities.
pub fn solve_hospital_resident<P: Player>(
    hospital_prefs: &PreferenceTable<P>,
    resident_prefs: &PreferenceTable<P>,
    capacities: &HashMap<P, usize>,
    optimal: HospitalResidentOptimality,
) -> Result<HospitalResidentMatching<P>, MatchError> {
    debug!(
        "Solving hospital/resident: {} hospitals, {} residents, {optimal}-optimal",
        hospital_prefs.len(),
        resident_prefs.len()
    );

    check_consistency(hospital_prefs, resident_prefs)?;
    let state = CapacityAwareMatchState::new(hospital_prefs, resident_prefs, capacities)?;

    let matching = match optimal {
        HospitalResidentOptimality::Resident => resident_optimal::solve(state),
        HospitalResidentOptimality::Hospital => hospital_optimal::solve(state),
    };

    Ok(matching)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suitors() -> PreferenceTable<&'static str> {
        PreferenceTable::from_entries([
            ("A", vec!["D", "E", "F"]),
            ("B", vec!["D", "F", "E"]),
            ("C", vec!["E", "D", "F"]),
        ])
        .unwrap()
    }

    fn reviewers() -> PreferenceTable<&'static str> {
        PreferenceTable::from_entries([
            ("D", vec!["B", "A", "C"]),
            ("E", vec!["C", "A", "B"]),
            ("F", vec!["A", "B", "C"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_suitor_optimal() {
        let matching =
            solve_stable_marriage(&suitors(), &reviewers(), MarriageOptimality::Suitor).unwrap();
        assert_eq!(
            matching.into_pairs(),
            vec![("A", "F"), ("B", "D"), ("C", "E")]
        );
    }

    #[test]
    fn test_reviewer_optimal_is_keyed_by_reviewer() {
        let matching =
            solve_stable_marriage(&suitors(), &reviewers(), MarriageOptimality::Reviewer).unwrap();
        assert_eq!(
            matching.into_pairs(),
            vec![("D", "B"), ("E", "C"), ("F", "A")]
        );
    }

    #[test]
    fn test_role_swap_matches_swapped_arguments() {
        let swapped =
            solve_stable_marriage(&suitors(), &reviewers(), MarriageOptimality::Reviewer).unwrap();
        let direct =
            solve_stable_marriage(&reviewers(), &suitors(), MarriageOptimality::Suitor).unwrap();
        assert_eq!(swapped, direct);
    }

    #[test]
    fn test_inputs_are_not_modified() {
        let suitor_prefs = suitors();
        let reviewer_prefs = reviewers();
        solve_stable_marriage(&suitor_prefs, &reviewer_prefs, MarriageOptimality::Suitor).unwrap();
        assert_eq!(suitor_prefs, suitors());
        assert_eq!(reviewer_prefs, reviewers());
    }

    #[test]
    fn test_hospital_resident_checks_consistency_first() {
        let residents = PreferenceTable::from_entries([
            ("A", vec!["Y"]),
            ("B", vec!["Y", "X"]),
            ("C", vec!["Y", "Z", "X"]),
            ("D", vec!["X", "Y", "Z"]),
        ])
        .unwrap();
        let hospitals = PreferenceTable::from_entries([
            ("X", vec!["C"]),
            ("Y", vec!["A", "B", "D", "C"]),
            ("Z", vec!["C", "D"]),
        ])
        .unwrap();
        // Capacities are deliberately missing: the consistency error wins
        let err = solve_hospital_resident(
            &hospitals,
            &residents,
            &HashMap::new(),
            HospitalResidentOptimality::Resident,
        )
        .unwrap_err();

        assert!(matches!(err, MatchError::InputConsistency { .. }));
    }

    #[test]
    fn test_hospital_resident_dispatches_on_strategy() {
        let hospitals = PreferenceTable::from_entries([
            ("H1", vec!["R2", "R1"]),
            ("H2", vec!["R1", "R2"]),
        ])
        .unwrap();
        let residents = PreferenceTable::from_entries([
            ("R1", vec!["H1", "H2"]),
            ("R2", vec!["H2", "H1"]),
        ])
        .unwrap();
        let capacities = HashMap::from([("H1", 1), ("H2", 1)]);

        let resident_optimal = solve_hospital_resident(
            &hospitals,
            &residents,
            &capacities,
            HospitalResidentOptimality::Resident,
        )
        .unwrap();
        let hospital_optimal = solve_hospital_resident(
            &hospitals,
            &residents,
            &capacities,
            HospitalResidentOptimality::Hospital,
        )
        .unwrap();

        assert_eq!(resident_optimal.get(&"H1"), Some(&["R1"][..]));
        assert_eq!(hospital_optimal.get(&"H1"), Some(&["R2"][..]));
    }
}
