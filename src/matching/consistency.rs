use crate::core::error::MatchError;
use crate::core::preferences::PreferenceTable;
use crate::core::types::Player;

/// Check that hospital and resident preferences agree on who is acceptable.
///
/// Every hospital a resident ranks must rank that resident back, and every
/// resident a hospital ranks must rank that hospital back. Residents are
/// checked first, then hospitals, each in table order; the first offending
/// pair is reported.
///
/// # Errors
///
/// Returns `MatchError::InputConsistency` naming the player that ranks and the
/// player that does not rank back, or `MatchError::UnknownPlayer` if a list
/// names a player missing from the other table.
pub fn check_consistency<P: Player>(
    hospital_prefs: &PreferenceTable<P>,
    resident_prefs: &PreferenceTable<P>,
) -> Result<(), MatchError> {
    check_ranked_back(resident_prefs, hospital_prefs)?;
    check_ranked_back(hospital_prefs, resident_prefs)
}

fn check_ranked_back<P: Player>(
    rankers: &PreferenceTable<P>,
    others: &PreferenceTable<P>,
) -> Result<(), MatchError> {
    for (ranker, prefs) in rankers.iter() {
        for ranked in prefs {
            let ranked_prefs = others
                .get(ranked)
                .ok_or_else(|| MatchError::unknown(ranked, ranker))?;
            if !ranked_prefs.contains(ranker) {
                return Err(MatchError::inconsistent(ranker, ranked));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residents() -> PreferenceTable<&'static str> {
        PreferenceTable::from_entries([
            ("A", vec!["Y"]),
            ("B", vec!["Y", "X"]),
            ("C", vec!["Y", "Z", "X"]),
            ("D", vec!["X", "Y", "Z"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_consistent_instance_passes() {
        let hospitals = PreferenceTable::from_entries([
            ("X", vec!["C", "B", "D"]),
            ("Y", vec!["A", "B", "D", "C"]),
            ("Z", vec!["C", "D"]),
        ])
        .unwrap();

        assert_eq!(check_consistency(&hospitals, &residents()), Ok(()));
    }

    #[test]
    fn test_hospital_missing_a_resident() {
        // X should rank B and D as well
        let hospitals = PreferenceTable::from_entries([
            ("X", vec!["C"]),
            ("Y", vec!["A", "B", "D", "C"]),
            ("Z", vec!["C", "D"]),
        ])
        .unwrap();

        let err = check_consistency(&hospitals, &residents()).unwrap_err();
        assert_eq!(err, MatchError::inconsistent(&"B", &"X"));
    }

    #[test]
    fn test_hospital_ranking_an_uninterested_resident() {
        // Z ranks A but A has no preference for Z
        let hospitals = PreferenceTable::from_entries([
            ("X", vec!["C", "B", "D"]),
            ("Y", vec!["A", "B", "D", "C"]),
            ("Z", vec!["C", "D", "A"]),
        ])
        .unwrap();

        let err = check_consistency(&hospitals, &residents()).unwrap_err();
        assert_eq!(err, MatchError::inconsistent(&"Z", &"A"));
        assert!(err.to_string().contains("Z has ranked A"));
    }

    #[test]
    fn test_unknown_hospital() {
        let hospitals = PreferenceTable::from_entries([
            ("X", vec!["C", "B", "D"]),
            ("Y", vec!["A", "B", "D", "C"]),
        ])
        .unwrap();

        let err = check_consistency(&hospitals, &residents()).unwrap_err();
        assert_eq!(err, MatchError::unknown(&"Z", &"C"));
    }
}
