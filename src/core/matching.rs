use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::types::Player;

/// One-to-one matching produced by the stable marriage solver.
///
/// Keyed by the proposing side: suitors for a suitor-optimal solve, reviewers
/// for a reviewer-optimal one. Pairs are in the proposers' insertion order.
#[derive(Debug, Clone)]
pub struct MarriageMatching<P: Player> {
    pairs: Vec<(P, P)>,

    /// Index: proposer -> position in pairs
    by_proposer: HashMap<P, usize>,

    /// Index: partner -> position in pairs
    by_partner: HashMap<P, usize>,
}

impl<P: Player> MarriageMatching<P> {
    /// Wrap `(proposer, partner)` pairs, e.g. to verify a matching produced
    /// elsewhere.
    pub fn new(pairs: Vec<(P, P)>) -> Self {
        let mut by_proposer = HashMap::with_capacity(pairs.len());
        let mut by_partner = HashMap::with_capacity(pairs.len());
        for (idx, (proposer, partner)) in pairs.iter().enumerate() {
            by_proposer.entry(proposer.clone()).or_insert(idx);
            by_partner.entry(partner.clone()).or_insert(idx);
        }
        Self {
            pairs,
            by_proposer,
            by_partner,
        }
    }

    /// Partner of a proposer
    pub fn get(&self, proposer: &P) -> Option<&P> {
        self.by_proposer
            .get(proposer)
            .map(|&idx| &self.pairs[idx].1)
    }

    /// Proposer matched to `partner`, if any
    pub fn proposer_of(&self, partner: &P) -> Option<&P> {
        self.by_partner
            .get(partner)
            .map(|&idx| &self.pairs[idx].0)
    }

    /// `(proposer, partner)` pairs in proposer order
    pub fn iter(&self) -> impl Iterator<Item = (&P, &P)> + '_ {
        self.pairs.iter().map(|(p, q)| (p, q))
    }

    /// The same matching keyed by the other side
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self::new(
            self.pairs
                .iter()
                .map(|(p, q)| (q.clone(), p.clone()))
                .collect(),
        )
    }

    /// Number of matched pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if nobody is matched
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_pairs(self) -> Vec<(P, P)> {
        self.pairs
    }
}

impl<P: Player> PartialEq for MarriageMatching<P> {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl<P: Player> Eq for MarriageMatching<P> {}

impl<P: Player + Serialize> Serialize for MarriageMatching<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (proposer, partner) in &self.pairs {
            map.serialize_entry(proposer, partner)?;
        }
        map.end()
    }
}

/// Many-to-one matching produced by the hospital/resident solvers.
///
/// Every hospital of the instance is present, in insertion order. Each
/// hospital's residents are ordered by that hospital's preferences and never
/// exceed its capacity.
#[derive(Debug, Clone)]
pub struct HospitalResidentMatching<P: Player> {
    assignments: Vec<(P, Vec<P>)>,

    /// Index: hospital -> position in assignments
    by_hospital: HashMap<P, usize>,

    /// Index: resident -> position of its hospital in assignments
    by_resident: HashMap<P, usize>,
}

impl<P: Player> HospitalResidentMatching<P> {
    /// Wrap `(hospital, residents)` assignments, e.g. to verify a matching
    /// produced elsewhere.
    pub fn new(assignments: Vec<(P, Vec<P>)>) -> Self {
        let mut by_hospital = HashMap::with_capacity(assignments.len());
        let mut by_resident = HashMap::new();
        for (idx, (hospital, residents)) in assignments.iter().enumerate() {
            by_hospital.entry(hospital.clone()).or_insert(idx);
            for resident in residents {
                by_resident.entry(resident.clone()).or_insert(idx);
            }
        }
        Self {
            assignments,
            by_hospital,
            by_resident,
        }
    }

    /// Residents assigned to a hospital, best first
    pub fn get(&self, hospital: &P) -> Option<&[P]> {
        self.by_hospital
            .get(hospital)
            .map(|&idx| self.assignments[idx].1.as_slice())
    }

    /// Hospital a resident is assigned to, if any
    pub fn hospital_of(&self, resident: &P) -> Option<&P> {
        self.by_resident
            .get(resident)
            .map(|&idx| &self.assignments[idx].0)
    }

    /// `(hospital, residents)` pairs in hospital order
    pub fn iter(&self) -> impl Iterator<Item = (&P, &[P])> + '_ {
        self.assignments
            .iter()
            .map(|(hospital, residents)| (hospital, residents.as_slice()))
    }

    /// Total number of assigned residents
    pub fn matched_count(&self) -> usize {
        self.assignments.iter().map(|(_, r)| r.len()).sum()
    }

    /// Number of hospitals
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Check if the matching has no hospitals
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl<P: Player> PartialEq for HospitalResidentMatching<P> {
    fn eq(&self, other: &Self) -> bool {
        self.assignments == other.assignments
    }
}

impl<P: Player> Eq for HospitalResidentMatching<P> {}

impl<P: Player + Serialize> Serialize for HospitalResidentMatching<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.assignments.len()))?;
        for (hospital, residents) in &self.assignments {
            map.serialize_entry(hospital, residents)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marriage_lookup_both_ways() {
        let matching = MarriageMatching::new(vec![("A", "F"), ("B", "D"), ("C", "E")]);
        assert_eq!(matching.get(&"B"), Some(&"D"));
        assert_eq!(matching.proposer_of(&"E"), Some(&"C"));
        assert_eq!(matching.get(&"D"), None);
        assert_eq!(matching.len(), 3);

        let inverted = matching.inverted();
        assert_eq!(inverted.get(&"F"), Some(&"A"));
        assert_eq!(inverted.inverted(), matching);
    }

    #[test]
    fn test_hospital_lookup() {
        let matching =
            HospitalResidentMatching::new(vec![("X", vec!["D"]), ("Y", vec!["A", "B"]), ("Z", vec![])]);
        assert_eq!(matching.get(&"Y"), Some(&["A", "B"][..]));
        assert_eq!(matching.get(&"Z"), Some(&[][..]));
        assert_eq!(matching.hospital_of(&"B"), Some(&"Y"));
        assert_eq!(matching.hospital_of(&"C"), None);
        assert_eq!(matching.matched_count(), 3);
        assert_eq!(matching.len(), 3);
    }

    #[test]
    fn test_lookup_keeps_first_occurrence() {
        let matching = HospitalResidentMatching::new(vec![("X", vec!["A"]), ("Y", vec!["A"])]);
        assert_eq!(matching.hospital_of(&"A"), Some(&"X"));

        let matching = MarriageMatching::new(vec![("A", "D"), ("B", "D")]);
        assert_eq!(matching.proposer_of(&"D"), Some(&"A"));
    }

    #[test]
    fn test_lookup_on_large_matching() {
        let names: Vec<String> = (0..50_000).map(|i| format!("P{i}")).collect();
        let matching = MarriageMatching::new(
            names
                .iter()
                .zip(names.iter().rev())
                .map(|(p, q)| (p.clone(), q.clone()))
                .collect(),
        );

        for (i, name) in names.iter().enumerate() {
            assert_eq!(matching.get(name), Some(&names[names.len() - 1 - i]));
            assert_eq!(matching.proposer_of(name), Some(&names[names.len() - 1 - i]));
        }
    }

    #[test]
    fn test_serialize_as_ordered_maps() {
        let matching = MarriageMatching::new(vec![("B", "D"), ("A", "F")]);
        assert_eq!(serde_json::to_string(&matching).unwrap(), r#"{"B":"D","A":"F"}"#);

        let matching = HospitalResidentMatching::new(vec![("Y", vec!["A", "B"]), ("X", vec![])]);
        assert_eq!(
            serde_json::to_string(&matching).unwrap(),
            r#"{"Y":["A","B"],"X":[]}"#
        );
    }
}
