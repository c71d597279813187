//! Bookkeeping shared by both hospital/resident solvers.

use std::collections::HashMap;

use tracing::{trace, warn};

use crate::core::error::MatchError;
use crate::core::matching::HospitalResidentMatching;
use crate::core::preferences::PreferenceTable;
use crate::core::types::Player;
use crate::matching::working::Bipartite;

/// Working state of a hospital/resident solve.
///
/// Hospitals are the left side of the working graph, residents the right.
/// Invariants: a resident sits in at most one hospital's sequence, no sequence
/// is longer than its hospital's capacity, and any matched pair is still
/// present in both working lists.
#[derive(Debug, Clone)]
pub(crate) struct CapacityAwareMatchState<P: Player> {
    graph: Bipartite<P>,
    capacities: Vec<usize>,

    /// hospital -> matched residents, in acceptance order
    matches: Vec<Vec<usize>>,

    /// resident -> hospital
    assigned: Vec<Option<usize>>,
}

impl<P: Player> CapacityAwareMatchState<P> {
    /// Build working copies of both tables and resolve every hospital's capacity.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::UnknownPlayer` for unresolvable list entries,
    /// `MatchError::MissingCapacity` if a hospital has no capacity and
    /// `MatchError::ZeroCapacity` if a capacity is zero.
    pub fn new(
        hospital_prefs: &PreferenceTable<P>,
        resident_prefs: &PreferenceTable<P>,
        capacities: &HashMap<P, usize>,
    ) -> Result<Self, MatchError> {
        let graph = Bipartite::build(hospital_prefs, resident_prefs)?;

        let resolved = hospital_prefs
            .players()
            .map(|hospital| match capacities.get(hospital) {
                None => Err(MatchError::MissingCapacity {
                    hospital: hospital.to_string(),
                }),
                Some(0) => Err(MatchError::ZeroCapacity {
                    hospital: hospital.to_string(),
                }),
                Some(&capacity) => Ok(capacity),
            })
            .collect::<Result<Vec<_>, _>>()?;

        for hospital in capacities.keys() {
            if !hospital_prefs.contains(hospital) {
                warn!("Ignoring capacity for unknown hospital {hospital}");
            }
        }

        Ok(Self {
            matches: vec![Vec::new(); graph.left.len()],
            assigned: vec![None; graph.right.len()],
            graph,
            capacities: resolved,
        })
    }

    /// Residents with a non-empty list and no hospital, in insertion order
    pub fn free_residents(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.graph.right.len()).filter(|&resident| {
            self.assigned[resident].is_none() && !self.graph.right_prefs(resident).is_empty()
        })
    }

    /// Hospitals below capacity that still have a resident they are not
    /// matched to, in insertion order
    pub fn free_hospitals(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.graph.left.len()).filter(|&hospital| {
            self.matches[hospital].len() < self.capacities[hospital]
                && self.best_unmatched_resident(hospital).is_some()
        })
    }

    pub fn next_free_resident(&self) -> Option<usize> {
        self.free_residents().next()
    }

    pub fn next_free_hospital(&self) -> Option<usize> {
        self.free_hospitals().next()
    }

    /// Rank of the least preferred resident currently matched to `hospital`
    pub fn worst_match_rank(&self, hospital: usize) -> Option<usize> {
        self.matches[hospital]
            .iter()
            .filter_map(|&resident| self.graph.left_rank(hospital, resident))
            .max()
    }

    /// Least preferred resident currently matched to `hospital`
    pub fn worst_match(&self, hospital: usize) -> Option<usize> {
        self.worst_match_rank(hospital)
            .map(|rank| self.graph.left_prefs(hospital)[rank])
    }

    /// Most preferred resident in `hospital`'s list that is not matched to it
    pub fn best_unmatched_resident(&self, hospital: usize) -> Option<usize> {
        self.graph
            .left_prefs(hospital)
            .iter()
            .copied()
            .find(|&resident| self.assigned[resident] != Some(hospital))
    }

    /// First hospital left in a resident's list
    pub fn top_choice(&self, resident: usize) -> Option<usize> {
        self.graph.right_prefs(resident).first().copied()
    }

    pub fn hospital_prefs(&self, hospital: usize) -> &[usize] {
        self.graph.left_prefs(hospital)
    }

    pub fn resident_prefs(&self, resident: usize) -> &[usize] {
        self.graph.right_prefs(resident)
    }

    /// Position of `hospital` in `resident`'s current list
    pub fn resident_rank(&self, resident: usize, hospital: usize) -> Option<usize> {
        self.graph.right_rank(resident, hospital)
    }

    pub fn hospital_of(&self, resident: usize) -> Option<usize> {
        self.assigned[resident]
    }

    pub fn is_full(&self, hospital: usize) -> bool {
        self.matches[hospital].len() >= self.capacities[hospital]
    }

    pub fn assign(&mut self, hospital: usize, resident: usize) {
        debug_assert!(self.assigned[resident].is_none());
        debug_assert!(!self.is_full(hospital));
        trace!(
            "{} assigned to {}",
            self.graph.right.player(resident),
            self.graph.left.player(hospital)
        );
        self.matches[hospital].push(resident);
        self.assigned[resident] = Some(hospital);
    }

    pub fn unassign(&mut self, hospital: usize, resident: usize) {
        trace!(
            "{} released by {}",
            self.graph.right.player(resident),
            self.graph.left.player(hospital)
        );
        self.matches[hospital].retain(|&r| r != resident);
        if self.assigned[resident] == Some(hospital) {
            self.assigned[resident] = None;
        }
    }

    /// Remove the hospital and resident from each other's lists
    pub fn prune(&mut self, hospital: usize, resident: usize) {
        self.graph.prune(hospital, resident);
    }

    pub fn matched_count(&self) -> usize {
        self.matches.iter().map(Vec::len).sum()
    }

    /// Finish the solve: every sequence is sorted by its hospital's
    /// preference order.
    pub fn into_matching(self) -> HospitalResidentMatching<P> {
        let assignments = self
            .matches
            .iter()
            .enumerate()
            .map(|(hospital, residents)| {
                let mut residents = residents.clone();
                residents.sort_by_key(|&resident| {
                    self.graph
                        .left_rank(hospital, resident)
                        .unwrap_or(usize::MAX)
                });
                let residents = residents
                    .into_iter()
                    .map(|resident| self.graph.right.player(resident).clone())
                    .collect();
                (self.graph.left.player(hospital).clone(), residents)
            })
            .collect();

        HospitalResidentMatching::new(assignments)
    }
}
