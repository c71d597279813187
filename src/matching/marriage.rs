//! Extended Gale-Shapley for the stable marriage problem.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::core::error::MatchError;
use crate::core::matching::MarriageMatching;
use crate::core::types::Player;
use crate::matching::working::Bipartite;

/// Run Extended Gale-Shapley with the left side of `graph` proposing.
///
/// Free proposers wait in a FIFO queue seeded in insertion order; a displaced
/// proposer rejoins at the back. Each time a proposer is accepted, everyone the
/// acceptor ranks below it is pruned from the acceptor's list (and vice versa),
/// so the acceptor can only ever trade up. The result is proposer-optimal.
///
/// # Errors
///
/// Returns `MatchError::MalformedPreference` if a free proposer has run out of
/// candidates (incomplete lists or unequal sides), or
/// `MatchError::InputConsistency` if a proposer ranks someone who does not rank
/// it back.
pub(crate) fn solve<P: Player>(mut graph: Bipartite<P>) -> Result<MarriageMatching<P>, MatchError> {
    let mut partner: Vec<Option<usize>> = vec![None; graph.left.len()];
    let mut held_by: Vec<Option<usize>> = vec![None; graph.right.len()];
    let mut free: VecDeque<usize> = (0..graph.left.len()).collect();
    let mut proposals = 0usize;

    while let Some(suitor) = free.pop_front() {
        let Some(&reviewer) = graph.left_prefs(suitor).first() else {
            return Err(MatchError::MalformedPreference {
                player: graph.left.player(suitor).to_string(),
            });
        };
        let rank = graph.right_rank(reviewer, suitor).ok_or_else(|| {
            MatchError::inconsistent(graph.left.player(suitor), graph.right.player(reviewer))
        })?;
        proposals += 1;

        if let Some(current) = held_by[reviewer].take() {
            trace!(
                "{} displaces {} at {}",
                graph.left.player(suitor),
                graph.left.player(current),
                graph.right.player(reviewer)
            );
            partner[current] = None;
            free.push_back(current);
        }

        partner[suitor] = Some(reviewer);
        held_by[reviewer] = Some(suitor);

        let successors = graph.right_prefs(reviewer)[rank + 1..].to_vec();
        for successor in successors {
            graph.prune(successor, reviewer);
        }
    }

    let pairs: Vec<(P, P)> = partner
        .iter()
        .enumerate()
        .filter_map(|(suitor, reviewer)| {
            reviewer.map(|r| (graph.left.player(suitor).clone(), graph.right.player(r).clone()))
        })
        .collect();

    debug!(
        "Stable marriage solved: {} pairs after {} proposals",
        pairs.len(),
        proposals
    );

    Ok(MarriageMatching::new(pairs))
}
