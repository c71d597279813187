//! Private working copies of an instance.
//!
//! Solvers prune preference lists as they go. Rather than mutate the caller's
//! tables, every solve interns both sides to dense ids and works on owned
//! `Vec<usize>` lists that are dropped when the solve returns.

use std::collections::HashMap;

use crate::core::error::MatchError;
use crate::core::preferences::PreferenceTable;
use crate::core::types::Player;

/// Dense id assignment for the players of one side
#[derive(Debug, Clone)]
pub(crate) struct Roster<P: Player> {
    players: Vec<P>,
    ids: HashMap<P, usize>,
}

impl<P: Player> Roster<P> {
    fn from_table(table: &PreferenceTable<P>) -> Self {
        let players: Vec<P> = table.players().cloned().collect();
        let ids = players
            .iter()
            .enumerate()
            .map(|(id, player)| (player.clone(), id))
            .collect();
        Self { players, ids }
    }

    pub fn id(&self, player: &P) -> Option<usize> {
        self.ids.get(player).copied()
    }

    pub fn player(&self, id: usize) -> &P {
        &self.players[id]
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }
}

/// Both sides of an instance with mutable, id-based preference lists.
///
/// "Left" is whichever side the caller passed first: suitors (or reviewers
/// after a role swap) for stable marriage, hospitals for hospital/resident.
#[derive(Debug, Clone)]
pub(crate) struct Bipartite<P: Player> {
    pub left: Roster<P>,
    pub right: Roster<P>,
    left_prefs: Vec<Vec<usize>>,
    right_prefs: Vec<Vec<usize>>,
}

impl<P: Player> Bipartite<P> {
    /// Intern both tables.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::UnknownPlayer` if a list names a player that has no
    /// entry in the opposite table.
    pub fn build(left: &PreferenceTable<P>, right: &PreferenceTable<P>) -> Result<Self, MatchError> {
        let left_roster = Roster::from_table(left);
        let right_roster = Roster::from_table(right);

        let left_prefs = resolve(left, &right_roster)?;
        let right_prefs = resolve(right, &left_roster)?;

        Ok(Self {
            left: left_roster,
            right: right_roster,
            left_prefs,
            right_prefs,
        })
    }

    pub fn left_prefs(&self, left: usize) -> &[usize] {
        &self.left_prefs[left]
    }

    pub fn right_prefs(&self, right: usize) -> &[usize] {
        &self.right_prefs[right]
    }

    /// Position of `right` in `left`'s current list
    pub fn left_rank(&self, left: usize, right: usize) -> Option<usize> {
        self.left_prefs[left].iter().position(|&r| r == right)
    }

    /// Position of `left` in `right`'s current list
    pub fn right_rank(&self, right: usize, left: usize) -> Option<usize> {
        self.right_prefs[right].iter().position(|&l| l == left)
    }

    /// Remove the pair from each other's lists
    pub fn prune(&mut self, left: usize, right: usize) {
        self.left_prefs[left].retain(|&r| r != right);
        self.right_prefs[right].retain(|&l| l != left);
    }
}

fn resolve<P: Player>(
    table: &PreferenceTable<P>,
    others: &Roster<P>,
) -> Result<Vec<Vec<usize>>, MatchError> {
    table
        .iter()
        .map(|(player, prefs)| {
            prefs
                .iter()
                .map(|other| {
                    others
                        .id(other)
                        .ok_or_else(|| MatchError::unknown(other, player))
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}
