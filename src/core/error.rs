use std::fmt::Display;

use thiserror::Error;

/// Errors raised while building preference tables or solving an instance.
///
/// Player names are captured through their `Display` form so the error type
/// does not depend on the player type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("{ranker} has ranked {ranked} but not the other way around")]
    InputConsistency { ranker: String, ranked: String },

    #[error("{referenced_by} ranks {player}, who has no preference list")]
    UnknownPlayer {
        player: String,
        referenced_by: String,
    },

    #[error("Optimality option unknown. Should be one of {expected}. Got {got}.")]
    InvalidOptimality { expected: &'static str, got: String },

    #[error("{player} is free but has an empty preference list")]
    MalformedPreference { player: String },

    #[error("Player {player} appears more than once")]
    DuplicatePlayer { player: String },

    #[error("{player} ranks {duplicate} more than once")]
    DuplicatePreference { player: String, duplicate: String },

    #[error("No capacity given for hospital {hospital}")]
    MissingCapacity { hospital: String },

    #[error("Hospital {hospital} has a capacity of zero")]
    ZeroCapacity { hospital: String },
}

impl MatchError {
    pub(crate) fn inconsistent(ranker: &impl Display, ranked: &impl Display) -> Self {
        Self::InputConsistency {
            ranker: ranker.to_string(),
            ranked: ranked.to_string(),
        }
    }

    pub(crate) fn unknown(player: &impl Display, referenced_by: &impl Display) -> Self {
        Self::UnknownPlayer {
            player: player.to_string(),
            referenced_by: referenced_by.to_string(),
        }
    }
}
