use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::MatchError;

/// Anything that can stand in for a suitor, reviewer, resident or hospital.
///
/// Identity is by `Eq`/`Hash`; `Display` is only used to name players in errors
/// and log output.
pub trait Player: Clone + Eq + Hash + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Display> Player for T {}

/// Which side of a stable marriage instance the matching should favour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarriageOptimality {
    /// Suitors propose; every suitor gets its best stable partner
    #[default]
    Suitor,
    /// Reviewers propose; every reviewer gets its best stable partner
    Reviewer,
}

impl fmt::Display for MarriageOptimality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suitor => write!(f, "suitor"),
            Self::Reviewer => write!(f, "reviewer"),
        }
    }
}

impl FromStr for MarriageOptimality {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "suitor" => Ok(Self::Suitor),
            "reviewer" => Ok(Self::Reviewer),
            other => Err(MatchError::InvalidOptimality {
                expected: "\"suitor\" or \"reviewer\"",
                got: other.to_string(),
            }),
        }
    }
}

/// Strategy used to solve a hospital/resident instance.
///
/// Both strategies share the same capacity-aware bookkeeping; they differ in
/// which side makes the proposals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HospitalResidentOptimality {
    /// Residents propose (Dubins-Freeman)
    #[default]
    Resident,
    /// Hospitals propose (Roth)
    Hospital,
}

impl fmt::Display for HospitalResidentOptimality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resident => write!(f, "resident"),
            Self::Hospital => write!(f, "hospital"),
        }
    }
}

impl FromStr for HospitalResidentOptimality {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resident" => Ok(Self::Resident),
            "hospital" => Ok(Self::Hospital),
            other => Err(MatchError::InvalidOptimality {
                expected: "\"resident\" or \"hospital\"",
                got: other.to_string(),
            }),
        }
    }
}
