//! # match-solver
//!
//! A library for computing stable matchings in two-sided markets.
//!
//! Two classical problems are supported:
//!
//! - **Stable marriage**: one-to-one matching of suitors and reviewers, solved
//!   with the Extended Gale-Shapley algorithm.
//! - **Hospital/resident**: many-to-one matching of residents to hospitals with
//!   capacities, solved with resident-proposing (Dubins-Freeman) or
//!   hospital-proposing (Roth) deferred acceptance.
//!
//! Every matching returned is stable: no two players who are not matched to
//! each other would both rather be. Which stable matching you get depends on
//! the optimality selector; the proposing side receives the best partner(s)
//! it can have in any stable matching.
//!
//! ## Features
//!
//! - **Strict preference tables**: Ordered, duplicate-free, order-preserving JSON
//! - **No side effects**: Solvers prune private working copies, never your tables
//! - **Consistency checking**: Hospital and resident lists must rank each other
//! - **Verification**: Blocking-pair detection for any matching
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use match_solver::{solve_hospital_resident, HospitalResidentOptimality, PreferenceTable};
//!
//! let hospitals = PreferenceTable::from_entries([("H", vec!["R2", "R1", "R3"])]).unwrap();
//! let residents = PreferenceTable::from_entries([
//!     ("R1", vec!["H"]),
//!     ("R2", vec!["H"]),
//!     ("R3", vec!["H"]),
//! ])
//! .unwrap();
//! let capacities = HashMap::from([("H", 2)]);
//!
//! let matching = solve_hospital_resident(
//!     &hospitals,
//!     &residents,
//!     &capacities,
//!     HospitalResidentOptimality::Resident,
//! )
//! .unwrap();
//!
//! assert_eq!(matching.get(&"H"), Some(&["R2", "R1"][..]));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Players, preference tables, matchings and errors
//! - [`matching`]: Solvers, consistency check and stability verification
//! - [`parsing`]: JSON instance parsing
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::error::MatchError;
pub use crate::core::matching::{HospitalResidentMatching, MarriageMatching};
pub use crate::core::preferences::PreferenceTable;
pub use crate::core::types::*;
pub use crate::matching::{
    check_consistency, hospital_resident_blocking_pairs, marriage_blocking_pairs,
    solve_hospital_resident, solve_stable_marriage,
};
