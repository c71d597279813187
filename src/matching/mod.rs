//! Stable matching algorithms.
//!
//! This module provides the solvers and their shared machinery:
//!
//! - [`solve_stable_marriage`]: Extended Gale-Shapley for one-to-one instances
//! - [`solve_hospital_resident`]: Deferred acceptance for many-to-one instances
//!   with capacities, resident- or hospital-optimal
//! - [`check_consistency`]: The mutual-ranking check run before any
//!   hospital/resident solve
//! - [`marriage_blocking_pairs`], [`hospital_resident_blocking_pairs`]:
//!   Stability verification of finished matchings
//!
//! ## Pruning
//!
//! All solvers work on private copies of the preference lists. Whenever a
//! pair is proven unable to appear in any stable matching that keeps the
//! current provisional matches, both players are removed from each other's
//! lists. Lists only shrink, which is what guarantees termination.
//!
//! ## Example
//!
//! ```rust
//! use match_solver::{solve_stable_marriage, MarriageOptimality, PreferenceTable};
//!
//! let suitors = PreferenceTable::from_entries([
//!     ("A", vec!["D", "E"]),
//!     ("B", vec!["D", "E"]),
//! ])
//! .unwrap();
//! let reviewers = PreferenceTable::from_entries([
//!     ("D", vec!["B", "A"]),
//!     ("E", vec!["A", "B"]),
//! ])
//! .unwrap();
//!
//! let matching = solve_stable_marriage(&suitors, &reviewers, MarriageOptimality::Suitor).unwrap();
//! assert_eq!(matching.get(&"A"), Some(&"E"));
//! assert_eq!(matching.get(&"B"), Some(&"D"));
//! ```

pub(crate) mod capacity;
pub mod consistency;
pub mod engine;
pub(crate) mod hospital_optimal;
pub(crate) mod marriage;
pub(crate) mod resident_optimal;
pub mod stability;
pub(crate) mod working;

pub use consistency::check_consistency;
pub use engine::{solve_hospital_resident, solve_stable_marriage};
pub use stability::{hospital_resident_blocking_pairs, marriage_blocking_pairs};
