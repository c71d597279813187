//! Core data types for two-sided matching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Player`]: Anything usable as a suitor, reviewer, resident or hospital
//! - [`PreferenceTable`]: Ordered, strictly ranked preference lists for one side
//! - [`MarriageMatching`], [`HospitalResidentMatching`]: Solver results
//! - [`MarriageOptimality`], [`HospitalResidentOptimality`]: Which side is favoured
//! - [`MatchError`]: Everything that can go wrong building or solving an instance
//!
//! ## Preference lists
//!
//! A preference list ranks the *acceptable* players of the other side, most
//! preferred first. Lists are strict (no ties, no repeats). Solvers never touch
//! the caller's tables; they prune private working copies instead.
//!
//! [`Player`]: types::Player
//! [`PreferenceTable`]: preferences::PreferenceTable
//! [`MarriageMatching`]: matching::MarriageMatching
//! [`HospitalResidentMatching`]: matching::HospitalResidentMatching
//! [`MarriageOptimality`]: types::MarriageOptimality
//! [`HospitalResidentOptimality`]: types::HospitalResidentOptimality
//! [`MatchError`]: error::MatchError

pub mod error;
pub mod matching;
pub mod preferences;
pub mod types;
