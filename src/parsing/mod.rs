//! Parsers for matching instances.
//!
//! Instances are JSON objects whose preference tables are objects mapping a
//! player to its ranked list. Key order is significant: it is the order in
//! which solvers consider free players, and the order of the output.
//!
//! ## Stable marriage
//!
//! ```json
//! {
//!   "suitors":   {"A": ["D", "E"], "B": ["E", "D"]},
//!   "reviewers": {"D": ["B", "A"], "E": ["A", "B"]}
//! }
//! ```
//!
//! ## Hospital/resident
//!
//! ```json
//! {
//!   "hospitals":  {"X": ["A", "B"]},
//!   "residents":  {"A": ["X"], "B": ["X"]},
//!   "capacities": {"X": 1}
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use match_solver::parsing::instance::parse_marriage_text;
//!
//! let instance = parse_marriage_text(
//!     r#"{"suitors": {"A": ["D"]}, "reviewers": {"D": ["A"]}}"#,
//! )
//! .unwrap();
//! assert_eq!(instance.suitors.len(), 1);
//! ```

pub mod instance;
