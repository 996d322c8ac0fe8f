// ABOUTME: Strength math shared by the recommendation engine and personal-record analysis
// ABOUTME: Epley estimated 1RM and plate-increment weight rounding

//! Algorithm Module
//!
//! Leaf calculations with no dependencies on session history. Both functions are
//! pure and deterministic.

pub mod one_rep_max;
pub mod rounding;

pub use one_rep_max::estimated_1rm;
pub use rounding::round_weight;
