//! Pure read-side derivations over task snapshots.
//!
//! # Responsibility
//! - Filter and order tasks for presentation.
//! - Derive aggregate counters for the dashboard.
//!
//! # Invariants
//! - Nothing in this module mutates its input.
//! - Results are deterministic for the same snapshot and keys.

pub mod stats;
pub mod view;
