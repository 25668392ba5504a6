//! In-memory task ownership.
//!
//! # Responsibility
//! - Own the task collection and expose its only mutation surface.
//! - Allocate session-unique task ids.
//!
//! # Invariants
//! - Writes go through validation before touching the collection.
//! - Id misses on toggle/edit/remove are benign no-ops, never errors.

pub mod task_store;
