//! Task list domain model.
//!
//! # Responsibility
//! - Define the canonical task record consumed by store, query and stats.
//! - Own text validation rules shared by create and edit paths.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` that is never reused in a session.
//! - Stored task text is always trimmed and within length bounds.

pub mod task;
pub mod validation;
