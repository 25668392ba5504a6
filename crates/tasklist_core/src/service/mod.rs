//! Core use-case services.
//!
//! # Responsibility
//! - Combine the store with the current view selection into one session.
//! - Keep UI/FFI layers decoupled from store and query internals.

pub mod task_list_service;
