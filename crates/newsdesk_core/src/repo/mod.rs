//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the append/query contract over the feedback log.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - The feedback log is append-only: no update or delete API exists.
//! - Repository APIs return semantic errors (schema guards) in addition to
//!   DB transport errors.

pub mod event_repo;
