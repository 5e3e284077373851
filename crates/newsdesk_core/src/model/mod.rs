//! Domain records for the classification feedback log.
//!
//! # Responsibility
//! - Define the canonical event shape shared by storage, export and UI.
//!
//! # Invariants
//! - Events are immutable once appended; no update or delete exists.

pub mod event;
