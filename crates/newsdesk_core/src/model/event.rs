//! Classification event domain model.
//!
//! # Responsibility
//! - Define the record appended to the feedback log for every successful
//!   classification.
//!
//! # Invariants
//! - `id` is assigned by the store, monotonically increasing, never reused.
//! - `category_label` is a denormalized copy of the registry lookup at write
//!   time, so history stays faithful to what the user saw even if the
//!   taxonomy changes later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store's autoincrement counter.
pub type EventId = i64;

/// One immutable record of a text input, its assigned category, and when it
/// was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationEvent {
    pub id: EventId,
    /// Original input, stored verbatim (not truncated, not normalized).
    pub text: String,
    /// Raw class id produced by the model. Serialized as `prediction` to
    /// match storage schema naming.
    #[serde(rename = "prediction")]
    pub category_id: i64,
    /// Label resolved at write time.
    #[serde(rename = "category")]
    pub category_label: String,
    /// Append instant, UTC, assigned by the store.
    pub timestamp: DateTime<Utc>,
}
