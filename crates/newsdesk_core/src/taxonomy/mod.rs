//! Fixed news-topic taxonomy and label resolution.
//!
//! # Responsibility
//! - Hold the closed set of category ids the classifier can produce.
//! - Resolve any integer id to a display label, known or not.
//!
//! # Invariants
//! - The registry is immutable after construction.
//! - `label_of` is total: unknown ids resolve to a fallback label instead of
//!   an error.

use serde::{Deserialize, Serialize};

/// One entry of the fixed topic taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub label: String,
}

/// Class ids emitted by the pre-trained news model, in model output order.
const NEWS_CATEGORIES: &[(i64, &str)] = &[
    (0, "ARTS"),
    (1, "ARTS & CULTURE"),
    (2, "BLACK VOICES"),
    (3, "BUSINESS"),
    (4, "COLLEGE"),
    (5, "COMEDY"),
    (6, "CRIME"),
    (7, "EDUCATION"),
    (8, "ENTERTAINMENT"),
    (9, "FIFTY"),
    (10, "GOOD NEWS"),
    (11, "GREEN"),
    (12, "HEALTHY LIVING"),
    (13, "IMPACT"),
    (14, "LATINO VOICES"),
    (15, "MEDIA"),
    (16, "PARENTS"),
    (17, "POLITICS"),
    (18, "QUEER VOICES"),
    (19, "RELIGION"),
    (20, "SCIENCE"),
    (21, "SPORTS"),
    (22, "STYLE"),
    (23, "TASTE"),
    (24, "TECH"),
    (25, "THE WORLDPOST"),
    (26, "TRAVEL"),
    (27, "WEIRD NEWS"),
    (28, "WOMEN"),
    (29, "WORLD NEWS"),
    (30, "WORLDPOST"),
];

/// Immutable id-to-label table, built once at startup and injected into the
/// components that need it.
///
/// Kept as a value (not ambient global state) so tests can substitute a
/// smaller fixture taxonomy.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Builds a registry from explicit `(id, label)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        let categories = pairs
            .into_iter()
            .map(|(id, label)| Category {
                id,
                label: label.into(),
            })
            .collect();
        Self { categories }
    }

    /// Builds the canonical 31-entry news taxonomy.
    pub fn news_default() -> Self {
        Self::from_pairs(NEWS_CATEGORIES.iter().copied())
    }

    /// Resolves `id` to its display label.
    ///
    /// Total over all integers: ids outside the known set (negative included)
    /// yield `Unknown Category (<id>)`.
    pub fn label_of(&self, id: i64) -> String {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.label.clone())
            .unwrap_or_else(|| format!("Unknown Category ({id})"))
    }

    /// Returns whether `id` belongs to the closed taxonomy.
    pub fn contains(&self, id: i64) -> bool {
        self.categories.iter().any(|category| category.id == id)
    }

    /// Returns all known categories in registry order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of known categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
