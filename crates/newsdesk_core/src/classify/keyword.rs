//! Built-in keyword fallback backend.
//!
//! # Responsibility
//! - Provide a deterministic, always-available classifier for offline and
//!   demo use when no external model runner is configured.
//!
//! # Invariants
//! - Matching is case-insensitive and table order decides between candidate
//!   categories, so results are stable across runs.

use super::{CategoryId, Classifier, ClassifyError};

/// Fixed keyword table against the default news taxonomy ids.
const NEWS_KEYWORDS: &[(&str, CategoryId)] = &[
    ("stocks", 3),
    ("market", 3),
    ("economy", 3),
    ("fed", 3),
    ("earnings", 3),
    ("election", 17),
    ("senate", 17),
    ("congress", 17),
    ("president", 17),
    ("game", 21),
    ("season", 21),
    ("coach", 21),
    ("championship", 21),
    ("league", 21),
    ("startup", 24),
    ("software", 24),
    ("smartphone", 24),
    ("silicon valley", 24),
    ("study", 20),
    ("research", 20),
    ("nasa", 20),
    ("climate", 11),
    ("movie", 8),
    ("film", 8),
    ("celebrity", 8),
    ("recipe", 23),
    ("travel", 26),
    ("flight", 26),
];

/// Category reported when no keyword matches.
const DEFAULT_CATEGORY: CategoryId = 29; // WORLD NEWS

/// Keyword-lookup classifier, infallible at classify time.
pub struct KeywordClassifier {
    table: &'static [(&'static str, CategoryId)],
    default_id: CategoryId,
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self {
            table: NEWS_KEYWORDS,
            default_id: DEFAULT_CATEGORY,
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Result<CategoryId, ClassifyError> {
        let lowered = text.to_lowercase();
        let category_id = self
            .table
            .iter()
            .find_map(|(keyword, id)| lowered.contains(keyword).then_some(*id))
            .unwrap_or(self.default_id);
        Ok(category_id)
    }
}
