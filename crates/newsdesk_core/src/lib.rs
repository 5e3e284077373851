//! Core domain logic for Newsdesk.
//! This crate is the single source of truth for business invariants.

pub mod classify;
pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod taxonomy;

pub use classify::{
    non_empty_input, CategoryId, Classifier, ClassifyError, CommandClassifier, KeywordClassifier,
    ValidationError,
};
pub use export::render_csv;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{ClassificationEvent, EventId};
pub use repo::event_repo::{EventRepository, RepoError, RepoResult, SqliteEventRepository};
pub use service::feedback_service::FeedbackService;
pub use taxonomy::{Category, CategoryRegistry};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
