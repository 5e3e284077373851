//! Feedback store use-case service.
//!
//! # Responsibility
//! - Provide stable append/query entry points over a database path.
//! - Own the scoped-acquisition policy: each operation opens a fresh
//!   connection and releases it on every exit path.
//!
//! # Invariants
//! - No connection outlives a single operation, so concurrent process
//!   instances can share one database file.
//! - Service APIs never bypass repository schema guards.

use crate::db::{open_db, DbResult};
use crate::export::render_csv;
use crate::model::event::{ClassificationEvent, EventId};
use crate::repo::event_repo::{EventRepository, RepoResult, SqliteEventRepository};
use crate::taxonomy::CategoryRegistry;
use std::path::{Path, PathBuf};

/// Path-scoped surface over the feedback log.
///
/// Holds the immutable category registry injected at startup; the registry is
/// shared with the repository so write-time label resolution and display use
/// the same lookup.
pub struct FeedbackService {
    db_path: PathBuf,
    registry: CategoryRegistry,
}

impl FeedbackService {
    pub fn new(db_path: impl AsRef<Path>, registry: CategoryRegistry) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
            registry,
        }
    }

    /// The injected taxonomy, for display-side label resolution.
    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Creates the schema if absent. Idempotent; safe on every process start.
    pub fn initialize(&self) -> DbResult<()> {
        open_db(&self.db_path).map(drop)
    }

    /// Records one classification event; returns the store-assigned id.
    pub fn append(&self, text: &str, category_id: i64) -> RepoResult<EventId> {
        self.with_repo(|repo| repo.append(text, category_id))
    }

    /// Full history, most recent first.
    pub fn list_all(&self) -> RepoResult<Vec<ClassificationEvent>> {
        self.with_repo(|repo| repo.list_all())
    }

    /// Number of recorded events.
    pub fn count_total(&self) -> RepoResult<u64> {
        self.with_repo(|repo| repo.count_total())
    }

    /// Most frequent label, earliest-seen label winning ties; `None` when the
    /// log is empty.
    pub fn most_frequent_category(&self) -> RepoResult<Option<String>> {
        self.with_repo(|repo| repo.most_frequent_category())
    }

    /// Full history rendered as downloadable CSV.
    pub fn export_csv(&self) -> RepoResult<String> {
        self.with_repo(|repo| Ok(render_csv(&repo.list_all()?)))
    }

    fn with_repo<T>(
        &self,
        op: impl FnOnce(&SqliteEventRepository<'_>) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let conn = open_db(&self.db_path)?;
        let repo = SqliteEventRepository::try_new(&conn, &self.registry)?;
        op(&repo)
        // conn drops here on success and on every error path
    }
}
