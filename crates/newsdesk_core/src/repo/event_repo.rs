//! Feedback log repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the stable append/query API over the canonical `predictions`
//!   table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `append` resolves the category label through the injected registry, so
//!   the save path and the display path cannot drift apart.
//! - An append either commits one full row or none; there is no partial
//!   record state.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::{migrations, DbError};
use crate::model::event::{ClassificationEvent, EventId};
use crate::taxonomy::CategoryRegistry;
use chrono::{DateTime, Utc};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EVENT_SELECT_SQL: &str = "SELECT
    id,
    text,
    prediction,
    category,
    timestamp
FROM predictions";

const PREDICTIONS_TABLE: &str = "predictions";
const REQUIRED_COLUMNS: &[&str] = &["id", "text", "prediction", "category", "timestamp"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error family for the feedback log.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted event data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not initialized: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Append/query interface for the classification feedback log.
///
/// Deliberately append-only: no update or delete is ever required, which
/// keeps the storage discipline trivial while still supporting the history
/// view and aggregate statistics.
pub trait EventRepository {
    fn append(&self, text: &str, category_id: i64) -> RepoResult<EventId>;
    fn list_all(&self) -> RepoResult<Vec<ClassificationEvent>>;
    fn count_total(&self) -> RepoResult<u64>;
    fn most_frequent_category(&self) -> RepoResult<Option<String>>;
}

/// SQLite-backed feedback log repository.
pub struct SqliteEventRepository<'a> {
    conn: &'a Connection,
    registry: &'a CategoryRegistry,
}

impl<'a> SqliteEventRepository<'a> {
    /// Wraps a bootstrapped connection after verifying the schema contract.
    ///
    /// Rejects connections whose `user_version` does not match this binary
    /// and connections lacking the `predictions` table or one of its
    /// required columns.
    pub fn try_new(conn: &'a Connection, registry: &'a CategoryRegistry) -> RepoResult<Self> {
        let expected_version = migrations::latest_version();
        let actual_version = conn.query_row("PRAGMA user_version;", [], |row| {
            row.get::<_, u32>(0)
        })?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        if !table_exists(conn, PREDICTIONS_TABLE)? {
            return Err(RepoError::MissingRequiredTable(PREDICTIONS_TABLE));
        }

        let present = column_names(conn, PREDICTIONS_TABLE)?;
        for column in REQUIRED_COLUMNS {
            if !present.iter().any(|name| name == column) {
                return Err(RepoError::MissingRequiredColumn {
                    table: PREDICTIONS_TABLE,
                    column,
                });
            }
        }

        Ok(Self { conn, registry })
    }
}

impl EventRepository for SqliteEventRepository<'_> {
    fn append(&self, text: &str, category_id: i64) -> RepoResult<EventId> {
        let category_label = self.registry.label_of(category_id);
        let timestamp = Utc::now();

        let inserted = self.conn.execute(
            "INSERT INTO predictions (text, prediction, category, timestamp)
             VALUES (?1, ?2, ?3, ?4);",
            params![text, category_id, category_label, timestamp],
        );

        match inserted {
            Ok(_) => {
                let id = self.conn.last_insert_rowid();
                info!(
                    "event=append module=repo status=ok id={id} category_id={category_id}"
                );
                Ok(id)
            }
            Err(err) => {
                error!(
                    "event=append module=repo status=error category_id={category_id} error={err}"
                );
                Err(err.into())
            }
        }
    }

    fn list_all(&self) -> RepoResult<Vec<ClassificationEvent>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EVENT_SELECT_SQL} ORDER BY timestamp DESC, id DESC;"))?;

        let mut rows = stmt.query([])?;
        let mut events = Vec::new();
        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }

        Ok(events)
    }

    fn count_total(&self) -> RepoResult<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM predictions;", [], |row| {
                row.get::<_, u64>(0)
            })?;
        Ok(count)
    }

    fn most_frequent_category(&self) -> RepoResult<Option<String>> {
        // Ties resolve to the earliest-seen label via MIN(id).
        let label = self
            .conn
            .query_row(
                "SELECT category
                 FROM predictions
                 GROUP BY category
                 ORDER BY COUNT(*) DESC, MIN(id) ASC
                 LIMIT 1;",
                [],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(label)
    }
}

fn parse_event_row(row: &Row<'_>) -> RepoResult<ClassificationEvent> {
    let timestamp: DateTime<Utc> = row.get("timestamp").map_err(|err| {
        RepoError::InvalidData(format!("unreadable predictions.timestamp value: {err}"))
    })?;

    Ok(ClassificationEvent {
        id: row.get("id")?,
        text: row.get("text")?,
        category_id: row.get("prediction")?,
        category_label: row.get("category")?,
        timestamp,
    })
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get::<_, i64>(0),
    )?;
    Ok(exists == 1)
}

fn column_names(conn: &Connection, table: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    let mut names = Vec::new();
    while let Some(row) = rows.next()? {
        names.push(row.get::<_, String>("name")?);
    }
    Ok(names)
}
