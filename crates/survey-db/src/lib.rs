//! # survey-db
//!
//! libSQL storage for the question bank and surveys.
//!
//! `SurveyDb` owns the database handle, runs migrations, and hands out
//! prefixed IDs. `SurveyService` carries the question and survey repository
//! methods (see [`repos`]).
//!
//! Uses the `libsql` crate: a local file (or `:memory:`) by default, or a
//! remote Turso database when URL and token are configured.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use std::future::Future;

use error::DatabaseError;
use libsql::Builder;
use survey_config::DatabaseConfig;

pub use service::SurveyService;

/// Central database handle.
///
/// Wraps a libSQL database and one long-lived connection shared by all
/// requests. Statements are sent once; failures are never replayed.
pub struct SurveyDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl SurveyDb {
    /// Open the database described by `config`: remote when URL and token are
    /// both set, otherwise the local `path`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            Self::open_remote(&config.url, &config.auth_token).await
        } else {
            Self::open_local(&config.path).await
        }
    }

    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        tracing::debug!(path, "opened local database");
        Self::init(db, conn, false).await
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        tracing::debug!(url, "opened remote database");
        Self::init(db, conn, true).await
    }

    async fn init(
        db: libsql::Database,
        conn: libsql::Connection,
        remote: bool,
    ) -> Result<Self, DatabaseError> {
        let survey_db = Self { db, conn, remote };
        survey_db.run_migrations().await?;
        Ok(survey_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether this handle talks to a remote database.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"srv-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the
    /// prefix. 32 random bits means collisions become likely past tens of
    /// thousands of rows per table; [`Self::insert_with_fresh_id`] absorbs them.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT ?1 || '-' || lower(hex(randomblob(4)))", [prefix])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Insert a row under a freshly generated `prefix` ID and return that ID.
    ///
    /// `insert` receives the candidate ID. If the row is rejected because the
    /// ID is already taken, one new ID is drawn and `insert` runs once more.
    /// A rejected insert stores nothing, so the second attempt cannot
    /// duplicate a row. Any other failure is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if ID generation or the insert fails.
    pub async fn insert_with_fresh_id<F, Fut>(
        &self,
        prefix: &str,
        mut insert: F,
    ) -> Result<String, DatabaseError>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<u64, libsql::Error>>,
    {
        let id = self.generate_id(prefix).await?;
        match insert(id.clone()).await {
            Ok(_) => Ok(id),
            Err(error) if is_id_conflict(&error) => {
                let fresh = self.generate_id(prefix).await?;
                tracing::warn!(taken = %id, %fresh, "generated id already in use");
                insert(fresh.clone()).await?;
                Ok(fresh)
            }
            Err(error) => Err(error.into()),
        }
    }
}

/// Uniqueness violation. The only unique column in the schema is each
/// table's `id` primary key.
fn is_id_conflict(error: &libsql::Error) -> bool {
    error.to_string().contains("UNIQUE constraint failed")
}
