//! Service layer over the survey store.
//!
//! `SurveyService` wraps `SurveyDb`. All repo methods are implemented as
//! `impl SurveyService` blocks in [`crate::repos`].

use survey_config::DatabaseConfig;

use crate::SurveyDb;
use crate::error::DatabaseError;

/// Question bank and survey operations over one database.
///
/// Holds no mutable state; share it between tasks behind an `Arc`.
pub struct SurveyService {
    db: SurveyDb,
}

impl SurveyService {
    /// Open the configured database and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(SurveyDb::open(config).await?))
    }

    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(SurveyDb::open_local(db_path).await?))
    }

    /// Create from an existing `SurveyDb`.
    #[must_use]
    pub fn from_db(db: SurveyDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &SurveyDb {
        &self.db
    }
}
