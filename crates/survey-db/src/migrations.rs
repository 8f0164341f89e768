//! Embedded schema migrations, applied in order on every open.
//!
//! Each script only uses `IF NOT EXISTS`, so re-running is a no-op.

use crate::SurveyDb;
use crate::error::DatabaseError;

const MIGRATIONS: &[(&str, &str)] = &[(
    "001_initial",
    include_str!("../migrations/001_initial.sql"),
)];

impl SurveyDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        for (name, sql) in MIGRATIONS {
            self.conn
                .execute_batch(sql)
                .await
                .map_err(|e| DatabaseError::Migration(format!("{name}: {e}")))?;
            tracing::trace!(migration = *name, "applied");
        }
        Ok(())
    }
}
