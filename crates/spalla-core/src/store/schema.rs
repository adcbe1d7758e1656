//! Store schema initialization.

use crate::error::{Result, StoreResultExt};

impl super::Store {
    /// Initializes the store schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .store_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .store_context("Failed to initialize store schema")?;

        Ok(())
    }
}
