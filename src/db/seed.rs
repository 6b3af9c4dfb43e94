// src/db/seed.rs
use crate::db::connection::Database;
use crate::db::properties::{count_properties, insert_property};
use crate::domain::property::PropertyRecord;
use crate::errors::ServerError;
use tracing::{debug, info};

/// Loads `json` into the `properties` table when it is empty.
/// Returns how many records were inserted.
pub fn seed_properties_if_empty(db: &Database, json: &str) -> Result<usize, ServerError> {
    let records: Vec<PropertyRecord> = serde_json::from_str(json)
        .map_err(|e| ServerError::DbError(format!("Invalid seed data: {e}")))?;

    db.with_conn(|conn| {
        let existing = count_properties(conn)?;
        if existing > 0 {
            debug!(existing, "properties already present, skipping seed");
            return Ok(0);
        }

        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        for record in &records {
            insert_property(&tx, record)?;
        }

        tx.commit().map_err(|e| ServerError::DbError(e.to_string()))?;
        info!(count = records.len(), "seeded properties");
        Ok(records.len())
    })
}
