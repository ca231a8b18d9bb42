//! Error handling utilities for the Postgres store

use board_core::error::StoreError;
use sqlx::Error as SqlxError;

/// Convert a SQLx error to StoreError
///
/// Constraint violations become [`StoreError::Constraint`]; everything else
/// (connectivity, query, decode failures) is [`StoreError::Unavailable`].
pub fn map_db_error(e: SqlxError) -> StoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation()
            || db_err.is_foreign_key_violation()
            || db_err.is_check_violation()
        {
            return StoreError::Constraint(db_err.to_string());
        }
    }
    StoreError::Unavailable(e.to_string())
}
