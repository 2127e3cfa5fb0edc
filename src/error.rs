//! Error types for sql-nullscan

use thiserror::Error;

/// Errors that can occur while scanning a table for literal 'NULL' text
#[derive(Error, Debug)]
pub enum NullScanError {
    #[error("Invalid table name '{name}': {message}")]
    InvalidTableName { name: String, message: String },

    #[error("Table not found: {table}")]
    TableNotFound { table: String },

    #[error("Table has no columns: {table}")]
    TableHasNoColumns { table: String },

    #[error("Failed to connect to SQL Server at {addr}")]
    ConnectionError {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("SQL Server error: {message}")]
    SqlError { message: String },
}

impl From<tiberius::error::Error> for NullScanError {
    fn from(err: tiberius::error::Error) -> Self {
        NullScanError::SqlError {
            message: err.to_string(),
        }
    }
}
