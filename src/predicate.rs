//! Dynamic predicate and statement construction.

use crate::error::NullScanError;
use crate::identifier::{bracket, QualifiedTable};

/// The text defect the scan hunts for: the string 'NULL' stored where a
/// real SQL NULL was intended.
pub const NULL_LITERAL: &str = "NULL";

/// Folds column names into an OR-chained equality predicate against the
/// literal 'NULL', preserving catalog enumeration order.
///
/// An empty column set is rejected outright: folding zero columns would
/// leave a `WHERE` clause with no condition behind it.
pub fn null_literal_predicate(
    table: &QualifiedTable,
    columns: &[String],
) -> Result<String, NullScanError> {
    if columns.is_empty() {
        return Err(NullScanError::TableHasNoColumns {
            table: table.qualified_name(),
        });
    }

    let clauses: Vec<String> = columns
        .iter()
        .map(|column| format!("{} = '{}'", bracket(column), NULL_LITERAL))
        .collect();

    Ok(clauses.join(" OR "))
}

/// Builds the full dynamic statement: `SELECT *` over the table filtered by
/// the null-literal predicate.
pub fn build_scan_query(
    table: &QualifiedTable,
    columns: &[String],
) -> Result<String, NullScanError> {
    let predicate = null_literal_predicate(table, columns)?;
    Ok(format!(
        "SELECT * FROM {} WHERE {}",
        table.qualified_name(),
        predicate
    ))
}
