//! Dynamic statement execution and row collection.

use tiberius::{ColumnData, Row};

use crate::connect::SqlClient;
use crate::error::NullScanError;
use crate::identifier::QualifiedTable;

/// Placeholder for a true SQL NULL in rendered output, kept distinct from
/// the literal 'NULL' text the scan hunts for.
pub const SQL_NULL_DISPLAY: &str = "<null>";

/// The collected result set of one scan.
#[derive(Debug)]
pub struct ScanOutcome {
    /// The scanned table, rendered as `[db].[schema].[table]`
    pub table: String,
    /// Column names inspected, in catalog enumeration order
    pub columns: Vec<String>,
    /// The generated dynamic statement
    pub query: String,
    /// Matching rows, each cell rendered to text
    pub rows: Vec<Vec<String>>,
}

/// Execute the generated statement and collect every matching row.
pub async fn execute_scan(
    client: &mut SqlClient,
    table: &QualifiedTable,
    columns: Vec<String>,
    query: String,
) -> Result<ScanOutcome, NullScanError> {
    let stream = client.simple_query(&query).await?;
    let result_rows: Vec<Row> = stream.into_first_result().await?;

    let rows = result_rows
        .into_iter()
        .map(|row| row.into_iter().map(|cell| render_cell(&cell)).collect())
        .collect();

    Ok(ScanOutcome {
        table: table.qualified_name(),
        columns,
        query,
        rows,
    })
}

/// Render one wire-level cell value to text.
///
/// Covers the common scalar types explicitly; exotic types (XML, the
/// date/time family) fall back to their debug representation.
pub fn render_cell(data: &ColumnData<'_>) -> String {
    match data {
        ColumnData::U8(v) => opt_display(v),
        ColumnData::I16(v) => opt_display(v),
        ColumnData::I32(v) => opt_display(v),
        ColumnData::I64(v) => opt_display(v),
        ColumnData::F32(v) => opt_display(v),
        ColumnData::F64(v) => opt_display(v),
        ColumnData::Bit(v) => opt_display(v),
        ColumnData::String(v) => opt_display(v),
        ColumnData::Guid(v) => opt_display(v),
        ColumnData::Numeric(v) => opt_display(v),
        ColumnData::Binary(Some(bytes)) => format!("0x{}", hex::encode_upper(bytes)),
        ColumnData::Binary(None) => SQL_NULL_DISPLAY.to_string(),
        other => format!("{:?}", other),
    }
}

fn opt_display<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => SQL_NULL_DISPLAY.to_string(),
    }
}
