//! Catalog metadata queries against the INFORMATION_SCHEMA views.

use tiberius::Row;

use crate::connect::SqlClient;
use crate::error::NullScanError;
use crate::identifier::QualifiedTable;

/// Enumerates the table's column names in catalog enumeration order
/// (`ORDINAL_POSITION`).
///
/// An empty result is disambiguated with a second probe of the TABLES view:
/// a missing table and a column-less table are distinct errors.
pub async fn fetch_columns(
    client: &mut SqlClient,
    table: &QualifiedTable,
) -> Result<Vec<String>, NullScanError> {
    let query = format!(
        "SELECT COLUMN_NAME FROM {} WHERE TABLE_SCHEMA = @P1 AND TABLE_NAME = @P2 ORDER BY ORDINAL_POSITION",
        table.columns_view()
    );
    let stream = client.query(&query, &[&table.schema, &table.table]).await?;
    let rows: Vec<Row> = stream.into_first_result().await?;

    let columns: Vec<String> = rows
        .iter()
        .filter_map(|r| r.get::<&str, _>(0).map(|s| s.to_string()))
        .collect();

    if columns.is_empty() {
        if table_exists(client, table).await? {
            return Err(NullScanError::TableHasNoColumns {
                table: table.qualified_name(),
            });
        }
        return Err(NullScanError::TableNotFound {
            table: table.qualified_name(),
        });
    }

    Ok(columns)
}

/// Checks the TABLES catalog view for the table's existence.
pub async fn table_exists(
    client: &mut SqlClient,
    table: &QualifiedTable,
) -> Result<bool, NullScanError> {
    let query = format!(
        "SELECT COUNT(*) FROM {} WHERE TABLE_SCHEMA = @P1 AND TABLE_NAME = @P2",
        table.tables_view()
    );
    let row = client
        .query(&query, &[&table.schema, &table.table])
        .await?
        .into_row()
        .await?;
    Ok(row.and_then(|r| r.get::<i32, _>(0)).unwrap_or(0) > 0)
}
