//! End-to-end scan tests against a live SQL Server
//!
//! Each test creates a scratch table in the `NullScan_Test` database, seeds
//! it, runs the scan through the public API, and drops the table again.

use sql_nullscan::{run_scan, NullScanError, ScanOptions};

use crate::common;

fn scan_options(table: &str) -> ScanOptions {
    ScanOptions {
        table: table.to_string(),
        connection: common::SETTINGS.clone(),
        verbose: false,
    }
}

fn qualified(table: &str) -> String {
    format!("{}.dbo.{}", common::TEST_DATABASE, table)
}

#[tokio::test]
#[ignore = "Requires SQL Server (configure via .env or environment variables)"]
async fn test_scan_finds_null_literal_rows() {
    let mut client = common::connect().await;
    common::ensure_test_database(&mut client).await;
    common::recreate_table(
        &mut client,
        "Customers",
        "(Id INT NOT NULL, Name NVARCHAR(50) NOT NULL, City NVARCHAR(50) NULL)",
    )
    .await;

    let insert = format!(
        "INSERT INTO [{0}].[dbo].[Customers] (Id, Name, City) VALUES \
         (1, 'Alice', 'Lisbon'), \
         (2, 'Bob', 'NULL'), \
         (3, 'NULL', 'Porto')",
        common::TEST_DATABASE
    );
    common::exec(&mut client, &insert).await;

    let outcome = run_scan(scan_options(&qualified("Customers")))
        .await
        .expect("Scan should succeed");

    assert_eq!(outcome.columns, vec!["Id", "Name", "City"]);
    assert_eq!(outcome.rows.len(), 2, "Rows 2 and 3 store literal 'NULL'");
    assert!(outcome
        .rows
        .iter()
        .all(|row| row.iter().any(|cell| cell == "NULL")));

    common::drop_table(&mut client, "Customers").await;
}

#[tokio::test]
#[ignore = "Requires SQL Server (configure via .env or environment variables)"]
async fn test_scan_clean_table_matches_nothing() {
    let mut client = common::connect().await;
    common::ensure_test_database(&mut client).await;
    common::recreate_table(
        &mut client,
        "CleanOrders",
        "(Id INT NOT NULL, Status NVARCHAR(20) NOT NULL)",
    )
    .await;

    let insert = format!(
        "INSERT INTO [{0}].[dbo].[CleanOrders] (Id, Status) VALUES (1, 'open'), (2, 'closed')",
        common::TEST_DATABASE
    );
    common::exec(&mut client, &insert).await;

    let outcome = run_scan(scan_options(&qualified("CleanOrders")))
        .await
        .expect("Scan should succeed");

    assert!(outcome.rows.is_empty(), "No cell stores literal 'NULL'");

    common::drop_table(&mut client, "CleanOrders").await;
}

#[tokio::test]
#[ignore = "Requires SQL Server (configure via .env or environment variables)"]
async fn test_scan_does_not_match_true_nulls() {
    let mut client = common::connect().await;
    common::ensure_test_database(&mut client).await;
    common::recreate_table(
        &mut client,
        "SparseContacts",
        "(Id INT NOT NULL, Phone NVARCHAR(20) NULL)",
    )
    .await;

    let insert = format!(
        "INSERT INTO [{0}].[dbo].[SparseContacts] (Id, Phone) VALUES (1, NULL), (2, '555-0100')",
        common::TEST_DATABASE
    );
    common::exec(&mut client, &insert).await;

    let outcome = run_scan(scan_options(&qualified("SparseContacts")))
        .await
        .expect("Scan should succeed");

    assert!(
        outcome.rows.is_empty(),
        "A true SQL NULL is not the text defect"
    );

    common::drop_table(&mut client, "SparseContacts").await;
}

#[tokio::test]
#[ignore = "Requires SQL Server (configure via .env or environment variables)"]
async fn test_scan_missing_table_reports_table_not_found() {
    let mut client = common::connect().await;
    common::ensure_test_database(&mut client).await;
    common::drop_table(&mut client, "NoSuchTable").await;

    let err = run_scan(scan_options(&qualified("NoSuchTable")))
        .await
        .expect_err("Scan should fail");

    assert!(matches!(
        err.downcast_ref::<NullScanError>(),
        Some(NullScanError::TableNotFound { .. })
    ));
}

#[tokio::test]
async fn test_scan_invalid_identifier_fails_before_connecting() {
    let err = run_scan(scan_options("not-a-qualified-name"))
        .await
        .expect_err("Scan should fail");

    assert!(matches!(
        err.downcast_ref::<NullScanError>(),
        Some(NullScanError::InvalidTableName { .. })
    ));
}
