//! Common test utilities for sql-nullscan tests

use std::sync::LazyLock;

use sql_nullscan::connect::{self, SqlClient};
use sql_nullscan::ConnectionSettings;

/// Connection settings loaded once from the environment
pub static SETTINGS: LazyLock<ConnectionSettings> = LazyLock::new(ConnectionSettings::from_env);

/// Database used for scratch tables created by the live tests
pub const TEST_DATABASE: &str = "NullScan_Test";

/// Connect to SQL Server using the shared test settings
pub async fn connect() -> SqlClient {
    connect::connect(&SETTINGS)
        .await
        .expect("Should connect to SQL Server")
}

/// Execute a statement that returns no rows
pub async fn exec(client: &mut SqlClient, sql: &str) {
    client
        .execute(sql, &[])
        .await
        .unwrap_or_else(|e| panic!("Statement should succeed: {}\n{}", sql, e));
}

/// Create the scratch database if it does not exist
pub async fn ensure_test_database(client: &mut SqlClient) {
    let sql = format!(
        "IF DB_ID('{0}') IS NULL CREATE DATABASE [{0}]",
        TEST_DATABASE
    );
    exec(client, &sql).await;
}

/// Drop and recreate a scratch table inside the test database
pub async fn recreate_table(client: &mut SqlClient, table: &str, definition: &str) {
    let drop = format!("DROP TABLE IF EXISTS [{}].[dbo].[{}]", TEST_DATABASE, table);
    exec(client, &drop).await;
    let create = format!(
        "CREATE TABLE [{}].[dbo].[{}] {}",
        TEST_DATABASE, table, definition
    );
    exec(client, &create).await;
}

/// Drop a scratch table
pub async fn drop_table(client: &mut SqlClient, table: &str) {
    let drop = format!("DROP TABLE IF EXISTS [{}].[dbo].[{}]", TEST_DATABASE, table);
    exec(client, &drop).await;
}
