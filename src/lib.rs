//! sql-nullscan: find literal 'NULL' text stored in SQL Server tables
//!
//! A common data-quality defect stores the string 'NULL' where a real SQL
//! NULL was intended. This library enumerates one table's columns from the
//! catalog, folds them into an OR-chained predicate against the literal
//! 'NULL', and executes a `SELECT *` filtered by that predicate.

pub mod catalog;
pub mod connect;
pub mod error;
pub mod identifier;
pub mod output;
pub mod predicate;
pub mod scan;

use anyhow::Result;

pub use connect::ConnectionSettings;
pub use error::NullScanError;
pub use identifier::QualifiedTable;
pub use scan::ScanOutcome;

/// Options for scanning a table
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Fully-qualified `database.schema.table` name
    pub table: String,
    /// Connection settings for the target server
    pub connection: ConnectionSettings,
    /// Enable verbose output
    pub verbose: bool,
}

/// Scan a table for literal 'NULL' text
pub async fn run_scan(options: ScanOptions) -> Result<ScanOutcome> {
    // Step 1: Parse the table identifier
    let table = QualifiedTable::parse(&options.table)?;

    if options.verbose {
        println!("Scanning table: {}", table);
    }

    // Step 2: Connect to the server
    let mut client = connect::connect(&options.connection).await?;

    if options.verbose {
        println!(
            "Connected to {}:{}",
            options.connection.host, options.connection.port
        );
    }

    // Step 3: Enumerate the table's columns
    let columns = catalog::fetch_columns(&mut client, &table).await?;

    if options.verbose {
        println!("Found {} column(s)", columns.len());
    }

    // Step 4: Build the dynamic statement
    let query = predicate::build_scan_query(&table, &columns)?;

    if options.verbose {
        println!("Executing: {}", query);
    }

    // Step 5: Execute it and collect the matching rows
    let outcome = scan::execute_scan(&mut client, &table, columns, query).await?;

    if options.verbose {
        println!("Matched {} row(s)", outcome.rows.len());
    }

    Ok(outcome)
}
