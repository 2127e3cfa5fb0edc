use anyhow::Result;
use clap::{Parser, Subcommand};

use sql_nullscan::{output, run_scan, ConnectionSettings, ScanOptions};

#[derive(Parser)]
#[command(name = "sql-nullscan")]
#[command(author, version, about = "Find literal 'NULL' text stored in SQL Server tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan one table for columns storing the text 'NULL' instead of a real NULL
    Scan {
        /// Fully-qualified table name (database.schema.table)
        table: String,

        /// SQL Server host (overrides SQL_SERVER_HOST)
        #[arg(long)]
        server: Option<String>,

        /// SQL Server port (overrides SQL_SERVER_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Login user (overrides SQL_SERVER_USER)
        #[arg(long)]
        user: Option<String>,

        /// Login password (overrides SQL_SERVER_PASSWORD)
        #[arg(long)]
        password: Option<String>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            table,
            server,
            port,
            user,
            password,
            verbose,
        } => {
            let mut connection = ConnectionSettings::from_env();
            if let Some(server) = server {
                connection.host = server;
            }
            if let Some(port) = port {
                connection.port = port;
            }
            if let Some(user) = user {
                connection.user = user;
            }
            if let Some(password) = password {
                connection.password = password;
            }

            let options = ScanOptions {
                table,
                connection,
                verbose,
            };

            let outcome = run_scan(options).await?;
            output::print_report(&outcome);
        }
    }

    Ok(())
}
