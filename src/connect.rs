//! SQL Server connection plumbing.

use tiberius::{AuthMethod, Client, Config};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

use crate::error::NullScanError;

/// Type alias for the SQL client
pub type SqlClient = Client<Compat<TcpStream>>;

/// Connection settings for the target server.
///
/// Loaded from the environment (a `.env` file is honored if present), with
/// CLI flags applied on top by the caller.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

impl ConnectionSettings {
    /// Environment variables (with defaults):
    /// - `SQL_SERVER_HOST` (default: localhost)
    /// - `SQL_SERVER_PORT` (default: 1433)
    /// - `SQL_SERVER_USER` (default: sa)
    /// - `SQL_SERVER_PASSWORD` (default: empty)
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self {
            host: std::env::var("SQL_SERVER_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("SQL_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1433),
            user: std::env::var("SQL_SERVER_USER").unwrap_or_else(|_| "sa".to_string()),
            password: std::env::var("SQL_SERVER_PASSWORD").unwrap_or_default(),
        }
    }

    fn to_config(&self) -> Config {
        let mut config = Config::new();
        config.host(&self.host);
        config.port(self.port);
        config.authentication(AuthMethod::sql_server(&self.user, &self.password));
        config.trust_cert();
        config
    }
}

/// Connect to SQL Server
pub async fn connect(settings: &ConnectionSettings) -> Result<SqlClient, NullScanError> {
    let config = settings.to_config();
    let addr = config.get_addr();

    let tcp = TcpStream::connect(&addr)
        .await
        .map_err(|source| NullScanError::ConnectionError {
            addr: addr.clone(),
            source,
        })?;
    tcp.set_nodelay(true)
        .map_err(|source| NullScanError::ConnectionError {
            addr: addr.clone(),
            source,
        })?;

    let client = Client::connect(config, tcp.compat_write()).await?;
    Ok(client)
}
