//! PostgreSQL statistics collector.
//!
//! Collects cumulative counters from PostgreSQL statistics views:
//! - `pg_stat_database` — per-database transactions and block I/O
//! - `pg_stat_user_tables` / `pg_statio_user_tables` — per-table activity and I/O
//! - `pg_stat_user_indexes` — per-index usage
//! - `pg_stat_statements` — per-query and per-role execution (requires extension)
//! - `pg_stat_slru` — SLRU cache activity (PostgreSQL 13+)
//!
//! All queries go through one connection owned by [`PostgresCollector`]. A view
//! that does not exist on the running server (old version, extension not
//! installed or not preloaded) yields an empty snapshot rather than an error.
//! After a connection-level failure the client is dropped and re-established
//! on the next collection.

mod database;
mod indexes;
mod queries;
mod slru;
mod source;
mod statements;
mod tables;

use std::time::Instant;

use chrono::Utc;
use postgres::error::SqlState;
use postgres::{Client, NoTls, Row};
use tracing::{debug, info, warn};

use super::CollectError;
use crate::model::{CounterRow, Snapshot};

pub use source::{PgSource, SharedCollector};

/// PostgreSQL metrics collector.
///
/// Connects to PostgreSQL using standard environment variables:
/// - PGHOST (default: localhost)
/// - PGPORT (default: 5432)
/// - PGUSER (default: $USER)
/// - PGPASSWORD (default: empty)
/// - PGDATABASE (default: same as PGUSER)
pub struct PostgresCollector {
    connection_string: String,
    client: Option<Client>,
    last_error: Option<String>,
    server_version_num: Option<i32>,
}

impl PostgresCollector {
    /// Creates a new PostgreSQL collector from environment variables.
    ///
    /// Uses $USER as default if PGUSER is not set.
    pub fn from_env() -> Result<Self, CollectError> {
        let user = std::env::var("PGUSER")
            .or_else(|_| std::env::var("USER"))
            .map_err(|_| CollectError::EnvNotSet("PGUSER or USER".to_string()))?;

        let host = std::env::var("PGHOST").unwrap_or_else(|_| "localhost".to_string());
        let port = std::env::var("PGPORT").unwrap_or_else(|_| "5432".to_string());
        let password = std::env::var("PGPASSWORD").unwrap_or_default();
        let database = std::env::var("PGDATABASE").unwrap_or_else(|_| user.clone());

        let connection_string = if password.is_empty() {
            format!(
                "host={} port={} user={} dbname={} application_name=pgdelta",
                host, port, user, database
            )
        } else {
            format!(
                "host={} port={} user={} password={} dbname={} application_name=pgdelta",
                host, port, user, password, database
            )
        };

        Ok(Self::with_connection_string(connection_string))
    }

    /// Creates a collector with an explicit libpq connection string.
    pub fn with_connection_string(connection_string: String) -> Self {
        Self {
            connection_string,
            client: None,
            last_error: None,
            server_version_num: None,
        }
    }

    /// Attempts to connect to PostgreSQL.
    ///
    /// Useful for startup checks before launching the TUI.
    pub fn try_connect(&mut self) -> Result<(), CollectError> {
        self.ensure_connected()
    }

    /// Returns the last error message, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// `server_version_num` of the connected server.
    pub fn server_version_num(&self) -> Option<i32> {
        self.server_version_num
    }

    /// Ensures the connection is established, reconnecting if needed.
    fn ensure_connected(&mut self) -> Result<(), CollectError> {
        if self.client.is_some() {
            return Ok(());
        }

        match Client::connect(&self.connection_string, NoTls) {
            Ok(mut client) => {
                // Determine server version once per (re)connect.
                self.server_version_num = client
                    .query_one("SHOW server_version_num", &[])
                    .ok()
                    .and_then(|row| row.try_get::<_, String>(0).ok())
                    .and_then(|v| v.parse::<i32>().ok());

                info!(
                    server_version_num = ?self.server_version_num,
                    "connected to PostgreSQL"
                );

                self.client = Some(client);
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                let msg = format_postgres_error(&e);
                self.last_error = Some(msg.clone());
                self.server_version_num = None;
                Err(CollectError::Connection(msg))
            }
        }
    }

    /// Runs `query` and returns its rows.
    ///
    /// A missing view or extension yields `Ok(None)`. A failure on a closed
    /// connection drops the client so the next call reconnects.
    fn query_rows(&mut self, query: &str) -> Result<Option<Vec<Row>>, CollectError> {
        self.ensure_connected()?;
        let client = self
            .client
            .as_mut()
            .ok_or_else(|| CollectError::Connection("not connected".to_string()))?;

        match client.query(query, &[]) {
            Ok(rows) => {
                self.last_error = None;
                Ok(Some(rows))
            }
            Err(e) if is_missing_instrumentation(&e) => {
                debug!(error = %format_postgres_error(&e), "statistics view not available");
                Ok(None)
            }
            Err(e) => {
                let msg = format_postgres_error(&e);
                self.last_error = Some(msg.clone());
                if e.is_closed() || client.is_closed() {
                    warn!(error = %msg, "PostgreSQL connection lost");
                    self.client = None;
                    self.server_version_num = None;
                    return Err(CollectError::Connection(msg));
                }
                Err(CollectError::Query(msg))
            }
        }
    }

    /// Runs `query`, parses each row with `parse`, and stamps the snapshot.
    ///
    /// Rows that fail to parse are skipped.
    fn collect_with<R, F>(
        &mut self,
        view: &str,
        query: &str,
        parse: F,
    ) -> Result<Snapshot<R>, CollectError>
    where
        R: CounterRow,
        F: Fn(&Row) -> Option<R>,
    {
        let started = Instant::now();
        let rows = self.query_rows(query)?.unwrap_or_default();
        let collected_at = Utc::now();

        let parsed: Vec<R> = rows.iter().filter_map(parse).collect();
        if parsed.len() != rows.len() {
            debug!(
                view,
                skipped = rows.len() - parsed.len(),
                "skipped rows that failed to deserialize"
            );
        }
        debug!(
            view,
            rows = parsed.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "collected"
        );

        Ok(Snapshot::new(parsed, collected_at))
    }
}

/// True for errors meaning "this statistics source does not exist here".
fn is_missing_instrumentation(e: &postgres::Error) -> bool {
    e.code().is_some_and(is_missing_instrumentation_code)
}

/// Missing view or function, or an extension installed but not preloaded.
fn is_missing_instrumentation_code(code: &SqlState) -> bool {
    *code == SqlState::UNDEFINED_TABLE
        || *code == SqlState::UNDEFINED_FUNCTION
        || *code == SqlState::OBJECT_NOT_IN_PREREQUISITE_STATE
}

/// Formats PostgreSQL error message for display.
pub(crate) fn format_postgres_error(e: &postgres::Error) -> String {
    if let Some(db_error) = e.as_db_error() {
        format!("{}: {}", db_error.severity(), db_error.message())
    } else {
        let msg = e.to_string();
        if msg.contains("Connection refused") {
            "connection refused".to_string()
        } else if msg.contains("password authentication failed") {
            "password authentication failed".to_string()
        } else if msg.contains("does not exist") {
            msg.split("FATAL:")
                .last()
                .unwrap_or(&msg)
                .trim()
                .to_string()
        } else {
            msg
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_connection_string_is_kept() {
        let c = PostgresCollector::with_connection_string("host=db user=app".to_string());
        assert_eq!(c.connection_string, "host=db user=app");
        assert!(c.last_error().is_none());
        assert!(c.server_version_num().is_none());
    }

    #[test]
    fn missing_views_and_extensions_are_not_errors() {
        assert!(is_missing_instrumentation_code(&SqlState::UNDEFINED_TABLE));
        assert!(is_missing_instrumentation_code(&SqlState::UNDEFINED_FUNCTION));
        assert!(is_missing_instrumentation_code(
            &SqlState::OBJECT_NOT_IN_PREREQUISITE_STATE
        ));
        assert!(!is_missing_instrumentation_code(&SqlState::SYNTAX_ERROR));
        assert!(!is_missing_instrumentation_code(
            &SqlState::INSUFFICIENT_PRIVILEGE
        ));
    }

    #[test]
    fn connect_failure_is_a_connection_error() {
        // Port 1 on localhost is never a PostgreSQL server.
        let mut c = PostgresCollector::with_connection_string(
            "host=127.0.0.1 port=1 user=nobody connect_timeout=1".to_string(),
        );
        let err = c.try_connect().unwrap_err();
        assert!(err.is_connection());
        assert!(c.last_error().is_some());
    }
}
