//! Collection error type.

/// Error returned by a [`SnapshotSource`](super::SnapshotSource).
///
/// A missing statistics view is not an error; sources report it as an
/// empty snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectError {
    /// Environment variable not set.
    EnvNotSet(String),
    /// Connection could not be established or was lost.
    Connection(String),
    /// Query execution failed.
    Query(String),
}

impl CollectError {
    /// True if the connection should be re-established before retrying.
    pub fn is_connection(&self) -> bool {
        matches!(self, CollectError::Connection(_))
    }
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::EnvNotSet(var) => write!(f, "PostgreSQL: {} not set", var),
            CollectError::Connection(msg) => write!(f, "PostgreSQL: {}", msg),
            CollectError::Query(msg) => write!(f, "PostgreSQL query error: {}", msg),
        }
    }
}

impl std::error::Error for CollectError {}
