//! Database connection traits.
//!
//! The SQL execution engine lives behind [`Connection`]: three synchronous
//! operations and nothing else. Backends own pooling, parameter escaping,
//! and row decoding; this crate only assembles statements and interprets
//! results. The trait is object-safe so the registry can hold one shared
//! `Arc<dyn Connection>` for every record type.

use crate::Result;
use crate::row::Row;
use crate::value::Value;

/// The result of executing a statement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecResult {
    /// Number of rows affected by the statement.
    pub rows_affected: u64,
    /// The backend-assigned identity value, when the statement was an
    /// INSERT into a table with an auto-generated key.
    pub last_insert_id: Option<i64>,
}

/// A database connection capable of executing queries.
///
/// Every operation is a synchronous, blocking round trip. Implementations
/// must surface connectivity failures as `Error::Connection` and
/// integrity-constraint failures as `Error::Query` with
/// `QueryErrorKind::Constraint`; callers above propagate both unchanged.
pub trait Connection: Send + Sync {
    /// Execute a statement (INSERT, UPDATE, DELETE) and return the
    /// execution result, including the last insert id when applicable.
    fn execute(&self, sql: &str, params: &[Value]) -> Result<ExecResult>;

    /// Execute a query and return the first row, if any.
    fn get(&self, sql: &str, params: &[Value]) -> Result<Option<Row>>;

    /// Execute a query and return all rows in backend order.
    fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>>;
}

/// Connection parameters for the hosting application's bootstrap call.
///
/// Backends consume this when building the connection that gets registered.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Database server host
    pub host: String,
    /// Database name
    pub database: String,
    /// User name
    pub user: Option<String>,
    /// Password
    pub password: Option<String>,
}

impl ConnectionConfig {
    /// Create a new connection config for a host and database.
    pub fn new(host: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            database: database.into(),
            user: None,
            password: None,
        }
    }

    /// Set the user name.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}
