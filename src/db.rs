/*! Executes statements against the application's database and sets up its schema. */

use std::{
    path::Path,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use rusqlite::{Connection, Params, Row};

use crate::stores::sqlite::{SQLiteAccountStore, SQLiteTransactionStore};

/// Errors originating from operations on the app's database.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DbError {
    /// The statement returned or affected zero rows.
    #[error("no rows returned or affected")]
    NotFound,
    /// The lock on the shared connection was poisoned by a panicking thread.
    #[error("could not acquire the database lock")]
    DatabaseLock,
    /// Wrapper for SQLite errors not handled by the other variants.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for DbError {
    fn from(error: rusqlite::Error) -> Self {
        match error {
            rusqlite::Error::QueryReturnedNoRows => DbError::NotFound,
            error => DbError::SqlError(error),
        }
    }
}

/// Runs parameterized statements on a shared connection.
///
/// "Zero rows" is reported as [DbError::NotFound] rather than as a successful
/// empty result, for both reads and writes.
#[derive(Debug, Clone)]
pub struct Gateway {
    connection: Arc<Mutex<Connection>>,
}

impl Gateway {
    /// Create a gateway for the shared SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    /// Run a query that returns a single row and convert it with `map_row`.
    ///
    /// # Errors
    /// Returns a:
    /// - [DbError::NotFound] if the query returned no rows,
    /// - [DbError::DatabaseLock] if the connection lock is poisoned,
    /// - or [DbError::SqlError] for any other SQL error.
    pub fn fetch_one<T, P, F>(&self, statement: &str, params: P, map_row: F) -> Result<T, DbError>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> Result<T, rusqlite::Error>,
    {
        let connection = self
            .connection
            .lock()
            .map_err(|_| DbError::DatabaseLock)?;

        let value = connection.prepare(statement)?.query_row(params, map_row)?;

        Ok(value)
    }

    /// Run a statement that modifies rows and return how many were affected.
    ///
    /// # Errors
    /// Returns a:
    /// - [DbError::NotFound] if no rows were affected,
    /// - [DbError::DatabaseLock] if the connection lock is poisoned,
    /// - or [DbError::SqlError] for any other SQL error.
    pub fn execute<P>(&self, statement: &str, params: P) -> Result<usize, DbError>
    where
        P: Params,
    {
        let connection = self
            .connection
            .lock()
            .map_err(|_| DbError::DatabaseLock)?;

        match connection.execute(statement, params)? {
            0 => Err(DbError::NotFound),
            rows_affected => Ok(rows_affected),
        }
    }
}

/// A trait for adding an object schema to a database.
pub trait CreateTable {
    /// Create a table for the model if it does not already exist.
    ///
    /// # Errors
    /// Returns an error if there is an SQL error.
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error>;
}

/// Create the tables for the domain models.
///
/// Foreign keys are switched on so that a transaction can never reference an
/// account that does not exist, even if the account check in the service and
/// the insert race.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.pragma_update(None, "foreign_keys", "ON")?;

    SQLiteAccountStore::create_table(connection)?;
    SQLiteTransactionStore::create_table(connection)?;

    Ok(())
}

/// How long to keep trying to reach the database at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectRetry {
    /// Give up once this much time has passed since the first attempt.
    pub window: Duration,
    /// Wait this long between attempts.
    pub backoff: Duration,
}

impl Default for ConnectRetry {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(5),
            backoff: Duration::from_secs(1),
        }
    }
}

/// Open the database at `path` and check that it answers a trivial query.
///
/// Failed attempts are retried every `retry.backoff` until `retry.window` has
/// elapsed. This is only meant for startup; request handling assumes the
/// connection is already established.
///
/// # Errors
/// Returns the error from the last attempt if the database could not be
/// reached within the window.
pub async fn connect(path: &Path, retry: ConnectRetry) -> Result<Connection, rusqlite::Error> {
    let start = Instant::now();

    loop {
        match open_and_ping(path) {
            Ok(connection) => return Ok(connection),
            Err(error) if start.elapsed() + retry.backoff < retry.window => {
                tracing::warn!("could not connect to database at {path:?}, retrying: {error}");
                tokio::time::sleep(retry.backoff).await;
            }
            Err(error) => {
                tracing::error!("could not connect to database at {path:?}: {error}");
                return Err(error);
            }
        }
    }
}

fn open_and_ping(path: &Path) -> Result<Connection, rusqlite::Error> {
    let connection = Connection::open(path)?;
    connection.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;

    Ok(connection)
}

#[cfg(test)]
mod gateway_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use super::{DbError, Gateway};

    fn get_gateway() -> Gateway {
        let connection = Connection::open_in_memory().unwrap();
        connection
            .execute(
                "CREATE TABLE foo (id INTEGER PRIMARY KEY, name TEXT NOT NULL)",
                (),
            )
            .unwrap();

        Gateway::new(Arc::new(Mutex::new(connection)))
    }

    #[test]
    fn fetch_one_returns_row() {
        let gateway = get_gateway();
        gateway
            .execute("INSERT INTO foo (id, name) VALUES (?1, ?2)", (1, "bar"))
            .unwrap();

        let name: String = gateway
            .fetch_one("SELECT name FROM foo WHERE id = ?1", (1,), |row| row.get(0))
            .unwrap();

        assert_eq!(name, "bar");
    }

    #[test]
    fn fetch_one_reports_no_rows_as_not_found() {
        let gateway = get_gateway();

        let result: Result<String, DbError> =
            gateway.fetch_one("SELECT name FROM foo WHERE id = ?1", (42,), |row| row.get(0));

        assert_eq!(result, Err(DbError::NotFound));
    }

    #[test]
    fn execute_returns_rows_affected() {
        let gateway = get_gateway();

        let rows = gateway.execute("INSERT INTO foo (name) VALUES (?1)", ("bar",));

        assert_eq!(rows, Ok(1));
    }

    #[test]
    fn execute_reports_zero_rows_affected_as_not_found() {
        let gateway = get_gateway();

        let rows = gateway.execute("UPDATE foo SET name = ?1 WHERE id = ?2", ("baz", 42));

        assert_eq!(rows, Err(DbError::NotFound));
    }

    #[test]
    fn execute_reports_other_failures_as_sql_errors() {
        let gateway = get_gateway();

        let result = gateway.execute("INSERT INTO missing_table (name) VALUES (?1)", ("bar",));

        assert!(
            matches!(result, Err(DbError::SqlError(_))),
            "want SqlError, got {result:?}"
        );
    }
}
