//! Contains convenience type alias and function for [AppState] that uses
//! the SQLite backend.

mod account;
mod transaction;

pub use account::SQLiteAccountStore;
pub use transaction::SQLiteTransactionStore;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{AppState, db::initialize};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteAccountStore, SQLiteTransactionStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models to the database.
///
/// # Errors
/// Returns an error if the tables could not be created.
pub fn create_app_state(db_connection: Connection) -> Result<SQLAppState, rusqlite::Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));
    let account_store = SQLiteAccountStore::new(connection.clone());
    let transaction_store = SQLiteTransactionStore::new(connection);

    Ok(AppState::new(account_store, transaction_store))
}
