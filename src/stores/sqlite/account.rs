//! Implements a SQLite backed account store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    account::Account,
    db::{CreateTable, Gateway},
    stores::AccountStore,
};

/// Stores accounts in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteAccountStore {
    gateway: Gateway,
}

impl SQLiteAccountStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self {
            gateway: Gateway::new(connection),
        }
    }

    fn map_row(row: &Row) -> Result<Account, rusqlite::Error> {
        let id = row.get(0)?;
        let document_number = row.get(1)?;

        Ok(Account {
            id,
            document_number,
        })
    }
}

impl AccountStore for SQLiteAccountStore {
    /// Retrieve an account in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid account,
    /// - or [Error::PersistenceError] if there is some other SQL error.
    fn get(&self, id: &str) -> Result<Account, Error> {
        let account = self.gateway.fetch_one(
            "SELECT id, document_number FROM account WHERE id = ?1",
            (id,),
            Self::map_row,
        )?;

        Ok(account)
    }

    /// Insert an account, stamping it with the current time.
    ///
    /// # Errors
    /// This function will return a [Error::PersistenceError] if the insert
    /// failed, e.g. because the id is already taken.
    fn push(&self, account: &Account) -> Result<(), Error> {
        self.gateway.execute(
            "INSERT INTO account (id, document_number, created_at) VALUES (?1, ?2, ?3)",
            (&account.id, &account.document_number, OffsetDateTime::now_utc()),
        )?;

        Ok(())
    }
}

impl CreateTable for SQLiteAccountStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS account (
                id TEXT PRIMARY KEY,
                document_number TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            (),
        )?;

        Ok(())
    }
}
