//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    db::{CreateTable, Gateway},
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction},
};

/// Stores transactions in a SQLite database.
///
/// Note that because a transaction refers to an [Account](crate::account::Account),
/// the account table must be set up in the database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    gateway: Gateway,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self {
            gateway: Gateway::new(connection),
        }
    }

    fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
        Ok(Transaction {
            id: row.get(0)?,
            account_id: row.get(1)?,
            operation_type: row.get(2)?,
            amount: row.get(3)?,
            event_date: row.get(4)?,
        })
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Insert a transaction with the current time as its event date.
    ///
    /// # Errors
    /// This function will return a [Error::PersistenceError] if the insert
    /// failed, including when the account does not exist.
    fn push(&self, transaction: &NewTransaction) -> Result<Transaction, Error> {
        let transaction = self.gateway.fetch_one(
            "INSERT INTO \"transaction\" (account_id, operation_type, amount, event_date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, account_id, operation_type, amount, event_date",
            (
                transaction.account_id(),
                transaction.operation_type(),
                transaction.amount(),
                OffsetDateTime::now_utc(),
            ),
            Self::map_row,
        )?;

        Ok(transaction)
    }
}

impl CreateTable for SQLiteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                account_id TEXT NOT NULL,
                operation_type INTEGER NOT NULL CHECK (operation_type BETWEEN 1 AND 4),
                amount REAL NOT NULL CHECK (amount >= 0),
                event_date TEXT NOT NULL,
                FOREIGN KEY(account_id) REFERENCES account(id) ON UPDATE CASCADE ON DELETE RESTRICT
            )",
            (),
        )?;

        Ok(())
    }
}
