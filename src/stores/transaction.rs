//! Defines the transaction store trait.

use crate::{
    Error,
    transaction::{NewTransaction, Transaction},
};

/// Handles the creation of transactions.
pub trait TransactionStore {
    /// Insert a new transaction into the store.
    ///
    /// The store assigns the event date from its own clock and returns the
    /// stored transaction.
    fn push(&self, transaction: &NewTransaction) -> Result<Transaction, Error>;
}
