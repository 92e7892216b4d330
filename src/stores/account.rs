//! Defines the account store trait.

use crate::{Error, account::Account};

/// Handles the creation and retrieval of accounts.
pub trait AccountStore {
    /// Retrieve the account with `id` from the store.
    ///
    /// Implementers should return [Error::NotFound] when there is no such
    /// account and [Error::PersistenceError] for any other failure.
    fn get(&self, id: &str) -> Result<Account, Error>;

    /// Insert a new account into the store.
    ///
    /// The store records the time of creation itself.
    fn push(&self, account: &Account) -> Result<(), Error>;
}
