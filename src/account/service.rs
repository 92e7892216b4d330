//! Creates and fetches accounts.

use crate::{Error, account::Account, stores::AccountStore};

/// Orchestrates account creation and retrieval on top of an [AccountStore].
#[derive(Debug, Clone)]
pub struct AccountService<A> {
    account_store: A,
}

impl<A> AccountService<A>
where
    A: AccountStore,
{
    /// Create a new service backed by `account_store`.
    pub fn new(account_store: A) -> Self {
        Self { account_store }
    }

    /// Save a new account.
    ///
    /// # Errors
    /// Returns [Error::PersistenceError] if the store fails for any reason.
    pub fn create(&self, account: &Account) -> Result<(), Error> {
        self.account_store.push(account).map_err(|error| {
            tracing::error!("cannot create account {}: {error}", account.id);
            Error::PersistenceError
        })
    }

    /// Get the account with the given `id`.
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::NotFound] if there is no account with `id`,
    /// - or [Error::PersistenceError] if the store fails for any other reason.
    pub fn get(&self, id: &str) -> Result<Account, Error> {
        self.account_store.get(id).map_err(|error| match error {
            Error::NotFound => {
                tracing::info!("account {id} not found");
                Error::NotFound
            }
            error => {
                tracing::error!("cannot get account {id}: {error}");
                Error::PersistenceError
            }
        })
    }
}
