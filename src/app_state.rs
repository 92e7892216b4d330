//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::{
    account::AccountService,
    stores::{AccountStore, TransactionStore},
    transaction::TransactionService,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<A, T>
where
    A: AccountStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    /// The store for [accounts](crate::account::Account).
    pub account_store: A,
    /// The store for [transactions](crate::transaction::Transaction).
    pub transaction_store: T,
}

impl<A, T> AppState<A, T>
where
    A: AccountStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(account_store: A, transaction_store: T) -> Self {
        Self {
            account_store,
            transaction_store,
        }
    }
}

/// The state needed to create or get an account.
#[derive(Debug, Clone)]
pub struct AccountState<A>
where
    A: AccountStore + Send + Sync,
{
    /// Creates and fetches accounts.
    pub account_service: AccountService<A>,
}

impl<A, T> FromRef<AppState<A, T>> for AccountState<A>
where
    A: AccountStore + Clone + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    fn from_ref(state: &AppState<A, T>) -> Self {
        Self {
            account_service: AccountService::new(state.account_store.clone()),
        }
    }
}

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct TransactionState<A, T>
where
    A: AccountStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    /// Validates and records transactions.
    pub transaction_service: TransactionService<A, T>,
}

impl<A, T> FromRef<AppState<A, T>> for TransactionState<A, T>
where
    A: AccountStore + Clone + Send + Sync,
    T: TransactionStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<A, T>) -> Self {
        Self {
            transaction_service: TransactionService::new(
                state.account_store.clone(),
                state.transaction_store.clone(),
            ),
        }
    }
}
