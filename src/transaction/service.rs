//! Creates transactions against existing accounts.

use crate::{
    Error,
    stores::{AccountStore, TransactionStore},
    transaction::{NewTransaction, Transaction},
};

/// Validates and records transactions.
///
/// Creating a transaction checks that the account exists and then inserts the
/// transaction. The two steps are not one database transaction; the foreign
/// key on the transaction table is what stops an orphan row if an account
/// disappears in between.
#[derive(Debug, Clone)]
pub struct TransactionService<A, T> {
    account_store: A,
    transaction_store: T,
}

impl<A, T> TransactionService<A, T>
where
    A: AccountStore,
    T: TransactionStore,
{
    /// Create a new service backed by the given stores.
    pub fn new(account_store: A, transaction_store: T) -> Self {
        Self {
            account_store,
            transaction_store,
        }
    }

    /// Validate and store a transaction.
    ///
    /// Nothing is read or written if validation fails, and the insert is
    /// only attempted once the account is known to exist. There are no
    /// retries.
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::InvalidParameter], [Error::InvalidOperationType] or
    ///   [Error::InvalidAmount] if the input is invalid (see [NewTransaction::new]),
    /// - [Error::AccountNotFound] if `account_id` does not refer to an account,
    /// - or [Error::PersistenceError] if either store fails.
    pub fn create(
        &self,
        account_id: &str,
        operation_code: i64,
        amount: f64,
    ) -> Result<Transaction, Error> {
        let new_transaction =
            NewTransaction::new(account_id, operation_code, amount).inspect_err(|error| {
                tracing::info!("rejected transaction for account {account_id}: {error}");
            })?;

        match self.account_store.get(new_transaction.account_id()) {
            Ok(_) => {}
            Err(Error::NotFound) => {
                tracing::error!("account not found: {account_id}");
                return Err(Error::AccountNotFound);
            }
            Err(error) => {
                tracing::error!("could not check account {account_id}: {error}");
                return Err(Error::PersistenceError);
            }
        }

        let transaction = self
            .transaction_store
            .push(&new_transaction)
            .map_err(|error| {
                tracing::error!("cannot create transaction: {error}");
                Error::PersistenceError
            })?;

        tracing::info!(
            "created {} transaction {} for account {}",
            transaction.operation_type,
            transaction.id,
            transaction.account_id
        );

        Ok(transaction)
    }
}
