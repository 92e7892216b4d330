//! In-memory stores that record how they were called.
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use time::OffsetDateTime;

use crate::{
    Error,
    account::Account,
    stores::{AccountStore, TransactionStore},
    transaction::{NewTransaction, Transaction},
};

#[derive(Debug, Clone, Default)]
pub(crate) struct MockAccountStore {
    accounts: Arc<Mutex<Vec<Account>>>,
    get_calls: Arc<AtomicUsize>,
    failure: Option<Error>,
}

impl MockAccountStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
            ..Default::default()
        }
    }

    /// Every call to `get` and `push` fails with `error`.
    pub(crate) fn failing_with(error: Error) -> Self {
        Self {
            failure: Some(error),
            ..Default::default()
        }
    }

    pub(crate) fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn pushed(&self) -> Vec<Account> {
        self.accounts.lock().unwrap().clone()
    }
}

impl AccountStore for MockAccountStore {
    fn get(&self, id: &str) -> Result<Account, Error> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|account| account.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn push(&self, account: &Account) -> Result<(), Error> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        self.accounts.lock().unwrap().push(account.clone());

        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MockTransactionStore {
    pushed: Arc<Mutex<Vec<NewTransaction>>>,
    push_calls: Arc<AtomicUsize>,
    failure: Option<Error>,
}

impl MockTransactionStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing_with(error: Error) -> Self {
        Self {
            failure: Some(error),
            ..Default::default()
        }
    }

    pub(crate) fn push_calls(&self) -> usize {
        self.push_calls.load(Ordering::SeqCst)
    }
}

impl TransactionStore for MockTransactionStore {
    fn push(&self, transaction: &NewTransaction) -> Result<Transaction, Error> {
        self.push_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let mut pushed = self.pushed.lock().unwrap();
        pushed.push(transaction.clone());

        Ok(Transaction {
            id: pushed.len() as i64,
            account_id: transaction.account_id().to_owned(),
            operation_type: transaction.operation_type(),
            amount: transaction.amount(),
            event_date: OffsetDateTime::now_utc(),
        })
    }
}
