use time::OffsetDateTime;

use crate::{Error, account::AccountId, operation::OperationType};

/// Alias for the integer type used for transaction row IDs.
pub type TransactionId = i64;

/// A transaction that has been validated but not yet stored.
///
/// The only way to build one is [NewTransaction::new], so holding a value
/// means the operation type is valid and the amount is non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    account_id: AccountId,
    operation_type: OperationType,
    amount: f64,
}

impl NewTransaction {
    /// Validate the raw parts of a transaction.
    ///
    /// The checks run in this order and stop at the first failure.
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::InvalidParameter] if `account_id` is empty,
    /// - [Error::InvalidOperationType] if `operation_code` is not a valid [OperationType],
    /// - or [Error::InvalidAmount] if `amount` is negative or not a number.
    pub fn new(account_id: &str, operation_code: i64, amount: f64) -> Result<Self, Error> {
        if account_id.trim().is_empty() {
            return Err(Error::InvalidParameter);
        }

        let operation_type = OperationType::try_from(operation_code)?;

        // Written this way so that NaN is rejected too.
        if !(amount >= 0.0) {
            return Err(Error::InvalidAmount);
        }

        Ok(Self {
            account_id: account_id.to_owned(),
            operation_type,
            amount,
        })
    }

    /// The account the transaction is recorded against.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// The kind of operation.
    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    /// The non-negative amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// A stored transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The account the transaction is recorded against.
    pub account_id: AccountId,
    /// The kind of operation.
    pub operation_type: OperationType,
    /// The non-negative amount.
    pub amount: f64,
    /// When the store recorded the transaction.
    pub event_date: OffsetDateTime,
}
