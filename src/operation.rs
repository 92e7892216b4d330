//! The closed set of transaction operation types.
//!
//! Codes are one-based: `1..=4` are valid and `0` is reserved as the "unset"
//! value, so a zeroed or defaulted code never names a real operation.

use std::fmt::Display;

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};

use crate::Error;

/// Classifies the economic nature of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// A purchase paid in full.
    CashPurchase = 1,
    /// A purchase paid in instalments.
    InstallmentPurchase = 2,
    /// A cash withdrawal.
    Withdraw = 3,
    /// A payment into the account.
    Payment = 4,
}

impl OperationType {
    /// The code of an operation type that was never set.
    pub const UNSET: i64 = 0;

    const FIRST: i64 = OperationType::CashPurchase as i64;
    const LAST: i64 = OperationType::Payment as i64;

    /// Whether `code` names an operation type.
    pub fn is_valid(code: i64) -> bool {
        (Self::FIRST..=Self::LAST).contains(&code)
    }

    /// The integer code used on the wire and in the database.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// The canonical tag name.
    pub fn name(self) -> &'static str {
        match self {
            OperationType::CashPurchase => "CASH_PURCHASE",
            OperationType::InstallmentPurchase => "INSTALLMENT_PURCHASE",
            OperationType::Withdraw => "WITHDRAW",
            OperationType::Payment => "PAYMENT",
        }
    }
}

impl TryFrom<i64> for OperationType {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(OperationType::CashPurchase),
            2 => Ok(OperationType::InstallmentPurchase),
            3 => Ok(OperationType::Withdraw),
            4 => Ok(OperationType::Payment),
            _ => Err(Error::InvalidOperationType),
        }
    }
}

impl Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl ToSql for OperationType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for OperationType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = value.as_i64()?;

        OperationType::try_from(code).map_err(|_| FromSqlError::OutOfRange(code))
    }
}
