//! Contains traits and implementations for objects that store accounts and transactions.

mod account;
mod transaction;

pub mod sqlite;

pub use account::AccountStore;
pub use transaction::TransactionStore;
