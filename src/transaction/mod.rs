//! Ledger transactions: the domain types, the service and the HTTP endpoint.
mod core;
mod create_endpoint;
mod service;

pub use core::{NewTransaction, Transaction, TransactionId};
pub use create_endpoint::{TransactionRequest, create_transaction_endpoint};
pub use service::TransactionService;
