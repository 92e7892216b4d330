//! Ledger accounts: the domain type, the service and the HTTP endpoints.
mod core;
mod create_endpoint;
mod get_endpoint;
mod service;

pub use core::{Account, AccountId, generate_account_id};
pub use create_endpoint::{CreateAccountRequest, create_account_endpoint};
pub use get_endpoint::get_account_endpoint;
pub use service::AccountService;
