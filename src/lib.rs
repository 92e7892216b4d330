//! A ledger REST API that records transactions against accounts.
//!
//! Accounts are created with a holder's document number and identified by a
//! generated ID. Transactions carry an [OperationType] and a non-negative
//! amount, and may only be recorded against an existing account.
//!
//! The library provides the HTTP router ([build_router]), the services and
//! stores behind it, and the SQLite backend ([stores::sqlite]).

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod account;
mod app_state;
mod config;
pub mod db;
mod endpoints;
mod error;
mod logging;
mod operation;
mod routing;
pub mod stores;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use account::{Account, AccountId, AccountService, CreateAccountRequest};
pub use app_state::{AccountState, AppState, TransactionState};
pub use config::Config;
pub use error::{Error, ErrorBody};
pub use logging::{LOG_BODY_LENGTH_LIMIT, add_tracing_layer, logging_middleware};
pub use operation::OperationType;
pub use routing::build_router;
pub use transaction::{
    NewTransaction, Transaction, TransactionId, TransactionRequest, TransactionService,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
