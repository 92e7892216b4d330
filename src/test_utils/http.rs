//! Helpers for end-to-end tests against the full router.
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use rusqlite::Connection;
use serde_json::Value;

use crate::{
    AppState, build_router,
    db::initialize,
    stores::{
        AccountStore, TransactionStore,
        sqlite::{SQLiteAccountStore, SQLiteTransactionStore},
    },
};

/// A server backed by an in-memory database, plus the connection so tests
/// can inspect what was written.
pub(crate) fn get_test_server() -> (TestServer, Arc<Mutex<Connection>>) {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize(&connection).expect("Could not initialize database");
    let connection = Arc::new(Mutex::new(connection));

    let state = AppState::new(
        SQLiteAccountStore::new(connection.clone()),
        SQLiteTransactionStore::new(connection.clone()),
    );

    (get_test_server_with_state(state), connection)
}

pub(crate) fn get_test_server_with<A, T>(account_store: A, transaction_store: T) -> TestServer
where
    A: AccountStore + Clone + Send + Sync + 'static,
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    get_test_server_with_state(AppState::new(account_store, transaction_store))
}

fn get_test_server_with_state<A, T>(state: AppState<A, T>) -> TestServer
where
    A: AccountStore + Clone + Send + Sync + 'static,
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    TestServer::new(build_router(state)).expect("Could not create test server.")
}

#[track_caller]
pub(crate) fn assert_status(response: &TestResponse, want: StatusCode) {
    assert_eq!(
        response.status_code(),
        want,
        "unexpected status, body: {}",
        response.text()
    );
}

#[track_caller]
pub(crate) fn assert_error_body(response: &TestResponse, message: &str, reason: &str) {
    let body = response.json::<Value>();

    assert_eq!(body["message"], message, "body: {body}");
    assert_eq!(body["reason"], reason, "body: {body}");
}
