//! Defines the endpoint for fetching a single account.
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};

use crate::{Error, app_state::AccountState, stores::AccountStore};

/// A route handler that responds with the account identified in the path.
///
/// A missing or blank account ID is a bad request rather than a lookup.
pub async fn get_account_endpoint<A>(
    State(state): State<AccountState<A>>,
    account_id: Result<Path<String>, PathRejection>,
) -> Response
where
    A: AccountStore + Send + Sync,
{
    let account_id = match account_id {
        Ok(Path(account_id)) if !account_id.trim().is_empty() => account_id,
        Ok(_) => return Error::InvalidParameter.into_response(),
        Err(rejection) => {
            tracing::error!("cannot get account ID from path: {rejection}");
            return Error::InvalidParameter.into_response();
        }
    };

    match state.account_service.get(&account_id) {
        Ok(account) => Json(account).into_response(),
        Err(error) => error.into_json_response("failed get account"),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::{
        Error,
        endpoints::{self, format_endpoint},
        test_utils::{
            MockAccountStore, MockTransactionStore, assert_error_body, assert_status,
            get_test_server, get_test_server_with,
        },
    };

    #[tokio::test]
    async fn can_get_created_account() {
        let (server, _) = get_test_server();
        let created = server
            .post(endpoints::ACCOUNTS)
            .json(&json!({"document_number": "D1"}))
            .await
            .json::<Value>();
        let id = created["id"].as_str().expect("want id to be a string");

        let response = server
            .get(&format_endpoint(endpoints::ACCOUNT, id))
            .await;

        assert_status(&response, StatusCode::OK);
        assert_eq!(
            response.json::<Value>(),
            json!({"id": id, "document_number": "D1"})
        );
    }

    #[tokio::test]
    async fn unknown_account_is_not_found() {
        let (server, _) = get_test_server();

        let response = server
            .get(&format_endpoint(endpoints::ACCOUNT, "no-such-account"))
            .expect_failure()
            .await;

        assert_status(&response, StatusCode::NOT_FOUND);
        assert_error_body(&response, "failed get account", "entity not found");
    }

    #[tokio::test]
    async fn empty_account_id_is_bad_request() {
        let (server, _) = get_test_server();

        let response = server
            .get(endpoints::ACCOUNTS_TRAILING_SLASH)
            .expect_failure()
            .await;

        assert_status(&response, StatusCode::BAD_REQUEST);
        assert_error_body(&response, "invalid parameters", "invalid parameter");
    }

    #[tokio::test]
    async fn blank_account_id_is_bad_request() {
        let (server, _) = get_test_server();

        let response = server
            .get(&format_endpoint(endpoints::ACCOUNT, "%20"))
            .expect_failure()
            .await;

        assert_status(&response, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn persistence_failure_is_unprocessable() {
        let server = get_test_server_with(
            MockAccountStore::failing_with(Error::PersistenceError),
            MockTransactionStore::new(),
        );

        let response = server
            .get(&format_endpoint(endpoints::ACCOUNT, "any-id"))
            .expect_failure()
            .await;

        assert_status(&response, StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_body(&response, "failed get account", "persistence failed");
    }
}
