//! Defines the endpoint for creating a new account.
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    account::{Account, generate_account_id},
    app_state::AccountState,
    stores::AccountStore,
};

/// The JSON body for creating an account.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Identifies the account holder. Must not be empty.
    pub document_number: String,
}

#[derive(Debug, Serialize)]
struct AccountCreated {
    success: &'static str,
    id: String,
}

/// A route handler for creating a new account, responds with the generated ID.
///
/// The account ID is generated here rather than by the store.
pub async fn create_account_endpoint<A>(
    State(state): State<AccountState<A>>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Response
where
    A: AccountStore + Send + Sync,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::error!("cannot parse account request: {rejection}");
            return Error::InvalidParameter.into_response();
        }
    };

    if request.document_number.trim().is_empty() {
        tracing::error!("missing document number");
        return Error::InvalidParameter.into_response();
    }

    let account = Account::new(generate_account_id(), &request.document_number);

    if let Err(error) = state.account_service.create(&account) {
        return error.into_json_response("failed create account");
    }

    tracing::info!("account created {}", account.id);

    (
        StatusCode::CREATED,
        Json(AccountCreated {
            success: "created",
            id: account.id,
        }),
    )
        .into_response()
}
