//! Defines the endpoint for recording a transaction against an account.
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    app_state::TransactionState,
    stores::{AccountStore, TransactionStore},
};

/// The JSON body for creating a transaction.
///
/// The operation type is kept as its raw code so that an out of range value
/// is reported as an invalid operation type rather than a malformed body.
#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    /// The account to record the transaction against.
    pub account_id: String,
    /// The [OperationType](crate::operation::OperationType) code.
    pub operation_type: i64,
    /// The non-negative amount.
    pub amount: f64,
}

#[derive(Debug, Serialize)]
struct TransactionCreated {
    success: &'static str,
}

/// A route handler for creating a new transaction.
pub async fn create_transaction_endpoint<A, T>(
    State(state): State<TransactionState<A, T>>,
    payload: Result<Json<TransactionRequest>, JsonRejection>,
) -> Response
where
    A: AccountStore + Send + Sync,
    T: TransactionStore + Send + Sync,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::error!("cannot parse transaction request: {rejection}");
            return Error::InvalidParameter.into_response();
        }
    };

    match state.transaction_service.create(
        &request.account_id,
        request.operation_type,
        request.amount,
    ) {
        Ok(_) => (
            StatusCode::CREATED,
            Json(TransactionCreated { success: "created" }),
        )
            .into_response(),
        Err(
            error @ (Error::AccountNotFound | Error::PersistenceError | Error::NotFound),
        ) => error.into_json_response("failed create transaction"),
        Err(error) => error.into_response(),
    }
}
