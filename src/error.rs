//! Defines the app level error type and how each kind maps to an HTTP response.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::db::DbError;

/// The errors that may occur in the application.
///
/// Storage failures never reach the client verbatim: the stores translate them
/// into [Error::NotFound] or [Error::PersistenceError] and log the cause.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// Internally, this error occurs when a query returns no rows.
    #[error("entity not found")]
    NotFound,

    /// A transaction referred to an account that does not exist.
    #[error("account not found")]
    AccountNotFound,

    /// The store could not read or write the entity.
    ///
    /// The underlying cause is logged on the server and not sent to the client.
    #[error("persistence failed")]
    PersistenceError,

    /// A transaction amount was negative (or not a number).
    #[error("invalid amount")]
    InvalidAmount,

    /// A transaction operation type code was outside the valid range.
    #[error("invalid operation type")]
    InvalidOperationType,

    /// A request was malformed, e.g. a missing field or an empty identifier.
    #[error("invalid parameter")]
    InvalidParameter,
}

impl From<DbError> for Error {
    fn from(value: DbError) -> Self {
        match value {
            DbError::NotFound => Error::NotFound,
            error => {
                tracing::error!("an unhandled database error occurred: {}", error);
                Error::PersistenceError
            }
        }
    }
}

impl Error {
    /// The HTTP status code for this kind of error.
    ///
    /// [Error::AccountNotFound] shares 422 with [Error::PersistenceError]: the
    /// request was well-formed but could not be applied to the ledger. Fetching
    /// a missing account directly is [Error::NotFound], which is a 404.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::AccountNotFound => StatusCode::UNPROCESSABLE_ENTITY,
            Error::PersistenceError => StatusCode::UNPROCESSABLE_ENTITY,
            Error::InvalidAmount => StatusCode::BAD_REQUEST,
            Error::InvalidOperationType => StatusCode::BAD_REQUEST,
            Error::InvalidParameter => StatusCode::BAD_REQUEST,
        }
    }

    /// Render the error as a JSON response with an endpoint specific `message`.
    pub fn into_json_response(self, message: &str) -> Response {
        (
            self.status_code(),
            Json(ErrorBody {
                message: message.to_owned(),
                reason: Some(self.to_string()),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let message = match self {
            Error::InvalidParameter => "invalid parameters",
            Error::InvalidOperationType => "invalid operation parameter",
            Error::InvalidAmount => "invalid amount parameter",
            Error::NotFound | Error::AccountNotFound => "not found",
            Error::PersistenceError => "could not save changes",
        };

        self.into_json_response(message)
    }
}

/// The JSON body sent with every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// A short description of what the server tried to do.
    pub message: String,
    /// The kind of error, omitted when there is nothing more specific to say.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ErrorBody {
    /// An error body with only a message.
    pub fn message(message: &str) -> Self {
        Self {
            message: message.to_owned(),
            reason: None,
        }
    }
}
