//! Middleware for logging requests and responses.

use axum::{
    Router,
    body::Body,
    extract::{MatchedPath, Request},
    http::{request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tower_http::trace::TraceLayer;

use crate::Error;

/// The number of characters of a body that are logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Bodies larger than this are refused rather than buffered for logging.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// JSON fields whose values must never appear in the logs.
const REDACTED_FIELDS: [&str; 1] = ["document_number"];

const REDACTED: &str = "********";

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] characters, it is
/// truncated and logged in full at the `debug` level.
/// Account holder document numbers are redacted from JSON bodies.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("could not read request body: {error}");
            return Error::InvalidParameter.into_response();
        }
    };

    log_request(&parts, &redact(&String::from_utf8_lossy(&body_bytes)));

    let response = next.run(Request::from_parts(parts, Body::from(body_bytes))).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("could not read response body: {error}");
            return Response::from_parts(parts, Body::empty());
        }
    };

    log_response(&parts, &redact(&String::from_utf8_lossy(&body_bytes)));

    Response::from_parts(parts, Body::from(body_bytes))
}

/// Replace the values of [REDACTED_FIELDS] in a JSON object body.
///
/// Anything that is not a JSON object is returned unchanged.
fn redact(body_text: &str) -> String {
    let Ok(Value::Object(mut fields)) = serde_json::from_str::<Value>(body_text) else {
        return body_text.to_owned();
    };

    let mut redacted = false;

    for field_name in REDACTED_FIELDS {
        if let Some(value) = fields.get_mut(field_name) {
            *value = Value::String(REDACTED.to_owned());
            redacted = true;
        }
    }

    if redacted {
        Value::Object(fields).to_string()
    } else {
        body_text.to_owned()
    }
}

/// The first [LOG_BODY_LENGTH_LIMIT] characters of `body`, or `None` if the
/// body is short enough to log in full.
fn truncate(body: &str) -> Option<String> {
    body.char_indices()
        .nth(LOG_BODY_LENGTH_LIMIT)
        .map(|(end, _)| body[..end].to_owned())
}

fn log_request(parts: &request::Parts, body: &str) {
    match truncate(body) {
        Some(truncated) => {
            tracing::info!("Received request: {parts:#?}\nbody: {truncated}...");
            tracing::debug!("Full request body: {body:?}");
        }
        None => tracing::info!("Received request: {parts:#?}\nbody: {body:?}"),
    }
}

fn log_response(parts: &response::Parts, body: &str) {
    match truncate(body) {
        Some(truncated) => {
            tracing::info!("Sending response: {parts:#?}\nbody: {truncated}...");
            tracing::debug!("Full response body: {body:?}");
        }
        None => tracing::info!("Sending response: {parts:#?}\nbody: {body:?}"),
    }
}

/// Wrap `router` so that every request runs inside a `request` span tagged
/// with `service_name`.
pub fn add_tracing_layer(router: Router, service_name: &str) -> Router {
    let service_name = service_name.to_owned();

    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(move |req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!(
                "request",
                service = %service_name,
                %method,
                %uri,
                matched_path
            )
        })
        // Errors are already logged by the handlers.
        .on_failure(());

    router.layer(tracing_layer)
}

#[cfg(test)]
mod redact_tests {
    use serde_json::{Value, json};

    use super::{REDACTED, redact};

    #[test]
    fn redacts_document_number() {
        let body = json!({"document_number": "12345678900"}).to_string();

        let redacted: Value = serde_json::from_str(&redact(&body)).unwrap();

        assert_eq!(redacted, json!({"document_number": REDACTED}));
    }

    #[test]
    fn keeps_other_fields() {
        let body = json!({"id": "abc", "document_number": "12345678900"}).to_string();

        let redacted: Value = serde_json::from_str(&redact(&body)).unwrap();

        assert_eq!(redacted["id"], "abc");
        assert!(!redact(&body).contains("12345678900"));
    }

    #[test]
    fn leaves_bodies_without_document_number_unchanged() {
        let body = r#"{"account_id":"x","operation_type":1,"amount":10.1}"#;

        assert_eq!(redact(body), body);
    }

    #[test]
    fn leaves_non_json_unchanged() {
        assert_eq!(redact("document_number=123"), "document_number=123");
        assert_eq!(redact(""), "");
    }
}
