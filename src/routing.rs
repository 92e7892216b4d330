//! Application router configuration.

use std::any::Any;

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{
    AppState,
    account::{create_account_endpoint, get_account_endpoint},
    endpoints,
    error::ErrorBody,
    logging::logging_middleware,
    stores::{AccountStore, TransactionStore},
    transaction::create_transaction_endpoint,
};

/// Return a router with all the app's routes.
pub fn build_router<A, T>(state: AppState<A, T>) -> Router
where
    A: AccountStore + Clone + Send + Sync + 'static,
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    let router = Router::new()
        .route(endpoints::ACCOUNTS, post(create_account_endpoint::<A>))
        .route(
            endpoints::ACCOUNTS_TRAILING_SLASH,
            get(get_account_endpoint::<A>),
        )
        .route(endpoints::ACCOUNT, get(get_account_endpoint::<A>))
        .route(
            endpoints::TRANSACTIONS,
            post(create_transaction_endpoint::<A, T>),
        )
        .fallback(get_404_not_found)
        .with_state(state);

    add_middleware(router)
}

/// Panics are caught before the logging middleware so that the 500 response
/// is logged like any other.
fn add_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(logging_middleware))
}

async fn get_404_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorBody::message("not found"))).into_response()
}

fn handle_panic(error: Box<dyn Any + Send + 'static>) -> Response {
    let details = error
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| error.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    tracing::error!("request handler panicked: {details}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::message("internal server error")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::StatusCode, routing::get};
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::test_utils::{assert_status, get_test_server};

    use super::add_middleware;

    async fn panicking_handler() -> StatusCode {
        panic!("something went very wrong");
    }

    async fn ok_handler() -> StatusCode {
        StatusCode::OK
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (server, _) = get_test_server();

        let response = server.get("/api/v1/balances").expect_failure().await;

        assert_status(&response, StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>(), json!({"message": "not found"}));
    }

    #[tokio::test]
    async fn panic_becomes_internal_server_error() {
        let app = add_middleware(Router::new().route("/panic", get(panicking_handler)));
        let server = TestServer::new(app).expect("Could not create test server.");

        let response = server.get("/panic").expect_failure().await;

        assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<Value>(),
            json!({"message": "internal server error"})
        );
    }

    #[tokio::test]
    async fn server_keeps_serving_after_panic() {
        let app = add_middleware(
            Router::new()
                .route("/panic", get(panicking_handler))
                .route("/ok", get(ok_handler)),
        );
        let server = TestServer::new(app).expect("Could not create test server.");

        server.get("/panic").expect_failure().await;
        let response = server.get("/ok").await;

        response.assert_status_ok();
    }
}
