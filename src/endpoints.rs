//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/v1/accounts/{account_id}', use [format_endpoint].

/// The route to create accounts.
pub const ACCOUNTS: &str = "/api/v1/accounts";
/// The account route with an empty account ID, which is rejected as a bad request.
pub const ACCOUNTS_TRAILING_SLASH: &str = "/api/v1/accounts/";
/// The route to get a single account.
pub const ACCOUNT: &str = "/api/v1/accounts/{account_id}";
/// The route to create transactions.
pub const TRANSACTIONS: &str = "/api/v1/transactions";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/accounts/{account_id}', '{account_id}' is the parameter.
///
/// This function assumes that an endpoint path contains a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
