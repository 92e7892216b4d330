use serde::Serialize;
use uuid::Uuid;

/// The opaque, globally unique identifier of an account.
pub type AccountId = String;

/// Generate a new random account identifier.
pub fn generate_account_id() -> AccountId {
    Uuid::new_v4().to_string()
}

/// An account that transactions are recorded against.
///
/// Accounts are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    /// The id for the account.
    pub id: AccountId,
    /// Identifies the account holder, e.g. a national ID number.
    pub document_number: String,
}

impl Account {
    /// Create an account value from its parts.
    pub fn new(id: AccountId, document_number: &str) -> Self {
        Self {
            id,
            document_number: document_number.to_owned(),
        }
    }
}
