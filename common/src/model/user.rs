use serde::{Deserialize, Serialize};

/// An authenticated account as returned by `/auth/me`, `/auth/login`, and
/// `/auth/signup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub username: String,
}
