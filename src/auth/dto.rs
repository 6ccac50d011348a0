use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for both signup and signin.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub login: String,
    pub password: String,
}

/// Response returned after a successful signup or signin.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: Uuid,
}
