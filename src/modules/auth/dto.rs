use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub access_token_expires_in: u64,
    pub user: UserResponse,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub role: String,
}
