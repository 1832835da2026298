use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub new_password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// FastAPI-style error payload: non-2xx responses carry a `detail` message.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
