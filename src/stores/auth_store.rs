use crate::models::UserProfile;
use serde::{Deserialize, Serialize};

/// Authentication view state. The token itself lives behind the `Session`
/// context; this store only mirrors what the screens need to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AuthStore {
    pub is_logged_in: bool,
    pub profile: Option<UserProfile>,
    /// Inline error shown next to the form that triggered it.
    pub error: Option<String>,
    /// Confirmation text after signup / password reset.
    pub notice: Option<String>,
    pub busy: bool,
}

impl AuthStore {
    pub fn logged_in() -> Self {
        Self {
            is_logged_in: true,
            ..Self::default()
        }
    }

    pub fn logged_out() -> Self {
        Self::default()
    }
}
