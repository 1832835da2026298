use crate::utils::constants::TOKEN_STORAGE_KEY;
use crate::utils::storage;

/// Session context injected at the application root and handed to every
/// data-access call. The token is read from localStorage at call time, so
/// no caller can hold a stale capture and login/logout take effect on the
/// very next request. No expiry check happens client-side; an invalid
/// token is only discovered when a call fails.
#[derive(Clone, Default, PartialEq)]
pub struct Session;

impl Session {
    pub fn new() -> Self {
        Self
    }

    pub fn token(&self) -> Option<String> {
        storage::get_raw(TOKEN_STORAGE_KEY).filter(|token| !token.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        if let Err(e) = storage::set_raw(TOKEN_STORAGE_KEY, token) {
            log::error!("❌ Failed to persist session token: {}", e);
        }
    }

    pub fn clear(&self) {
        if let Err(e) = storage::remove(TOKEN_STORAGE_KEY) {
            log::error!("❌ Failed to clear session token: {}", e);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
