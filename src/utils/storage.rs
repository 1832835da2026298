use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Raw string read; used for the bearer token, which is stored as-is.
pub fn get_raw(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn set_raw(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Failed to write to localStorage".to_string())
}

pub fn remove(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .remove_item(key)
        .map_err(|_| "Failed to remove from localStorage".to_string())
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))?;
    set_raw(key, &json)
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = get_raw(key)?;
    serde_json::from_str(&json).ok()
}
