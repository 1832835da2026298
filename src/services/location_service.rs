use serde::{Deserialize, Serialize};

use crate::services::ApiClient;
use crate::utils::storage::{load_from_storage, save_to_storage};

const LOCATIONS_CACHE_KEY: &str = "nexgen_locations";
const LOCATIONS_CACHE_DURATION_HOURS: i64 = 24;

#[derive(Serialize, Deserialize)]
struct LocationsCache {
    locations: Vec<String>,
    timestamp: String,
}

/// Load the location filter options, with a 24h localStorage cache. The
/// list changes rarely, so a stale-within-a-day copy is good enough and
/// saves a round trip on every visit.
pub async fn load_locations(api: &ApiClient) -> Result<Vec<String>, String> {
    if let Some(cache) = load_from_storage::<LocationsCache>(LOCATIONS_CACHE_KEY) {
        if let Ok(cached_at) = chrono::DateTime::parse_from_rfc3339(&cache.timestamp) {
            let age = chrono::Utc::now()
                .signed_duration_since(cached_at.with_timezone(&chrono::Utc));
            if age.num_hours() < LOCATIONS_CACHE_DURATION_HOURS {
                log::info!("📋 Using cached locations ({}h old)", age.num_hours());
                return Ok(cache.locations);
            }
            log::info!("📋 Locations cache expired, fetching fresh list...");
        }
    }

    let locations = api.locations().await?;

    let cache = LocationsCache {
        locations: locations.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };
    if let Err(e) = save_to_storage(LOCATIONS_CACHE_KEY, &cache) {
        log::warn!("⚠️ Could not cache locations: {}", e);
    }

    Ok(locations)
}
