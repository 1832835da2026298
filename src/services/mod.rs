pub mod api_client;
pub mod location_service;
pub mod session;

pub use api_client::ApiClient;
pub use location_service::load_locations;
pub use session::Session;
