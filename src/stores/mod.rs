pub mod auth_store;
pub mod dashboard_store;
pub mod fence;

pub use auth_store::AuthStore;
pub use dashboard_store::DashboardStore;
pub use fence::RequestFence;
