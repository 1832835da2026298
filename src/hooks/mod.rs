pub mod use_auth;
pub mod use_dashboard;
pub mod use_predictions;
pub mod use_upload;

pub use use_auth::use_auth;
pub use use_dashboard::use_dashboard;
pub use use_predictions::{use_predictions, PredictionState};
pub use use_upload::use_upload;
