pub mod auth;
pub mod prediction;
pub mod sales;

pub use auth::{
    ApiErrorBody, LoginRequest, LoginResponse, MessageResponse, ResetPasswordRequest,
    SignupRequest, UserProfile,
};
pub use prediction::{FeatureMap, PredictionResponse};
pub use sales::{
    CategoryPerformance, ComprehensiveResponse, DashboardStats, LocationPerformance,
    ProductPerformance, SalesRecord, UploadAck,
};
