pub mod app;
pub mod dashboard;
pub mod forgot_password;
pub mod login_screen;
pub mod predictions;
pub mod profile;
pub mod signup_screen;
pub mod stat_card;

pub use app::App;
pub use dashboard::DashboardView;
pub use forgot_password::ForgotPasswordScreen;
pub use login_screen::LoginScreen;
pub use predictions::PredictionsView;
pub use profile::ProfileView;
pub use signup_screen::SignupScreen;
pub use stat_card::StatCard;
