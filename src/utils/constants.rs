/// Backend origin, fixed at compile time:
/// - Development: http://localhost:8000 (default)
/// - Production: via BACKEND_URL env var (forwarded by build.rs from .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// localStorage key holding the opaque bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Upload strategy selector: "local" parses the CSV in the browser,
/// "remote" posts the raw file to the ingestion endpoint.
pub const UPLOAD_MODE: &str = match option_env!("UPLOAD_MODE") {
    Some(mode) => mode,
    None => "local",
};
