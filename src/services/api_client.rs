// ============================================================================
// API CLIENT - HTTP communication only, no business logic
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::FormData;

use crate::models::{
    ApiErrorBody, ComprehensiveResponse, FeatureMap, LoginRequest, LoginResponse,
    MessageResponse, PredictionResponse, ResetPasswordRequest, SalesRecord, SignupRequest,
    UploadAck, UserProfile,
};
use crate::services::Session;
use crate::upload::GENERIC_UPLOAD_ERROR;
use crate::utils::constants::BACKEND_URL;

/// Client for the fixed backend origin. Holds the `Session` context so the
/// bearer header is derived from the current token at call time.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
            session,
        }
    }

    /// Attach `Authorization: Bearer <token>` only when a token is stored.
    fn bearer(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// List of location identifiers for the sales-data filter.
    pub async fn locations(&self) -> Result<Vec<String>, String> {
        let url = format!("{}/api/locations/list", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Ordered sales series, optionally narrowed to one location.
    pub async fn sales_data(&self, location: Option<&str>) -> Result<Vec<SalesRecord>, String> {
        let mut url = format!("{}/api/dashboard/sales-data", self.base_url);
        if let Some(location) = location {
            let encoded = String::from(js_sys::encode_uri_component(location));
            url = format!("{}?location={}", url, encoded);
        }

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        response
            .json::<Vec<SalesRecord>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Aggregate dashboard read; every key of the response is optional.
    pub async fn comprehensive(&self) -> Result<ComprehensiveResponse, String> {
        let url = format!("{}/api/dashboard/comprehensive", self.base_url);
        let response = self
            .bearer(Request::get(&url))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(detail_or(response, "Failed to fetch dashboard data").await);
        }
        response
            .json::<ComprehensiveResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, String> {
        let url = format!("{}/api/auth/login", self.base_url);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Logging in: {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .json::<LoginResponse>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(detail_or(response, "Login failed").await)
        }
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<UserProfile, String> {
        let url = format!("{}/api/auth/signup", self.base_url);
        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .json::<UserProfile>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(detail_or(response, "Signup failed").await)
        }
    }

    pub async fn reset_password(
        &self,
        email: &str,
        new_password: &str,
    ) -> Result<MessageResponse, String> {
        let url = format!("{}/api/auth/reset-password", self.base_url);
        let request = ResetPasswordRequest {
            email: email.to_string(),
            new_password: new_password.to_string(),
        };

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .json::<MessageResponse>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(detail_or(response, "Reset failed").await)
        }
    }

    /// Current user profile; resolves to `None` on any failure (including
    /// a 401 for a missing or expired token) instead of an error.
    pub async fn current_user(&self) -> Option<UserProfile> {
        let url = format!("{}/api/auth/me", self.base_url);
        let response = self.bearer(Request::get(&url)).send().await.ok()?;
        if !response.ok() {
            return None;
        }
        response.json::<UserProfile>().await.ok()
    }

    /// Multipart upload of the raw CSV file (remote ingestion strategy).
    pub async fn upload_csv(&self, file: &web_sys::File) -> Result<UploadAck, String> {
        let url = format!("{}/api/upload/csv", self.base_url);

        let form = FormData::new().map_err(|_| "Failed to build form data".to_string())?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| "Failed to attach file".to_string())?;

        log::info!("📤 Uploading CSV: {}", file.name());

        let response = self
            .bearer(Request::post(&url))
            .body(form)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .json::<UploadAck>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(detail_or(response, GENERIC_UPLOAD_ERROR).await)
        }
    }

    pub async fn predict_sales(&self, features: &FeatureMap) -> Result<PredictionResponse, String> {
        self.predict("sales", features).await
    }

    pub async fn predict_stock(&self, features: &FeatureMap) -> Result<PredictionResponse, String> {
        self.predict("stock", features).await
    }

    async fn predict(
        &self,
        model: &str,
        features: &FeatureMap,
    ) -> Result<PredictionResponse, String> {
        let url = format!("{}/api/predict/{}", self.base_url, model);
        let response = Request::post(&url)
            .json(features)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() {
            response
                .json::<PredictionResponse>()
                .await
                .map_err(|e| format!("Parse error: {}", e))
        } else {
            Err(detail_or(response, "Prediction failed").await)
        }
    }
}

/// Message for a non-2xx response: the server's `detail` field when the
/// error payload parses, otherwise the generic fallback.
async fn detail_or(response: Response, fallback: &str) -> String {
    match response.json::<ApiErrorBody>().await {
        Ok(ApiErrorBody {
            detail: Some(detail),
        }) => detail,
        _ => fallback.to_string(),
    }
}
