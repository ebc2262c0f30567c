use crate::config::Config;
use crate::models::{
    error::AppError,
    meal::{Meal, MealDraft, Stats},
};
use crate::utils::diagnostics;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

// CONSTANTS
/// Number of meals requested when the caller gives no limit.
pub const DEFAULT_MEALS_LIMIT: u32 = 10;

// API CONFIGURATION
/// Configuration for the diet tracking API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a user's totals for today.
    pub fn stats_url(&self, user_id: &str) -> String {
        format!("{}/api/stats/{user_id}/today", self.base_url)
    }

    /// URL meals are posted to.
    pub fn create_meal_url(&self) -> String {
        format!("{}/api/meals", self.base_url)
    }

    /// URL of a user's most recent meals.
    pub fn meals_url(&self, user_id: &str, limit: Option<u32>) -> String {
        format!(
            "{}/api/meals/{user_id}?limit={}",
            self.base_url,
            limit.unwrap_or(DEFAULT_MEALS_LIMIT)
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self.base_url.unwrap_or_else(|| Config::API_URL.to_string());
        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

// DATA ACCESS
/// The three remote calls the application makes.
///
/// Each call is a single attempt. Failures are logged where they happen and
/// returned to the caller unchanged.
#[async_trait(?Send)]
pub trait NutritionApi {
    /// Today's totals for `user_id`.
    async fn fetch_stats(&self, user_id: &str) -> Result<Stats, AppError>;

    /// Stores a new meal and returns it as the backend recorded it.
    async fn create_meal(&self, draft: &MealDraft) -> Result<Meal, AppError>;

    /// Most recent meals for `user_id`, in backend order. `None` asks for
    /// `DEFAULT_MEALS_LIMIT`.
    async fn fetch_meals(&self, user_id: &str, limit: Option<u32>) -> Result<Vec<Meal>, AppError>;
}

// DIET CLIENT
/// HTTP client for the diet tracking backend.
pub struct DietClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DietClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Checks the status, then decodes the body as `T`.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
        context: &'static str,
    ) -> Result<T, AppError> {
        ensure_success(response.status(), context)?;

        response
            .json()
            .await
            .map_err(|e| AppError::TransportFailed(format!("Failed to parse response: {e}")))
    }
}

#[async_trait(?Send)]
impl NutritionApi for DietClient {
    async fn fetch_stats(&self, user_id: &str) -> Result<Stats, AppError> {
        let result: Result<Stats, AppError> = async {
            let response = self
                .http
                .get(self.config.stats_url(user_id))
                .send()
                .await
                .map_err(classify_error)?;

            Self::read_json(response, "Failed to fetch stats").await
        }
        .await;

        result.inspect_err(|e| diagnostics::error("Error fetching stats", e))
    }

    async fn create_meal(&self, draft: &MealDraft) -> Result<Meal, AppError> {
        let result: Result<Meal, AppError> = async {
            let response = self
                .http
                .post(self.config.create_meal_url())
                .json(draft)
                .send()
                .await
                .map_err(classify_error)?;

            Self::read_json(response, "Failed to create meal").await
        }
        .await;

        result.inspect_err(|e| diagnostics::error("Error creating meal", e))
    }

    async fn fetch_meals(&self, user_id: &str, limit: Option<u32>) -> Result<Vec<Meal>, AppError> {
        let result: Result<Vec<Meal>, AppError> = async {
            let response = self
                .http
                .get(self.config.meals_url(user_id, limit))
                .send()
                .await
                .map_err(classify_error)?;

            Self::read_json(response, "Failed to fetch meals").await
        }
        .await;

        result.inspect_err(|e| diagnostics::error("Error fetching meals", e))
    }
}

/// Any non-2xx status is a failure, whatever the body says.
pub fn ensure_success(status: reqwest::StatusCode, context: &'static str) -> Result<(), AppError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(AppError::RequestFailed {
            context,
            status: status.as_u16(),
        })
    }
}

/// Converts a reqwest error into a transport failure.
fn classify_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::TransportFailed(format!("Request timeout: {error}"))
    } else if error.is_request() {
        AppError::TransportFailed(format!("Request error: {error}"))
    } else {
        AppError::TransportFailed(format!("Network error: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), Config::API_URL.trim_end_matches('/'));
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = ApiConfig::builder().base_url("http://api.test/").build();
        assert_eq!(config.base_url(), "http://api.test");
        assert_eq!(config.create_meal_url(), "http://api.test/api/meals");
    }

    #[test]
    fn test_stats_url_construction() {
        let config = ApiConfig::builder().base_url("http://api.test").build();
        assert_eq!(
            config.stats_url("123"),
            "http://api.test/api/stats/123/today"
        );
    }

    #[test]
    fn test_meals_url_default_limit() {
        let config = ApiConfig::builder().base_url("http://api.test").build();
        assert_eq!(
            config.meals_url("123", None),
            "http://api.test/api/meals/123?limit=10"
        );
        assert_eq!(
            config.meals_url("123", Some(20)),
            "http://api.test/api/meals/123?limit=20"
        );
    }

    #[test]
    fn test_success_statuses_pass() {
        assert!(ensure_success(StatusCode::OK, "Failed to fetch stats").is_ok());
        assert!(ensure_success(StatusCode::CREATED, "Failed to create meal").is_ok());
    }

    #[test]
    fn test_failure_status_carries_code() {
        let err = ensure_success(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create meal")
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "Failed to create meal: 500");

        let err = ensure_success(StatusCode::NOT_FOUND, "Failed to fetch meals").unwrap_err();
        assert_eq!(
            err,
            AppError::RequestFailed {
                context: "Failed to fetch meals",
                status: 404
            }
        );
    }
}
