use async_trait::async_trait;
use gloo::net::http::Request;
use shared::{ApiError, CreateTripRequest, CreateTripResponse, TripsApi};

use crate::services::config::AppConfig;

/// API client for communicating with the trips backend
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client pointed at the configured backend
    pub fn new() -> Self {
        Self::with_base_url(AppConfig::load().api_base_url)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait(?Send)]
impl TripsApi for ApiClient {
    /// `POST /trips`
    async fn create_trip(&self, request: &CreateTripRequest) -> Result<CreateTripResponse, ApiError> {
        let url = self.endpoint("/trips");

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            response
                .json::<CreateTripResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::Status { status, body })
        }
    }
}
