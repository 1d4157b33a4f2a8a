//! Naver OpenAPI client.
//!
//! Fetches the signed-in user's profile from `GET /v1/nid/me`, authenticating
//! with the caller-supplied OAuth access token. The bearer token here belongs
//! to the end user, not the service account, so this client deliberately
//! bypasses the shared auth middleware.


use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

pub const NAVER_API_BASE: &str = "https://openapi.naver.com";

#[derive(Error, Debug)]
pub enum NaverError {
    /// Transport-level failure reaching the Naver API.
    #[error("Request to Naver API failed: {0}")]
    NetworkError(#[from] reqwest::Error),
    /// Non-2xx response from the Naver API.
    #[error("Naver API returned {status}: {body}")]
    ApiError { status: StatusCode, body: String },
    /// 2xx response whose body is not the expected profile envelope.
    #[error("Malformed Naver profile response: {0}")]
    MalformedResponse(String),
}

/// Profile fields as Naver reports them; none are validated or normalized.
#[derive(Debug, Clone, Deserialize)]
pub struct NaverProfile {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub profile_image: Option<String>,
}

// Naver wraps the profile in a {resultcode, message, response} envelope.
#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
    #[allow(dead_code)]
    resultcode: Option<String>,
    #[allow(dead_code)]
    message: Option<String>,
    response: Option<NaverProfile>,
}

#[derive(Clone)]
pub struct NaverClient {
    client: Client,
    base_url: String,
}

impl NaverClient {
    pub fn new() -> Self {
        Self::new_with_url(NAVER_API_BASE.to_string())
    }

    /// Creates a client with a custom base URL (useful for testing).
    pub fn new_with_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetches the profile of the user the access token belongs to.
    pub async fn get_profile(&self, access_token: &str) -> Result<NaverProfile, NaverError> {
        let url = format!("{}/v1/nid/me", self.base_url);

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", access_token))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(NaverError::ApiError { status, body });
        }

        let envelope: ProfileEnvelope = serde_json::from_str(&body)
            .map_err(|e| NaverError::MalformedResponse(e.to_string()))?;

        envelope.response.ok_or_else(|| {
            NaverError::MalformedResponse("missing \"response\" object".to_string())
        })
    }
}

impl Default for NaverClient {
    fn default() -> Self {
        Self::new()
    }
}
