pub mod middleware;

use serde::Deserialize;

/// Standard Google API error envelope.
#[derive(Debug, Deserialize)]
pub struct GoogleErrorResponse {
    pub error: GoogleErrorDetails,
}

#[derive(Debug, Deserialize)]
pub struct GoogleErrorDetails {
    pub code: u16,
    pub message: String,
    pub status: Option<String>,
}

/// Extracts the server's error message from a failed response. Falls back to
/// the HTTP status line when the body is not the standard envelope.
pub async fn parse_error_response(response: reqwest::Response, default_msg: &str) -> String {
    let status = response.status();
    match response.json::<GoogleErrorResponse>().await {
        Ok(error_resp) => error_resp.error.message,
        Err(_) => format!("{}: {}", default_msg, status),
    }
}
