//! HTTP request handlers.
//!
//! Three independent endpoints, each a thin layer over the client modules:
//! a greeting/health check, a fixed Firestore write, and the Naver-to-Firebase
//! token exchange.


use crate::bridge::{self, BridgeError};
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{any, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct MessageDoc {
    message: &'static str,
}

#[derive(Deserialize)]
pub struct TokenRequest {
    pub access_token: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub firebase_token: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/helloWorld", any(hello_world))
        .route("/addData", any(add_data))
        .route("/createFirebaseToken", post(create_firebase_token))
        .with_state(state)
}

async fn hello_world() -> &'static str {
    tracing::info!(structured_data = true, "Hello logs!");
    "Hello from Firebase!"
}

async fn add_data(State(state): State<AppState>) -> impl IntoResponse {
    let db = state.app.firestore();
    let data = MessageDoc {
        message: "Hello, Firestore!",
    };

    match db.collection("messages").add(&data).await {
        Ok(_) => (StatusCode::OK, "Data added successfully!".to_string()),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error adding data: {}", err),
        ),
    }
}

async fn create_firebase_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, (StatusCode, String)> {
    let auth = state.app.auth();

    let firebase_token = bridge::exchange(&state.naver, &auth, &request.access_token)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Token exchange failed");
            let status = match err {
                BridgeError::Provider(_) => StatusCode::BAD_GATEWAY,
                BridgeError::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, err.to_string())
        })?;

    Ok(Json(TokenResponse { firebase_token }))
}
