use anyhow::Context;
use firebase_naver_bridge::config::Config;
use firebase_naver_bridge::naver::NaverClient;
use firebase_naver_bridge::{handlers, AppState, FirebaseApp};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let key = yup_oauth2::read_service_account_key(&config.credentials_path)
        .await
        .with_context(|| {
            format!(
                "failed to read service account key from {}",
                config.credentials_path
            )
        })?;

    tracing::info!(
        project_id = key.project_id.as_deref().unwrap_or("(unknown)"),
        "Starting firebase-naver-bridge"
    );

    let state = AppState {
        app: Arc::new(FirebaseApp::new(key)?),
        naver: NaverClient::new_with_url(config.naver_api_base.clone()),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "Listening");

    axum::serve(listener, handlers::router(state)).await?;
    Ok(())
}
