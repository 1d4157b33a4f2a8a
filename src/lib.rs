pub mod auth;
pub mod bridge;
pub mod config;
pub mod core;
pub mod firestore;
pub mod handlers;
pub mod naver;

use crate::core::middleware::AuthMiddleware;
use auth::FirebaseAuth;
use firestore::FirebaseFirestore;
use naver::NaverClient;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use std::sync::Arc;
use yup_oauth2::ServiceAccountKey;

/// Process-wide Firebase context: the service account key plus one HTTP
/// client with auth middleware, built at startup and shared by handle across
/// all handlers.
#[derive(Debug)]
pub struct FirebaseApp {
    key: ServiceAccountKey,
    client: ClientWithMiddleware,
    project_id: String,
    firestore_url: Option<String>,
}

impl FirebaseApp {
    /// Fails when the key carries no `project_id`; without one every
    /// Firestore URL would be bogus and only surface as 404s per request.
    pub fn new(key: ServiceAccountKey) -> anyhow::Result<Self> {
        let project_id = key
            .project_id
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| anyhow::anyhow!("service account key is missing project_id"))?;

        let client = ClientBuilder::new(Client::new())
            .with(AuthMiddleware::new(key.clone()))
            .build();

        Ok(Self {
            key,
            client,
            project_id,
            firestore_url: None,
        })
    }

    #[cfg(test)]
    pub(crate) fn new_with_client(
        key: ServiceAccountKey,
        client: ClientWithMiddleware,
        firestore_url: String,
    ) -> Self {
        let project_id = key.project_id.clone().unwrap_or_default();
        Self {
            key,
            client,
            project_id,
            firestore_url: Some(firestore_url),
        }
    }

    pub fn auth(&self) -> FirebaseAuth {
        FirebaseAuth::new(self.key.clone())
    }

    pub fn firestore(&self) -> FirebaseFirestore {
        match &self.firestore_url {
            Some(url) => FirebaseFirestore::new_with_url(self.client.clone(), url.clone()),
            None => FirebaseFirestore::new(self.client.clone(), &self.project_id),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<FirebaseApp>,
    pub naver: NaverClient,
}
