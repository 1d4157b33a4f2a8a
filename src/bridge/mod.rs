//! Naver login → Firebase custom token exchange.
//!
//! The exchange is a plain async function so it can be called directly or
//! wrapped by an HTTP handler. Callers can branch on the error kind: a
//! provider failure (network, non-2xx, malformed envelope) versus a local
//! signing failure.

#[cfg(test)]
mod tests;

use crate::auth::{AuthError, FirebaseAuth};
use crate::naver::{NaverClient, NaverError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error(transparent)]
    Provider(#[from] NaverError),
    #[error("Failed to sign custom token: {0}")]
    Signing(#[from] AuthError),
}

// Developer claims attached to the minted token; absent profile fields are
// omitted rather than baked in as nulls.
#[derive(Serialize)]
struct ProfileClaims {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "profileImage", skip_serializing_if = "Option::is_none")]
    profile_image: Option<String>,
}

/// Exchanges a Naver OAuth access token for a Firebase custom token.
///
/// Fetches the user's Naver profile with the given access token, then mints a
/// custom token whose subject is the Naver profile `id`, carrying `email`,
/// `name` and `profileImage` as custom claims.
pub async fn exchange(
    naver: &NaverClient,
    auth: &FirebaseAuth,
    naver_access_token: &str,
) -> Result<String, BridgeError> {
    let profile = naver.get_profile(naver_access_token).await?;

    let claims = ProfileClaims {
        email: profile.email,
        name: profile.name,
        profile_image: profile.profile_image,
    };

    let token = auth.create_custom_token(&profile.id, &claims)?;
    Ok(token)
}
