//! Firebase Auth custom tokens.
//!
//! Custom tokens are minted locally: an RS256 JWT signed with the service
//! account private key, which Firebase client SDKs exchange for an ID token
//! via `signInWithCustomToken`. No network call is involved.


use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use thiserror::Error;
use yup_oauth2::ServiceAccountKey;

/// Audience required by the Identity Toolkit for custom tokens.
pub const FIREBASE_AUDIENCE: &str =
    "https://identitytoolkit.googleapis.com/google.identity.identitytoolkit.v1.IdentityToolkit";

const TOKEN_LIFETIME_SECS: i64 = 3600;

// Claims the Identity Toolkit rejects as developer claims.
const RESERVED_CLAIMS: &[&str] = &[
    "acr", "amr", "at_hash", "aud", "auth_time", "azp", "cnf", "c_hash", "exp", "iat", "iss",
    "jti", "nbf", "nonce", "sub", "firebase",
];

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid uid: {0}")]
    InvalidUid(String),
    #[error("Claim \"{0}\" is reserved and cannot be used")]
    ReservedClaim(String),
    #[error("JWT signing error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct CustomTokenClaims {
    iss: String,
    sub: String,
    aud: &'static str,
    iat: i64,
    exp: i64,
    uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    claims: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Mints Firebase custom tokens from a service account key.
#[derive(Clone)]
pub struct FirebaseAuth {
    key: ServiceAccountKey,
}

impl FirebaseAuth {
    pub fn new(key: ServiceAccountKey) -> Self {
        Self { key }
    }

    /// Creates a signed custom token asserting `uid`, with `developer_claims`
    /// embedded under the `claims` field.
    ///
    /// `developer_claims` must serialize to a JSON object; pass `&()` for no
    /// extra claims.
    pub fn create_custom_token<T: Serialize>(
        &self,
        uid: &str,
        developer_claims: &T,
    ) -> Result<String, AuthError> {
        if uid.is_empty() || uid.len() > 128 {
            return Err(AuthError::InvalidUid(
                "uid must be between 1 and 128 characters".to_string(),
            ));
        }

        let claims = match serde_json::to_value(developer_claims)? {
            serde_json::Value::Object(map) => {
                if let Some(reserved) = map.keys().find(|k| RESERVED_CLAIMS.contains(&k.as_str()))
                {
                    return Err(AuthError::ReservedClaim(reserved.clone()));
                }
                if map.is_empty() {
                    None
                } else {
                    Some(map)
                }
            }
            serde_json::Value::Null => None,
            other => {
                return Err(AuthError::SerializationError(serde::ser::Error::custom(
                    format!("developer claims must be a JSON object, got {}", other),
                )))
            }
        };

        let iat = Utc::now().timestamp();
        let token_claims = CustomTokenClaims {
            iss: self.key.client_email.clone(),
            sub: self.key.client_email.clone(),
            aud: FIREBASE_AUDIENCE,
            iat,
            exp: iat + TOKEN_LIFETIME_SECS,
            uid: uid.to_string(),
            claims,
        };

        let encoding_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())?;
        let token = encode(
            &Header::new(Algorithm::RS256),
            &token_claims,
            &encoding_key,
        )?;
        Ok(token)
    }
}
