use super::*;
use crate::auth::FIREBASE_AUDIENCE;
use crate::test_util::test_service_account_key;
use httpmock::prelude::*;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use serde_json::json;

const TEST_PUBLIC_KEY: &str = include_str!("../../testdata/test_public_key.pem");

#[derive(Debug, Deserialize)]
struct DecodedClaims {
    uid: String,
    claims: Option<serde_json::Map<String, serde_json::Value>>,
}

#[tokio::test]
async fn test_exchange_mints_token_from_profile() {
    let server = MockServer::start();
    let naver = NaverClient::new_with_url(server.base_url());
    let auth = FirebaseAuth::new(test_service_account_key());

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/nid/me")
            .header("authorization", "Bearer tok");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "resultcode": "00",
                "message": "success",
                "response": {
                    "id": "u1",
                    "email": "a@b.com",
                    "name": "A",
                    "profile_image": "http://x/y.png"
                }
            }));
    });

    let token = exchange(&naver, &auth, "tok").await.unwrap();

    let key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap();
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[FIREBASE_AUDIENCE]);
    let decoded = decode::<DecodedClaims>(&token, &key, &validation)
        .unwrap()
        .claims;

    assert_eq!(decoded.uid, "u1");
    let claims = decoded.claims.unwrap();
    assert_eq!(
        serde_json::Value::Object(claims),
        json!({
            "email": "a@b.com",
            "name": "A",
            "profileImage": "http://x/y.png"
        })
    );

    mock.assert();
}

#[tokio::test]
async fn test_exchange_omits_absent_profile_fields() {
    let server = MockServer::start();
    let naver = NaverClient::new_with_url(server.base_url());
    let auth = FirebaseAuth::new(test_service_account_key());

    server.mock(|when, then| {
        when.method(GET).path("/v1/nid/me");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "resultcode": "00",
                "message": "success",
                "response": { "id": "u2", "name": "B" }
            }));
    });

    let token = exchange(&naver, &auth, "tok").await.unwrap();

    let key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap();
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[FIREBASE_AUDIENCE]);
    let decoded = decode::<DecodedClaims>(&token, &key, &validation)
        .unwrap()
        .claims;

    assert_eq!(decoded.uid, "u2");
    let claims = decoded.claims.unwrap();
    assert_eq!(claims.len(), 1);
    assert_eq!(claims["name"], "B");
}

#[tokio::test]
async fn test_exchange_fails_on_missing_response_object() {
    let server = MockServer::start();
    let naver = NaverClient::new_with_url(server.base_url());
    let auth = FirebaseAuth::new(test_service_account_key());

    server.mock(|when, then| {
        when.method(GET).path("/v1/nid/me");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "resultcode": "024", "message": "Authentication failed" }));
    });

    let err = exchange(&naver, &auth, "tok").await.unwrap_err();
    assert!(matches!(
        err,
        BridgeError::Provider(crate::naver::NaverError::MalformedResponse(_))
    ));
}
