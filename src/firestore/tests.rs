use super::*;
use httpmock::prelude::*;
use reqwest::Client;
use reqwest_middleware::ClientBuilder;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct MessageDoc {
    message: String,
}

fn plain_client() -> ClientWithMiddleware {
    ClientBuilder::new(Client::new()).build()
}

#[tokio::test]
async fn test_collection_add() {
    let server = MockServer::start();
    let db = FirebaseFirestore::new_with_url(
        plain_client(),
        server.url("/v1/projects/test-project/databases/(default)/documents"),
    );

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/projects/test-project/databases/(default)/documents/messages")
            .header("content-type", "application/json")
            .json_body(json!({
                "fields": {
                    "message": { "stringValue": "Hello, Firestore!" }
                }
            }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "name": "projects/test-project/databases/(default)/documents/messages/abc123",
                "fields": {
                    "message": { "stringValue": "Hello, Firestore!" }
                },
                "createTime": "2024-01-01T00:00:00Z",
                "updateTime": "2024-01-01T00:00:00Z"
            }));
    });

    let doc = db
        .collection("messages")
        .add(&MessageDoc {
            message: "Hello, Firestore!".to_string(),
        })
        .await
        .unwrap();

    assert!(doc.name.ends_with("messages/abc123"));
    mock.assert();
}

#[tokio::test]
async fn test_collection_add_surfaces_api_error_message() {
    let server = MockServer::start();
    let db = FirebaseFirestore::new_with_url(
        plain_client(),
        server.url("/v1/projects/test-project/databases/(default)/documents"),
    );

    server.mock(|when, then| {
        when.method(POST)
            .path("/v1/projects/test-project/databases/(default)/documents/messages");
        then.status(500)
            .header("content-type", "application/json")
            .json_body(json!({
                "error": {
                    "code": 500,
                    "message": "disk full",
                    "status": "INTERNAL"
                }
            }));
    });

    let err = db
        .collection("messages")
        .add(&MessageDoc {
            message: "Hello, Firestore!".to_string(),
        })
        .await
        .unwrap_err();

    match err {
        FirestoreError::ApiError(msg) => assert_eq!(msg, "disk full"),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_collection_add_non_envelope_error_body() {
    let server = MockServer::start();
    let db = FirebaseFirestore::new_with_url(
        plain_client(),
        server.url("/v1/projects/test-project/databases/(default)/documents"),
    );

    server.mock(|when, then| {
        when.method(POST)
            .path("/v1/projects/test-project/databases/(default)/documents/messages");
        then.status(503).body("upstream unavailable");
    });

    let err = db
        .collection("messages")
        .add(&MessageDoc {
            message: "Hello, Firestore!".to_string(),
        })
        .await
        .unwrap_err();

    match err {
        FirestoreError::ApiError(msg) => {
            assert!(msg.contains("Add document failed"));
            assert!(msg.contains("503"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}
