//! End-to-end gateway tests against a mock HTTP server.
//!
//! These cover the wire-level behavior the scripted-transport tests in
//! the application crate cannot: real header serialization, multipart
//! boundaries, and timeout handling in the reqwest adapter.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use elodan_client::services::GenerateEffectRequest;
use elodan_client::services::ImageUpload;
use elodan_client::{
    AccessToken, ApiError, ClientConfig, ElodanClient, MemoryTokenStore, RequestOptions,
    ReqwestTransport,
};
use mockito::{Matcher, Server};
use serde_json::{Value, json};

/// Opt-in log output for debugging these flows: `RUST_LOG=debug`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn client_for(server: &Server) -> ElodanClient {
    ElodanClient::with_parts(
        ClientConfig::new(server.url()),
        Arc::new(ReqwestTransport::new().unwrap()),
        Arc::new(MemoryTokenStore::new()),
    )
}

#[tokio::test]
async fn cold_start_refreshes_once_and_replays_with_the_new_token() {
    init_tracing();
    let mut server = Server::new_async().await;

    let unauthenticated = server
        .mock("GET", "/protected")
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .with_body(r#"{"message":"no token"}"#)
        .expect(1)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/auth/refresh")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":{"accessToken":"abc"}}"#)
        .expect(1)
        .create_async()
        .await;
    let replay = server
        .mock("GET", "/protected")
        .match_header("authorization", "Bearer abc")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(client.token().await, None);

    let value: Value = client.gateway().get("/protected").await.unwrap();
    assert_eq!(value, json!({"ok": true}));

    unauthenticated.assert_async().await;
    refresh.assert_async().await;
    replay.assert_async().await;
    assert_eq!(
        client.token().await.map(|t| t.as_str().to_string()),
        Some("abc".to_string())
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_401s_produce_a_single_refresh_call() {
    init_tracing();
    let mut server = Server::new_async().await;

    let _unauthorized = server
        .mock("GET", "/protected")
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .with_body("{}")
        .expect_at_least(1)
        .create_async()
        .await;
    // Hold the refresh open long enough for every first attempt to 401
    // and queue behind the single in-flight call.
    let refresh = server
        .mock("POST", "/auth/refresh")
        .with_status(200)
        .with_chunked_body(|writer| {
            std::thread::sleep(Duration::from_millis(150));
            writer.write_all(br#"{"data":{"accessToken":"fresh"}}"#)
        })
        .expect(1)
        .create_async()
        .await;
    let replayed = server
        .mock("GET", "/protected")
        .match_header("authorization", "Bearer fresh")
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .expect(8)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut handles = Vec::new();
    for _ in 0..8 {
        let gateway = client.gateway();
        handles.push(tokio::spawn(
            async move { gateway.get::<Value>("/protected").await },
        ));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), json!({"ok": true}));
    }

    refresh.assert_async().await;
    replayed.assert_async().await;
}

#[tokio::test]
async fn login_401_never_touches_the_refresh_endpoint() {
    let mut server = Server::new_async().await;

    let login = server
        .mock("POST", "/auth/login")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"bad credentials"}"#)
        .expect(1)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/auth/refresh")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .auth()
        .login("ada@example.com", "wrong")
        .await
        .unwrap_err();

    match err {
        ApiError::Api { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body["message"], "bad credentials");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    login.assert_async().await;
    refresh.assert_async().await;
}

#[tokio::test]
async fn multipart_uploads_let_the_transport_set_the_boundary() {
    let mut server = Server::new_async().await;

    let generate = server
        .mock("POST", "/video-effects/generate")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=.+".to_string()),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"data":{"_id":"e1","effectScene":"sparkle"}}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let effect = client
        .video_effects()
        .generate(GenerateEffectRequest {
            image: ImageUpload {
                filename: "photo.png".to_string(),
                content: vec![137, 80, 78, 71],
                mime: Some("image/png".to_string()),
            },
            effect_scene: "sparkle".to_string(),
            prompt: None,
        })
        .await
        .unwrap();

    generate.assert_async().await;
    assert_eq!(effect.id, "e1");
    assert_eq!(effect.effect_scene.as_deref(), Some("sparkle"));
}

#[tokio::test]
async fn failed_refresh_clears_the_token_and_reports_session_expiry() {
    let mut server = Server::new_async().await;

    let _protected = server
        .mock("GET", "/protected")
        .with_status(401)
        .with_body("{}")
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/auth/refresh")
        .with_status(500)
        .with_body(r#"{"message":"refresh store down"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    client.set_token(AccessToken::new("stale")).await.unwrap();

    let err = client.gateway().get::<Value>("/protected").await.unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired));
    assert_eq!(client.token().await, None);
    refresh.assert_async().await;
}

#[tokio::test]
async fn refresh_payload_missing_the_token_field_is_session_expiry() {
    let mut server = Server::new_async().await;

    let _protected = server
        .mock("GET", "/protected")
        .with_status(401)
        .with_body("{}")
        .create_async()
        .await;
    let _refresh = server
        .mock("POST", "/auth/refresh")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"data":{}}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    client.set_token(AccessToken::new("stale")).await.unwrap();

    let err = client.gateway().get::<Value>("/protected").await.unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired));
    assert_eq!(client.token().await, None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn a_timed_out_request_does_not_disturb_a_concurrent_one() {
    // An endpoint that accepts connections and never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let hang_addr = listener.local_addr().unwrap();
    let _hold = tokio::spawn(async move {
        let mut sockets = Vec::new();
        loop {
            if let Ok((socket, _)) = listener.accept().await {
                sockets.push(socket);
            }
        }
    });

    let mut server = Server::new_async().await;
    let fast = server
        .mock("GET", "/fast")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let gateway = client.gateway();

    let slow = {
        let gateway = Arc::clone(&gateway);
        let url = format!("http://{hang_addr}/never");
        tokio::spawn(async move {
            gateway
                .request::<Value>(&url, RequestOptions::new().with_timeout_ms(100))
                .await
        })
    };
    let quick = {
        let gateway = Arc::clone(&gateway);
        tokio::spawn(async move { gateway.get::<Value>("/fast").await })
    };

    let slow_result = slow.await.unwrap();
    assert!(matches!(
        slow_result.unwrap_err(),
        ApiError::Timeout { timeout_ms: 100 }
    ));

    assert_eq!(quick.await.unwrap().unwrap(), json!({"ok": true}));
    fast.assert_async().await;
}

#[tokio::test]
async fn stored_token_is_sent_as_a_bearer_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/auth/me")
        .match_header("authorization", "Bearer token-123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":{"user":{"id":"u1","email":"a@b.c"}}}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .set_token(AccessToken::new("token-123"))
        .await
        .unwrap();

    let user = client.auth().current_user().await.unwrap();
    assert_eq!(user.id, "u1");
    mock.assert_async().await;
}
