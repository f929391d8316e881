//! Service wrapper tests: envelope unwrapping, id aliasing, and the
//! auth flows that mutate the token slot.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use elodan_client::{
    AccessToken, ClientConfig, ElodanClient, FileTokenStore, MemoryTokenStore, OAuthCallback,
    ReqwestTransport,
};
use mockito::Server;
use serde_json::json;

fn client_for(server: &Server) -> ElodanClient {
    ElodanClient::with_parts(
        ClientConfig::new(server.url()),
        Arc::new(ReqwestTransport::new().unwrap()),
        Arc::new(MemoryTokenStore::new()),
    )
}

#[tokio::test]
async fn chat_sessions_unwrap_the_envelope_and_alias_mongo_ids() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/chat/sessions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "data": [
                    {"_id": "s1", "title": "Trip planning", "isPinned": true},
                    {"_id": "s2", "title": "Poems"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let sessions = client_for(&server).chat().sessions().await.unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].id, "s1");
    assert_eq!(sessions[0].is_pinned, Some(true));
    assert_eq!(sessions[1].title.as_deref(), Some("Poems"));
}

#[tokio::test]
async fn bare_array_payloads_are_accepted_without_an_envelope() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/video/models")
        .match_query(mockito::Matcher::UrlEncoded(
            "type".to_string(),
            "image-to-video".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{"_id": "m1", "name": "Motion"}]).to_string())
        .create_async()
        .await;

    let models = client_for(&server)
        .videos()
        .models(Some("image-to-video"))
        .await
        .unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].id, "m1");
}

#[tokio::test]
async fn latest_offer_null_payload_is_none() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/offers/latest")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"data":null}"#)
        .create_async()
        .await;

    let latest = client_for(&server).offers().latest().await.unwrap();
    assert_eq!(latest, None);
}

#[tokio::test]
async fn login_stores_the_returned_token() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/login")
        .match_body(mockito::Matcher::Json(
            json!({"email": "ada@example.com", "password": "hunter2"}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "data": {
                    "accessToken": "tok-1",
                    "user": {"id": "u1", "email": "ada@example.com", "name": "Ada", "role": "user"}
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client
        .auth()
        .login("ada@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(response.user.unwrap().name.as_deref(), Some("Ada"));
    assert_eq!(
        client.token().await.map(|t| t.as_str().to_string()),
        Some("tok-1".to_string())
    );
}

#[tokio::test]
async fn logout_clears_the_token_even_when_the_server_fails() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/logout")
        .with_status(500)
        .with_body(r#"{"message":"boom"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client.set_token(AccessToken::new("tok")).await.unwrap();

    client.auth().logout().await.unwrap();
    assert_eq!(client.token().await, None);
}

#[tokio::test]
async fn oauth_callback_success_stores_the_token() {
    let server = Server::new_async().await;
    let client = client_for(&server);

    let callback = client
        .auth()
        .complete_oauth_callback(
            "https://app.example.com/auth/callback?accessToken=oauth-tok&refreshToken=r1",
        )
        .await
        .unwrap();

    assert!(matches!(callback, OAuthCallback::Success { .. }));
    assert_eq!(
        client.token().await.map(|t| t.as_str().to_string()),
        Some("oauth-tok".to_string())
    );
}

#[tokio::test]
async fn oauth_callback_error_leaves_the_slot_empty() {
    let server = Server::new_async().await;
    let client = client_for(&server);

    let callback = client
        .auth()
        .complete_oauth_callback("https://app.example.com/auth/callback?error=denied")
        .await
        .unwrap();

    assert_eq!(
        callback,
        OAuthCallback::Failed {
            message: "denied".to_string()
        }
    );
    assert_eq!(client.token().await, None);
}

#[tokio::test]
async fn file_backed_sessions_survive_a_client_restart() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data":{"accessToken":"durable-tok"}}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("credentials.json");

    let client = ElodanClient::with_parts(
        ClientConfig::new(server.url()),
        Arc::new(ReqwestTransport::new().unwrap()),
        Arc::new(FileTokenStore::new(&path)),
    );
    client.auth().login("a@b.c", "pw").await.unwrap();

    // A fresh client over the same credentials file resumes the session.
    let restarted = ElodanClient::with_parts(
        ClientConfig::new(server.url()),
        Arc::new(ReqwestTransport::new().unwrap()),
        Arc::new(FileTokenStore::new(&path)),
    );
    assert_eq!(
        restarted.token().await.map(|t| t.as_str().to_string()),
        Some("durable-tok".to_string())
    );
}

#[tokio::test]
async fn improve_prompt_unwraps_the_rewritten_prompt() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/video/improve-prompt")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"data":{"improvedPrompt":"a cinematic storm"}}"#)
        .create_async()
        .await;

    let improved = client_for(&server)
        .videos()
        .improve_prompt("storm", "m1")
        .await
        .unwrap();
    assert_eq!(improved.improved_prompt, "a cinematic storm");
}
