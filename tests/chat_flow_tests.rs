//! End-to-end flow tests: the reducer driving a real `ApiClient` against a
//! mock backend, exactly as the event loop wires them together (minus the
//! terminal).

use std::sync::Arc;
use std::time::Duration;

use abiacs::api::{ApiClient, ChatBackend};
use abiacs::core::action::{Action, Effect, update};
use abiacs::core::state::App;
use abiacs::core::transcript::Role;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(server: &MockServer) -> App {
    App::new(Arc::new(ApiClient::new(
        server.uri(),
        Duration::from_secs(5),
    )))
}

/// Run the I/O half of the loop for one effect: perform the request the
/// reducer asked for and feed the outcome back in.
async fn perform(app: &mut App, effect: Effect) {
    let Effect::SendMessage {
        text,
        conversation_id,
        generation,
    } = effect
    else {
        panic!("expected SendMessage effect, got {effect:?}");
    };
    let result = app
        .backend
        .clone()
        .send_message(&text, conversation_id.as_deref())
        .await
        .map_err(|e| e.to_string());
    update(app, Action::ResponseArrived { generation, result });
}

#[tokio::test]
async fn test_round_trip_builds_transcript_and_conversation_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({ "message": "What is the leave policy?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "You get 30 days.",
            "sources": ["Rule 12"],
            "conversation_id": "abc123"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server);
    let effect = update(&mut app, Action::Submit("What is the leave policy?".into()));
    assert!(app.is_loading);

    perform(&mut app, effect).await;

    assert!(!app.is_loading);
    assert_eq!(app.transcript.len(), 2);

    let messages = app.transcript.messages();
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].content, "What is the leave policy?");
    assert_eq!(messages[1].role, Role::Assistant);
    assert_eq!(messages[1].content, "You get 30 days.");
    assert_eq!(messages[1].sources, vec!["Rule 12"]);
    assert_eq!(app.conversation_id.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn test_second_round_trip_reuses_conversation_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({ "message": "first" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "first answer",
            "sources": [],
            "conversation_id": "abc123"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The follow-up must carry the id issued by the first response.
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({
            "message": "second",
            "conversation_id": "abc123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "second answer",
            "sources": [],
            "conversation_id": "abc123"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server);

    let effect = update(&mut app, Action::Submit("first".into()));
    perform(&mut app, effect).await;

    let effect = update(&mut app, Action::Submit("second".into()));
    perform(&mut app, effect).await;

    assert_eq!(app.transcript.len(), 4);
    assert_eq!(app.transcript.messages()[3].content, "second answer");
}

#[tokio::test]
async fn test_backend_error_becomes_chat_bubble() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "backend down" })),
        )
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server);
    let effect = update(&mut app, Action::Submit("hello".into()));
    perform(&mut app, effect).await;

    assert_eq!(app.transcript.len(), 2);
    let bubble = &app.transcript.messages()[1];
    assert_eq!(bubble.role, Role::Assistant);
    assert_eq!(bubble.content, "backend down");
    assert!(bubble.sources.is_empty());
    assert!(!app.is_loading, "UI stays interactive after a failure");
}

#[tokio::test]
async fn test_new_chat_mid_flight_discards_the_late_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "response": "late answer",
                    "sources": [],
                    "conversation_id": "stale-id"
                }))
                // Slow enough that the user has moved on before it lands.
                .set_delay(Duration::from_millis(50)),
        )
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server);
    let effect = update(&mut app, Action::Submit("old question".into()));
    let Effect::SendMessage {
        text,
        conversation_id,
        generation,
    } = effect
    else {
        panic!("expected SendMessage effect");
    };

    // The request is in flight when the user starts a new chat.
    update(&mut app, Action::NewChat);
    assert!(app.transcript.is_empty());

    let result = app
        .backend
        .clone()
        .send_message(&text, conversation_id.as_deref())
        .await
        .map_err(|e| e.to_string());
    update(&mut app, Action::ResponseArrived { generation, result });

    assert!(app.transcript.is_empty(), "late reply must not reappear");
    assert!(app.conversation_id.is_none());
}
