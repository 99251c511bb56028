use super::*;
use crate::message::{CardOrientation, ImageAlignment, RichCard};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GatewayClient {
    GatewayClient::new(server.uri(), "bot-1", "test_token")
}

#[tokio::test]
async fn test_send_text_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot-1/messages"))
        .and(header("authorization", "Bearer test_token"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "RCSMessage": {"textMessage": "hello"},
            "messageContact": {"userContact": "+15551234567"}
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .send_message(&MessageContact::user("+15551234567"), "hello", None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_send_with_suggestions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot-1/messages"))
        .and(body_json(json!({
            "RCSMessage": {
                "textMessage": "pick one",
                "suggestedChipList": {"suggestions": [
                    {"reply": {"displayText": "Yes", "postback": {"data": "yes"}}}
                ]}
            },
            "messageContact": {"chatId": "chat-9"}
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let mut chips = Suggestions::new();
    chips.add_reply("Yes", "yes");

    let client = client_for(&server);
    client
        .send_message(&MessageContact::chat("chat-9"), "pick one", Some(&chips))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_send_rich_card_uses_richcard_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot-1/messages"))
        .and(body_json(json!({
            "RCSMessage": {"richcardMessage": {"message": {"generalPurposeCard": {
                "layout": {"cardOrientation": "VERTICAL"},
                "content": {"title": "Menu"}
            }}}},
            "messageContact": {"userContact": "+1"}
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let mut card = RichCard::default();
    card.set_title("Menu");

    let client = client_for(&server);
    client
        .send_message(&MessageContact::user("+1"), card, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_ok_status_is_not_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("queued"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .send_message(&MessageContact::user("+1"), "hi", None)
        .await
        .unwrap_err();

    match &err {
        SendError::UnexpectedStatus { code, body } => {
            assert_eq!(*code, 200);
            assert_eq!(body, "queued");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
    assert_eq!(err.status(), Some(200));
}

#[tokio::test]
async fn test_server_error_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .send_message(&MessageContact::user("+1"), "hi", None)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(!err.is_transport());
    assert!(err.to_string().contains("boom"));
}

#[tokio::test]
async fn test_build_error_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&server)
        .await;

    let mut card = RichCard::default();
    card.set_orientation(CardOrientation::Horizontal);

    let client = client_for(&server);
    let err = client
        .send_message(&MessageContact::user("+1"), card, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SendError::Build(crate::errors::BuildError::MissingImageAlignment)
    ));

    let mut aligned = RichCard::default();
    aligned
        .set_orientation(CardOrientation::Horizontal)
        .set_image_alignment(ImageAlignment::Left);
    let content = MessageContent::from(aligned);
    let contact = MessageContact::user("+1");
    assert!(OutboundMessage::new(&contact, &content, None).to_wire().is_ok());
}

#[tokio::test]
async fn test_connection_refused_is_transport() {
    let client = GatewayClient::new("http://127.0.0.1:1", "bot-1", "tok");
    let err = client
        .send_message(&MessageContact::user("+1"), "hi", None)
        .await
        .unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

#[test]
fn test_messages_url_trims_trailing_slash() {
    let client = GatewayClient::new("https://maap.example.com/v1/", "bot", "tok");
    assert_eq!(
        client.messages_url(),
        "https://maap.example.com/v1/bot/messages"
    );
}

#[test]
fn test_from_config_and_debug_redacts_token() {
    let config = GatewayConfig::new("https://maap.example.com", "bot", "super-secret");
    let client = GatewayClient::from_config(&config);
    assert_eq!(client.messages_url(), "https://maap.example.com/bot/messages");

    let debug = format!("{client:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("[REDACTED]"));
}
