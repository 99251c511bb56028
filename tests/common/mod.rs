// Shared test helpers; not every test binary uses all of them.
#![allow(unused)]

use rcs_chatbot::{EventDispatcher, EventKind, InboundEvent};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const BOT_ID: &str = "bot-it";
pub const TOKEN: &str = "it-token";

/// Events seen by a recording handler, in arrival order.
pub type Seen = Arc<Mutex<Vec<InboundEvent>>>;

/// Dispatcher with a recording handler for each of `kinds`.
pub fn recording_dispatcher(kinds: &[EventKind]) -> (EventDispatcher, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let mut dispatcher = EventDispatcher::new();
    for &kind in kinds {
        let sink = seen.clone();
        dispatcher.register(kind, move |event: InboundEvent| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(event);
                anyhow::Ok(())
            }
        });
    }
    (dispatcher, seen)
}

/// Mock gateway answering every message POST with `status`.
pub async fn mock_gateway(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/{}/messages", BOT_ID)))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

/// Bodies of every request the mock gateway received.
pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|req| serde_json::from_slice(&req.body).unwrap())
        .collect()
}

pub fn message_event(user: &str, text: &str) -> Value {
    json!({
        "event": "message",
        "messageContact": {"userContact": user},
        "RCSMessage": {"msgId": "m-1", "textMessage": text}
    })
}
