//! Handlers for the bundled echo bot.

use crate::dispatch::EventDispatcher;
use crate::events::{EventKind, InboundEvent};
use crate::gateway::GatewayClient;
use crate::message::Suggestions;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Message events get an echo reply; every other kind is only logged.
pub(crate) fn build_dispatcher(client: Arc<GatewayClient>) -> EventDispatcher {
    let mut dispatcher = EventDispatcher::new();

    dispatcher.register(EventKind::Message, move |event: InboundEvent| {
        let client = client.clone();
        async move { reply(&client, &event).await }
    });
    for kind in EventKind::ALL {
        if kind != EventKind::Message {
            dispatcher.register(kind, log_event);
        }
    }

    dispatcher
}

pub(crate) fn echo_suggestions() -> Suggestions {
    let mut suggestions = Suggestions::new();
    suggestions
        .add_reply("reply", "reply")
        .add_url_action("url", "url", "http://example.com");
    suggestions
}

async fn reply(client: &GatewayClient, event: &InboundEvent) -> Result<()> {
    let Some(contact) = event.message_contact().filter(|c| !c.is_empty()) else {
        warn!("echo: message event without messageContact, not replying");
        return Ok(());
    };
    let Some(text) = event.text_message() else {
        debug!("echo: non-text message, not replying");
        return Ok(());
    };

    let suggestions = echo_suggestions();
    client
        .send_message(&contact, format!("You wrote: {}", text), Some(&suggestions))
        .await?;
    Ok(())
}

async fn log_event(event: InboundEvent) -> Result<()> {
    info!("echo: received {} event", event.kind());
    Ok(())
}
