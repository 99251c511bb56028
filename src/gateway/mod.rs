//! HTTP client for the MaaP chatbot gateway.
//!
//! Every send is a single `POST {apiUrl}/{botId}/messages` with a bearer
//! token. The gateway acknowledges accepted messages with `202 Accepted`;
//! anything else is reported back as [`SendError::UnexpectedStatus`].

use crate::config::GatewayConfig;
use crate::errors::{SendError, SendResult};
use crate::message::{MessageContact, MessageContent, OutboundMessage, Suggestions};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct GatewayClient {
    client: Client,
    messages_url: String,
    access_token: String,
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("messages_url", &self.messages_url)
            .field("access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

fn messages_url(api_url: &str, bot_id: &str) -> String {
    format!("{}/{}/messages", api_url.trim_end_matches('/'), bot_id)
}

impl GatewayClient {
    /// Client with the default connect (10s) and request (30s) timeouts.
    pub fn new(
        api_url: impl AsRef<str>,
        bot_id: impl AsRef<str>,
        access_token: impl Into<String>,
    ) -> Self {
        Self::with_timeouts(
            api_url.as_ref(),
            bot_id.as_ref(),
            access_token.into(),
            Duration::from_secs(CONNECT_TIMEOUT_SECS),
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::with_timeouts(
            &config.api_url,
            &config.bot_id,
            config.access_token.clone(),
            Duration::from_secs(config.connect_timeout_secs),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn with_timeouts(
        api_url: &str,
        bot_id: &str,
        access_token: String,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Self {
        let messages_url = messages_url(api_url, bot_id);
        info!("gateway client targeting {}", messages_url);
        Self {
            client: Client::builder()
                .connect_timeout(connect_timeout)
                .timeout(request_timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            messages_url,
            access_token,
        }
    }

    /// Endpoint every message is posted to.
    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }

    /// Send `content` to `contact`, optionally with a chip list.
    ///
    /// `content` accepts plain text as well as any rich content type, e.g.
    /// `client.send_message(&contact, "hi", None)` or
    /// `client.send_message(&contact, card, Some(&chips))`.
    pub async fn send_message(
        &self,
        contact: &MessageContact,
        content: impl Into<MessageContent>,
        suggestions: Option<&Suggestions>,
    ) -> SendResult<()> {
        let content = content.into();
        self.send(&OutboundMessage::new(contact, &content, suggestions))
            .await
    }

    /// Post a prepared envelope.
    pub async fn send(&self, message: &OutboundMessage<'_>) -> SendResult<()> {
        let body = message.to_wire()?;
        debug!("posting message to {}: {}", self.messages_url, body);

        let response = self
            .client
            .post(&self.messages_url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::ACCEPTED {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!("gateway rejected message ({}): {}", status, body);
        Err(SendError::UnexpectedStatus {
            code: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests;
