use crate::message::MessageContact;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kinds of event the gateway posts to the webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Message,
    IsTyping,
    MessageStatus,
    FileStatus,
    Response,
    Alias,
    NewUser,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::Message,
        EventKind::IsTyping,
        EventKind::MessageStatus,
        EventKind::FileStatus,
        EventKind::Response,
        EventKind::Alias,
        EventKind::NewUser,
    ];

    /// Wire tag carried in the webhook body's `event` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Message => "message",
            EventKind::IsTyping => "isTyping",
            EventKind::MessageStatus => "messageStatus",
            EventKind::FileStatus => "fileStatus",
            EventKind::Response => "response",
            EventKind::Alias => "alias",
            EventKind::NewUser => "newUser",
        }
    }
}

impl std::str::FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "message" => Ok(EventKind::Message),
            "isTyping" => Ok(EventKind::IsTyping),
            "messageStatus" => Ok(EventKind::MessageStatus),
            "fileStatus" => Ok(EventKind::FileStatus),
            "response" => Ok(EventKind::Response),
            "alias" => Ok(EventKind::Alias),
            "newUser" => Ok(EventKind::NewUser),
            _ => Err(format!("Unknown event type: {}", s)),
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified webhook body.
///
/// The body is kept whole; handlers pick out the event-specific fields they
/// care about.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundEvent {
    kind: EventKind,
    body: Map<String, Value>,
}

impl InboundEvent {
    pub(crate) fn new(kind: EventKind, body: Map<String, Value>) -> Self {
        Self { kind, body }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    pub fn into_body(self) -> Map<String, Value> {
        self.body
    }

    /// Sender of the event, taken from the `messageContact` object.
    ///
    /// Missing or non-string fields come back as `None`.
    pub fn message_contact(&self) -> Option<MessageContact> {
        let contact = self.body.get("messageContact")?.as_object()?;
        let field = |name: &str| contact.get(name).and_then(Value::as_str).map(str::to_string);
        Some(MessageContact {
            user_contact: field("userContact"),
            chat_id: field("chatId"),
        })
    }

    /// Plain text of a `message` event, if the user sent text.
    pub fn text_message(&self) -> Option<&str> {
        self.body
            .get("RCSMessage")?
            .get("textMessage")?
            .as_str()
    }
}

#[cfg(test)]
mod tests;
