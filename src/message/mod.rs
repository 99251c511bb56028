//! Outbound message builders.
//!
//! Every builder is a plain mutable accumulator; `to_wire()` renders the JSON
//! the gateway expects. Optional fields that were never set are left out of
//! the wire form entirely rather than sent as `null`.

use crate::errors::BuildError;
use serde::Serialize;
use serde_json::Value;

/// Values that can be resolved into a sub-variant tag such as [`DialType`].
///
/// Implemented for the typed enum itself (always succeeds) and for raw wire
/// tags (`&str`/`String`), which fail with [`BuildError::InvalidVariant`] when
/// the tag is not part of the family.
pub trait IntoVariant<T> {
    fn into_variant(self) -> Result<T, BuildError>;
}

impl<T> IntoVariant<T> for &str
where
    T: std::str::FromStr<Err = BuildError>,
{
    fn into_variant(self) -> Result<T, BuildError> {
        self.parse()
    }
}

impl<T> IntoVariant<T> for String
where
    T: std::str::FromStr<Err = BuildError>,
{
    fn into_variant(self) -> Result<T, BuildError> {
        self.parse()
    }
}

/// `serialize_with` for coordinates and radii: NaN and infinities fail the
/// render instead of turning into `null`.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn serialize_finite<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(serde::ser::Error::custom(format!("non-finite number: {}", value)))
    }
}

#[allow(clippy::ref_option)]
pub(crate) fn serialize_finite_opt<S>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Some(v) => serialize_finite(v, serializer),
        None => serializer.serialize_none(),
    }
}

/// Declares a closed enum that serializes as its wire tag.
///
/// Generates `as_str`, `FromStr` (unknown tags become
/// `BuildError::InvalidVariant` tagged with `$family`), `Display`,
/// `Serialize` and an identity `IntoVariant`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $family:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $tag ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::BuildError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $tag => Ok($name::$variant), )+
                    _ => Err($crate::errors::BuildError::InvalidVariant {
                        family: $family,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl $crate::message::IntoVariant<$name> for $name {
            fn into_variant(self) -> Result<$name, $crate::errors::BuildError> {
                Ok(self)
            }
        }
    };
}

// Submodules are declared after the macro so they can use `wire_enum!`.
mod media;
mod richcard;
mod suggestions;

pub use media::{AudioMessage, FileMessage, GeolocationPushMessage};
pub use richcard::{
    CardOrientation, CardWidth, ImageAlignment, Media, MediaHeight, RichCard, RichCardCarousel,
};
pub use suggestions::{
    ActionKind, CalendarEvent, ComposeAction, DialType, DialerAction, Empty, Location, MapAction,
    OpenUrl, Postback, RecordingType, SettingsAction, SettingsType, SuggestedAction,
    SuggestedReply, Suggestion, Suggestions,
};

/// Recipient of an outbound message.
///
/// The gateway expects at least one of the two identifiers; that is left to
/// the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
}

impl MessageContact {
    pub fn new(user_contact: Option<String>, chat_id: Option<String>) -> Self {
        Self {
            user_contact,
            chat_id,
        }
    }

    /// Address a single user by MSISDN or other contact identifier.
    pub fn user(user_contact: impl Into<String>) -> Self {
        Self::new(Some(user_contact.into()), None)
    }

    /// Address an existing chat session.
    pub fn chat(chat_id: impl Into<String>) -> Self {
        Self::new(None, Some(chat_id.into()))
    }

    pub fn is_empty(&self) -> bool {
        self.user_contact.is_none() && self.chat_id.is_none()
    }
}

/// The single payload carried by an outbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageContent {
    Text(String),
    RichCard(RichCard),
    Carousel(RichCardCarousel),
    File(FileMessage),
    Audio(AudioMessage),
    Geolocation(GeolocationPushMessage),
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Text(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}

impl From<RichCard> for MessageContent {
    fn from(card: RichCard) -> Self {
        MessageContent::RichCard(card)
    }
}

impl From<RichCardCarousel> for MessageContent {
    fn from(carousel: RichCardCarousel) -> Self {
        MessageContent::Carousel(carousel)
    }
}

impl From<FileMessage> for MessageContent {
    fn from(file: FileMessage) -> Self {
        MessageContent::File(file)
    }
}

impl From<AudioMessage> for MessageContent {
    fn from(audio: AudioMessage) -> Self {
        MessageContent::Audio(audio)
    }
}

impl From<GeolocationPushMessage> for MessageContent {
    fn from(geo: GeolocationPushMessage) -> Self {
        MessageContent::Geolocation(geo)
    }
}

/// Envelope posted to `{apiUrl}/{botId}/messages`.
#[derive(Debug, Clone, Copy)]
pub struct OutboundMessage<'a> {
    pub contact: &'a MessageContact,
    pub content: &'a MessageContent,
    pub suggestions: Option<&'a Suggestions>,
}

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(rename = "RCSMessage")]
    rcs_message: RcsMessage<'a>,
    #[serde(rename = "messageContact")]
    message_contact: &'a MessageContact,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RcsMessage<'a> {
    #[serde(flatten)]
    content: ContentField<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggested_chip_list: Option<ChipList<'a>>,
}

/// Exactly one of these keys appears inside `RCSMessage`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum ContentField<'a> {
    TextMessage(&'a str),
    RichcardMessage(Value),
    FileMessage(&'a FileMessage),
    AudioMessage(&'a AudioMessage),
    GeolocationPushMessage(&'a GeolocationPushMessage),
}

#[derive(Serialize)]
struct ChipList<'a> {
    suggestions: &'a Suggestions,
}

impl<'a> OutboundMessage<'a> {
    pub fn new(
        contact: &'a MessageContact,
        content: &'a MessageContent,
        suggestions: Option<&'a Suggestions>,
    ) -> Self {
        Self {
            contact,
            content,
            suggestions,
        }
    }

    pub fn to_wire(&self) -> Result<Value, BuildError> {
        let content = match self.content {
            MessageContent::Text(text) => ContentField::TextMessage(text),
            MessageContent::RichCard(card) => ContentField::RichcardMessage(card.to_wire()?),
            MessageContent::Carousel(carousel) => {
                ContentField::RichcardMessage(carousel.to_wire()?)
            }
            MessageContent::File(file) => ContentField::FileMessage(file),
            MessageContent::Audio(audio) => ContentField::AudioMessage(audio),
            MessageContent::Geolocation(geo) => ContentField::GeolocationPushMessage(geo),
        };

        let envelope = Envelope {
            rcs_message: RcsMessage {
                content,
                suggested_chip_list: self.suggestions.map(|suggestions| ChipList { suggestions }),
            },
            message_contact: self.contact,
        };
        Ok(serde_json::to_value(envelope)?)
    }
}
