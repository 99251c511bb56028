use super::IntoVariant;
use crate::errors::BuildError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

wire_enum! {
    /// Kind of call placed by a dialer suggestion.
    DialType, "dial type" {
        Phone => "dialPhoneNumber",
        Enriched => "dialEnrichedCall",
        Video => "dialVideoCall",
    }
}

wire_enum! {
    /// Privacy setting the user is asked to change.
    SettingsType, "settings type" {
        DisableAnonymization => "disableAnonymization",
        EnableDisplayedNotifications => "enableDisplayedNotifications",
    }
}

wire_enum! {
    /// Media captured by a recording compose action.
    RecordingType, "recording type" {
        Audio => "AUDIO",
        Video => "VIDEO",
    }
}

/// Opaque token echoed back to the bot when the user taps a suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Postback {
    pub data: String,
}

/// One chip in a suggestion list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Suggestion {
    Reply(SuggestedReply),
    Action(SuggestedAction),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedReply {
    pub display_text: String,
    pub postback: Postback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAction {
    #[serde(flatten)]
    pub kind: ActionKind,
    pub display_text: String,
    pub postback: Postback,
}

/// The action a chip triggers. Serialized as a single key next to
/// `displayText` and `postback`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ActionKind {
    UrlAction { open_url: OpenUrl },
    DialerAction(DialerAction),
    MapAction(MapAction),
    CalendarAction { create_calendar_event: CalendarEvent },
    ComposeAction(ComposeAction),
    DeviceAction { request_device_specifics: Empty },
    SettingsAction(SettingsAction),
}

/// Serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Empty {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenUrl {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DialerAction {
    DialPhoneNumber {
        phone_number: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        fallback_url: Option<String>,
    },
    DialEnrichedCall {
        phone_number: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        fallback_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        subject: Option<String>,
    },
    DialVideoCall {
        phone_number: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        fallback_url: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum MapAction {
    RequestLocationPush {},
    ShowLocation {
        location: Location,
        #[serde(skip_serializing_if = "Option::is_none")]
        fallback_url: Option<String>,
    },
}

/// A point shown by a show-location action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    #[serde(serialize_with = "crate::message::serialize_finite")]
    pub latitude: f64,
    #[serde(serialize_with = "crate::message::serialize_finite")]
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            label: None,
            query: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Free-text search the map client runs instead of (or alongside) the
    /// coordinates.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

/// Calendar entry proposed by a calendar action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_url: Option<String>,
}

impl CalendarEvent {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>, title: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            title: title.into(),
            description: None,
            fallback_url: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_fallback_url(mut self, url: impl Into<String>) -> Self {
        self.fallback_url = Some(url.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ComposeAction {
    ComposeTextMessage {
        phone_number: String,
        text: String,
    },
    ComposeRecordingMessage {
        phone_number: String,
        #[serde(rename = "type")]
        recording_type: RecordingType,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingsAction {
    DisableAnonymization {},
    EnableDisplayedNotifications {},
}

/// Ordered list of suggestion chips.
///
/// Chips render in the order they were added. Adders that take a sub-variant
/// tag validate it first, so a rejected call leaves the list untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Suggestions {
    suggestions: Vec<Suggestion>,
}

impl Suggestions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion> {
        self.suggestions.iter()
    }

    pub fn push(&mut self, suggestion: Suggestion) -> &mut Self {
        self.suggestions.push(suggestion);
        self
    }

    fn push_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        kind: ActionKind,
    ) -> &mut Self {
        self.push(Suggestion::Action(SuggestedAction {
            kind,
            display_text: display_text.into(),
            postback: Postback {
                data: postback_data.into(),
            },
        }))
    }

    pub fn add_reply(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
    ) -> &mut Self {
        self.push(Suggestion::Reply(SuggestedReply {
            display_text: display_text.into(),
            postback: Postback {
                data: postback_data.into(),
            },
        }))
    }

    pub fn add_url_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        url: impl Into<String>,
    ) -> &mut Self {
        self.push_action(
            display_text,
            postback_data,
            ActionKind::UrlAction {
                open_url: OpenUrl { url: url.into() },
            },
        )
    }

    /// Add a call button. `subject` is only sent with enriched calls.
    pub fn add_dialer_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        dial_type: impl IntoVariant<DialType>,
        phone_number: impl Into<String>,
        fallback_url: Option<&str>,
        subject: Option<&str>,
    ) -> Result<&mut Self, BuildError> {
        let phone_number = phone_number.into();
        let fallback_url = fallback_url.map(str::to_string);
        let action = match dial_type.into_variant()? {
            DialType::Phone => DialerAction::DialPhoneNumber {
                phone_number,
                fallback_url,
            },
            DialType::Enriched => DialerAction::DialEnrichedCall {
                phone_number,
                fallback_url,
                subject: subject.map(str::to_string),
            },
            DialType::Video => DialerAction::DialVideoCall {
                phone_number,
                fallback_url,
            },
        };
        Ok(self.push_action(display_text, postback_data, ActionKind::DialerAction(action)))
    }

    pub fn add_request_location_push(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
    ) -> &mut Self {
        self.push_action(
            display_text,
            postback_data,
            ActionKind::MapAction(MapAction::RequestLocationPush {}),
        )
    }

    pub fn add_show_location(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        location: Location,
        fallback_url: Option<&str>,
    ) -> &mut Self {
        self.push_action(
            display_text,
            postback_data,
            ActionKind::MapAction(MapAction::ShowLocation {
                location,
                fallback_url: fallback_url.map(str::to_string),
            }),
        )
    }

    pub fn add_calendar_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        event: CalendarEvent,
    ) -> &mut Self {
        self.push_action(
            display_text,
            postback_data,
            ActionKind::CalendarAction {
                create_calendar_event: event,
            },
        )
    }

    pub fn add_text_compose_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        phone_number: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.push_action(
            display_text,
            postback_data,
            ActionKind::ComposeAction(ComposeAction::ComposeTextMessage {
                phone_number: phone_number.into(),
                text: text.into(),
            }),
        )
    }

    pub fn add_recording_compose_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        phone_number: impl Into<String>,
        recording_type: impl IntoVariant<RecordingType>,
    ) -> Result<&mut Self, BuildError> {
        let recording_type = recording_type.into_variant()?;
        Ok(self.push_action(
            display_text,
            postback_data,
            ActionKind::ComposeAction(ComposeAction::ComposeRecordingMessage {
                phone_number: phone_number.into(),
                recording_type,
            }),
        ))
    }

    pub fn add_device_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
    ) -> &mut Self {
        self.push_action(
            display_text,
            postback_data,
            ActionKind::DeviceAction {
                request_device_specifics: Empty {},
            },
        )
    }

    pub fn add_settings_action(
        &mut self,
        display_text: impl Into<String>,
        postback_data: impl Into<String>,
        settings_type: impl IntoVariant<SettingsType>,
    ) -> Result<&mut Self, BuildError> {
        let action = match settings_type.into_variant()? {
            SettingsType::DisableAnonymization => SettingsAction::DisableAnonymization {},
            SettingsType::EnableDisplayedNotifications => {
                SettingsAction::EnableDisplayedNotifications {}
            }
        };
        Ok(self.push_action(display_text, postback_data, ActionKind::SettingsAction(action)))
    }

    /// Render the list as the array of suggestion objects.
    pub fn to_wire(&self) -> Result<Value, BuildError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl<'a> IntoIterator for &'a Suggestions {
    type Item = &'a Suggestion;
    type IntoIter = std::slice::Iter<'a, Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.suggestions.iter()
    }
}
