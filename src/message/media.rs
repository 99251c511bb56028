use chrono::{DateTime, Utc};
use serde::Serialize;

/// File attachment sent as `fileMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMessage {
    pub file_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(rename = "fileMIMEType", skip_serializing_if = "Option::is_none")]
    pub file_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_file_name: Option<String>,
    #[serde(rename = "thumbnailMIMEType", skip_serializing_if = "Option::is_none")]
    pub thumbnail_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_file_size: Option<u64>,
}

impl FileMessage {
    pub fn new(file_url: impl Into<String>) -> Self {
        Self {
            file_url: file_url.into(),
            file_name: None,
            file_mime_type: None,
            file_size: None,
            thumbnail_url: None,
            thumbnail_file_name: None,
            thumbnail_mime_type: None,
            thumbnail_file_size: None,
        }
    }

    pub fn set_file_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn set_file_mime_type(&mut self, mime_type: impl Into<String>) -> &mut Self {
        self.file_mime_type = Some(mime_type.into());
        self
    }

    pub fn set_file_size(&mut self, size: u64) -> &mut Self {
        self.file_size = Some(size);
        self
    }

    pub fn set_thumbnail_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn set_thumbnail_file_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.thumbnail_file_name = Some(name.into());
        self
    }

    pub fn set_thumbnail_mime_type(&mut self, mime_type: impl Into<String>) -> &mut Self {
        self.thumbnail_mime_type = Some(mime_type.into());
        self
    }

    pub fn set_thumbnail_file_size(&mut self, size: u64) -> &mut Self {
        self.thumbnail_file_size = Some(size);
        self
    }
}

/// Audio clip sent as `audioMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioMessage {
    pub file_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(rename = "fileMIMEType", skip_serializing_if = "Option::is_none")]
    pub file_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playing_length: Option<u32>,
}

impl AudioMessage {
    pub fn new(file_url: impl Into<String>) -> Self {
        Self {
            file_url: file_url.into(),
            file_name: None,
            file_mime_type: None,
            file_size: None,
            playing_length: None,
        }
    }

    pub fn set_file_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn set_file_mime_type(&mut self, mime_type: impl Into<String>) -> &mut Self {
        self.file_mime_type = Some(mime_type.into());
        self
    }

    pub fn set_file_size(&mut self, size: u64) -> &mut Self {
        self.file_size = Some(size);
        self
    }

    pub fn set_playing_length(&mut self, seconds: u32) -> &mut Self {
        self.playing_length = Some(seconds);
        self
    }
}

/// Location share sent as `geolocationPushMessage`.
///
/// `pos` is the GML position string: latitude and longitude separated by a
/// space.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeolocationPushMessage {
    pub pos: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
    /// Offset from UTC of the sender, in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_offset: Option<i32>,
    /// Accuracy radius in metres. Must be finite to render.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::message::serialize_finite_opt"
    )]
    pub radius: Option<f64>,
}

impl GeolocationPushMessage {
    pub fn new(pos: impl Into<String>) -> Self {
        Self {
            pos: pos.into(),
            label: None,
            timestamp: None,
            expiry: None,
            time_offset: None,
            radius: None,
        }
    }

    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        Self::new(format!("{} {}", latitude, longitude))
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = Some(label.into());
        self
    }

    pub fn set_timestamp(&mut self, timestamp: DateTime<Utc>) -> &mut Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn set_expiry(&mut self, expiry: DateTime<Utc>) -> &mut Self {
        self.expiry = Some(expiry);
        self
    }

    pub fn set_time_offset(&mut self, minutes: i32) -> &mut Self {
        self.time_offset = Some(minutes);
        self
    }

    pub fn set_radius(&mut self, metres: f64) -> &mut Self {
        self.radius = Some(metres);
        self
    }
}
