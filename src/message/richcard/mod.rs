use super::Suggestions;
use crate::errors::BuildError;
use serde::Serialize;
use serde_json::{Value, json};

wire_enum! {
    CardOrientation, "card orientation" {
        Vertical => "VERTICAL",
        Horizontal => "HORIZONTAL",
    }
}

wire_enum! {
    /// Which side of a horizontal card the media sits on.
    ImageAlignment, "image alignment" {
        Left => "LEFT",
        Right => "RIGHT",
    }
}

wire_enum! {
    CardWidth, "card width" {
        Small => "SMALL_WIDTH",
        Medium => "MEDIUM_WIDTH",
    }
}

wire_enum! {
    MediaHeight, "media height" {
        Short => "SHORT_HEIGHT",
        Medium => "MEDIUM_HEIGHT",
        Tall => "TALL_HEIGHT",
    }
}

/// Image or video shown on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub media_url: String,
    pub media_content_type: String,
    pub media_file_size: u64,
    pub height: MediaHeight,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_description: Option<String>,
}

impl Media {
    pub fn new(
        url: impl Into<String>,
        content_type: impl Into<String>,
        file_size: u64,
        height: MediaHeight,
    ) -> Self {
        Self {
            media_url: url.into(),
            media_content_type: content_type.into(),
            media_file_size: file_size,
            height,
            thumbnail_url: None,
            thumbnail_content_type: None,
            thumbnail_file_size: None,
            content_description: None,
        }
    }

    #[must_use]
    pub fn with_thumbnail(
        mut self,
        url: impl Into<String>,
        content_type: impl Into<String>,
        file_size: u64,
    ) -> Self {
        self.thumbnail_url = Some(url.into());
        self.thumbnail_content_type = Some(content_type.into());
        self.thumbnail_file_size = Some(file_size);
        self
    }

    /// Accessibility text read out in place of the media.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.content_description = Some(description.into());
        self
    }
}

/// A single general-purpose rich card.
///
/// Cards default to vertical orientation. A horizontal card must have an
/// image alignment before it can be rendered; on a vertical card the
/// alignment is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct RichCard {
    orientation: CardOrientation,
    image_alignment: Option<ImageAlignment>,
    media: Option<Media>,
    title: Option<String>,
    description: Option<String>,
    suggestions: Option<Suggestions>,
}

impl Default for RichCard {
    fn default() -> Self {
        Self {
            orientation: CardOrientation::Vertical,
            image_alignment: None,
            media: None,
            title: None,
            description: None,
            suggestions: None,
        }
    }
}

/// The `content` block of a card, shared by single cards and carousels.
#[derive(Serialize)]
struct CardContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<&'a Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestions: Option<&'a Suggestions>,
}

impl RichCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_orientation(&mut self, orientation: CardOrientation) -> &mut Self {
        self.orientation = orientation;
        self
    }

    pub fn set_image_alignment(&mut self, alignment: ImageAlignment) -> &mut Self {
        self.image_alignment = Some(alignment);
        self
    }

    pub fn set_media(&mut self, media: Media) -> &mut Self {
        self.media = Some(media);
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_suggestions(&mut self, suggestions: Suggestions) -> &mut Self {
        self.suggestions = Some(suggestions);
        self
    }

    pub fn orientation(&self) -> CardOrientation {
        self.orientation
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn content(&self) -> CardContent<'_> {
        CardContent {
            media: self.media.as_ref(),
            title: self.title.as_deref(),
            description: self.description.as_deref(),
            suggestions: self.suggestions.as_ref(),
        }
    }

    /// Render the `richcardMessage` payload for this card.
    pub fn to_wire(&self) -> Result<Value, BuildError> {
        let mut layout = json!({ "cardOrientation": self.orientation });
        if self.orientation == CardOrientation::Horizontal {
            let alignment = self
                .image_alignment
                .ok_or(BuildError::MissingImageAlignment)?;
            layout["imageAlignment"] = json!(alignment);
        }

        Ok(json!({
            "message": {
                "generalPurposeCard": {
                    "layout": layout,
                    "content": serde_json::to_value(self.content())?,
                }
            }
        }))
    }
}

/// Horizontally scrolling row of cards.
///
/// Only each card's content is rendered; the carousel's width applies to all
/// of them and per-card orientation is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct RichCardCarousel {
    card_width: CardWidth,
    cards: Vec<RichCard>,
}

impl Default for RichCardCarousel {
    fn default() -> Self {
        Self {
            card_width: CardWidth::Small,
            cards: Vec::new(),
        }
    }
}

impl RichCardCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_card_width(&mut self, width: CardWidth) -> &mut Self {
        self.card_width = width;
        self
    }

    pub fn add_card(&mut self, card: RichCard) -> &mut Self {
        self.cards.push(card);
        self
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn to_wire(&self) -> Result<Value, BuildError> {
        let content: Vec<CardContent<'_>> = self.cards.iter().map(RichCard::content).collect();
        Ok(json!({
            "message": {
                "generalPurposeCardCarousel": {
                    "layout": { "cardWidth": self.card_width },
                    "content": serde_json::to_value(content)?,
                }
            }
        }))
    }
}
