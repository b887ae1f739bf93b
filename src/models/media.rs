use std::fmt::{Display, Formatter};

use serde::Serialize;
use strum::EnumString;

use crate::codec::{Decode, Fields};
use crate::error::{Entity, Result};

/// The known values of a media item's `mediaType`
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MediaKind {
    Video,
    Audio,
}

/// A single playable unit: the video of a movie, or one episode of a series.
///
/// Upstream payloads are inconsistent about which keys they send (an episode may come without a
/// `title`, a trailer without an `id`), so every field is optional and a missing or `null` key
/// only blanks out that one field.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayableContentMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    /// Length in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    media_type: Option<String>,
}

impl PlayableContentMedia {
    pub fn new(
        id: Option<u64>,
        title: Option<String>,
        duration: Option<i64>,
        media_type: Option<String>,
    ) -> Self {
        Self {
            id,
            title,
            duration,
            media_type,
        }
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn duration(&self) -> Option<i64> {
        self.duration
    }

    /// The raw `mediaType`, exactly as it was received
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// `None` when `mediaType` is absent or not one of the known kinds
    pub fn kind(&self) -> Option<MediaKind> {
        self.media_type.as_deref()?.parse().ok()
    }
}

impl Decode for PlayableContentMedia {
    const ENTITY: Entity = Entity::PlayableContentMedia;

    fn decode_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            id: fields.optional("id")?,
            title: fields.optional("title")?,
            duration: fields.optional("duration")?,
            media_type: fields.optional("mediaType")?,
        })
    }
}

impl Display for PlayableContentMedia {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut str = String::default();

        str += self.title().unwrap_or("Untitled");
        if let Some(duration) = self.duration {
            str += &format!(" {duration}s");
        }
        if let Some(media_type) = self.media_type() {
            str += &format!(" [{media_type}]");
        }

        write!(f, "{str}")
    }
}
