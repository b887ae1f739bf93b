use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDate};
use derive_builder::Builder;
use serde::Serialize;
use strum::EnumString;

use crate::codec::{Decode, Fields};
use crate::error::{Entity, Result};
use crate::models::{Cast, Director, PlayableContentMedia, Writer};

/// The known values of a playable content's `type`
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ContentKind {
    Movie,
    Series,
}

// PLAYABLE CONTENT ###########################################################

/// A movie or a series, along with its playable media and credits
#[derive(Builder, Clone, Debug, Eq, PartialEq, Serialize)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct PlayableContentData {
    id: u64,
    title: String,
    /// `movie` or `series`, kept verbatim
    #[serde(rename = "type")]
    content_type: String,
    /// A movie usually carries one media item; a series carries one per episode
    #[builder(default)]
    media: Vec<PlayableContentMedia>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    director: Option<Director>,
    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    writers: Option<Vec<Writer>>,
    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    cast: Option<Vec<Cast>>,
    /// ISO-8601 release date, kept verbatim
    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    released_date: Option<String>,
}

impl PlayableContentData {
    /// Builds content without any of the optional metadata.
    /// Use [`PlayableContentDataBuilder`] to attach credits or a release date.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        content_type: impl Into<String>,
        media: Vec<PlayableContentMedia>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content_type: content_type.into(),
            media,
            director: None,
            writers: None,
            cast: None,
            released_date: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// `None` when `type` is not one of the known kinds
    pub fn kind(&self) -> Option<ContentKind> {
        self.content_type.parse().ok()
    }

    pub fn media(&self) -> &[PlayableContentMedia] {
        &self.media
    }

    pub fn director(&self) -> Option<&Director> {
        self.director.as_ref()
    }

    pub fn writers(&self) -> Option<&[Writer]> {
        self.writers.as_deref()
    }

    pub fn cast(&self) -> Option<&[Cast]> {
        self.cast.as_deref()
    }

    pub fn released_date(&self) -> Option<&str> {
        self.released_date.as_deref()
    }

    /// Parses `releasedDate` as either a plain calendar date or an RFC 3339 timestamp
    pub fn released_on(&self) -> Option<NaiveDate> {
        let released = self.released_date.as_deref()?;

        NaiveDate::parse_from_str(released, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(released)
                    .ok()
                    .map(|date| date.date_naive())
            })
    }

    /// Sum of the known media durations in seconds, saturating at the bounds of `i64`
    pub fn total_duration(&self) -> i64 {
        self.media
            .iter()
            .filter_map(|m| m.duration())
            .fold(0, i64::saturating_add)
    }
}

impl Decode for PlayableContentData {
    const ENTITY: Entity = Entity::PlayableContentData;

    fn decode_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            id: fields.required("id")?,
            title: fields.required("title")?,
            content_type: fields.required("type")?,
            media: fields.required("media")?,
            director: fields.optional("director")?,
            writers: fields.optional("writers")?,
            cast: fields.optional("cast")?,
            released_date: fields.optional("releasedDate")?,
        })
    }
}

impl Display for PlayableContentData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut str = String::default();

        str += &format!("{} ", self.title);
        str += &format!("[{}] ", self.content_type);
        str += &format!("{} media item(s)", self.media.len());
        if let Some(released) = self.released_date() {
            str += &format!(", released {released}");
        }

        write!(f, "{str}")
    }
}
