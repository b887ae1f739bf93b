use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::codec::{Decode, Fields};
use crate::error::{Entity, Result};
use crate::models::PlayableContentData;

/// A named row of playable content on the home feed, e.g. "Continue Watching"
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CollectionItemData {
    id: u64,
    title: String,
    items: Vec<PlayableContentData>,
}

impl CollectionItemData {
    pub fn new(id: u64, title: impl Into<String>, items: Vec<PlayableContentData>) -> Self {
        Self {
            id,
            title: title.into(),
            items,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Items in the order they were received
    pub fn items(&self) -> &[PlayableContentData] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Decode for CollectionItemData {
    const ENTITY: Entity = Entity::CollectionItemData;

    fn decode_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            id: fields.required("id")?,
            title: fields.required("title")?,
            items: fields.required("items")?,
        })
    }
}

impl Display for CollectionItemData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} item(s))", self.title, self.items.len())
    }
}
