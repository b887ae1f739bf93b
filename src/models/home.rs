use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::codec::{Decode, Fields};
use crate::error::{Entity, Result};
use crate::models::{CollectionItemData, PlayableContentData, UserProfileData};

/// The home page feed: the viewer's profile plus the rows of collections to show them.
///
/// `id` is optional on the wire and falls back to `0`; it is always written back out.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct HomeContentAPIModel {
    id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<UserProfileData>,
    collection: Vec<CollectionItemData>,
}

impl HomeContentAPIModel {
    pub fn new(collection: Vec<CollectionItemData>) -> Self {
        Self {
            collection,
            ..Self::default()
        }
    }

    pub fn with_id(self, id: u64) -> Self {
        Self { id, ..self }
    }

    pub fn with_profile(self, profile: UserProfileData) -> Self {
        Self {
            profile: Some(profile),
            ..self
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn profile(&self) -> Option<&UserProfileData> {
        self.profile.as_ref()
    }

    pub fn collection(&self) -> &[CollectionItemData] {
        &self.collection
    }

    /// Every playable item across all collections, row by row
    pub fn items(&self) -> impl Iterator<Item = &PlayableContentData> {
        self.collection.iter().flat_map(|c| c.items())
    }
}

impl Decode for HomeContentAPIModel {
    const ENTITY: Entity = Entity::HomeContentAPIModel;

    fn decode_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            id: fields.optional("id")?.unwrap_or_default(),
            profile: fields.optional("profile")?,
            collection: fields.required("collection")?,
        })
    }
}

impl Display for HomeContentAPIModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut output = String::default();

        if let Some(profile) = &self.profile {
            output += &format!("Home feed for {profile}\n");
        }
        for collection in &self.collection {
            output += &format!("  {collection}\n");
            for item in collection.items() {
                output += &format!("    {item}\n");
            }
        }

        write!(f, "{}", output.trim_end())
    }
}

#[cfg(test)]
mod home_content_api_model_tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::codec::Encode;
    use crate::error::DecodeError;
    use crate::models::{ContentKind, Person};
    use crate::types::Username;

    const HOME_FEED: &str = include_str!("fixtures/home_feed.json");

    #[test]
    fn test_decode_home_feed() {
        let home = HomeContentAPIModel::from_json(HOME_FEED).unwrap();

        assert_eq!(1, home.id());
        assert_eq!(
            Some(&UserProfileData::new(1, "Max Payne", Username::new("max9"))),
            home.profile()
        );
        assert_eq!(1, home.collection().len());

        let continue_watching = &home.collection()[0];
        assert_eq!("Continue Watching", continue_watching.title());
        assert_eq!(2, continue_watching.len());

        let ice_age = &continue_watching.items()[0];
        assert_eq!("Ice Age 1", ice_age.title());
        assert_eq!(Some(ContentKind::Movie), ice_age.kind());
        assert_eq!(Some("Chris Wedge"), ice_age.director().map(|d| d.name()));
        assert_eq!(Some(2), ice_age.writers().map(|w| w.len()));
        assert_eq!(Some(3), ice_age.cast().map(|c| c.len()));

        let arya = &continue_watching.items()[1];
        assert_eq!("Arya 2", arya.title());
        assert_eq!(Some(ContentKind::Series), arya.kind());
    }

    #[test]
    fn test_decode_home_feed_episodes_in_order() {
        let home = HomeContentAPIModel::from_json(HOME_FEED).unwrap();
        let media = home.collection()[0].items()[1].media();

        assert_eq!(3, media.len());
        assert_eq!(
            vec![Some("Episode 1"), Some("Episode 2"), Some("Episode 3")],
            media.iter().map(|m| m.title()).collect::<Vec<_>>()
        );
        assert_eq!(
            vec![Some(45), Some(40), Some(55)],
            media.iter().map(|m| m.duration()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_decode_home_feed_through_serde() {
        let decoded = HomeContentAPIModel::from_json(HOME_FEED).unwrap();
        let deserialized: HomeContentAPIModel = serde_json::from_str(HOME_FEED).unwrap();
        assert_eq!(decoded, deserialized);
    }

    #[test]
    fn test_decode_default_id() {
        let home = HomeContentAPIModel::decode(&json!({ "collection": [] })).unwrap();
        assert_eq!(0, home.id());
        assert_eq!(None, home.profile());
        assert_eq!(HomeContentAPIModel::new(vec![]), home);

        let home = HomeContentAPIModel::decode(&json!({ "id": null, "collection": [] })).unwrap();
        assert_eq!(0, home.id());
    }

    #[test]
    fn test_decode_missing_collection() {
        let result = HomeContentAPIModel::decode(&json!({ "id": 4 }));
        assert_eq!(
            Err(DecodeError::MissingField(
                Entity::HomeContentAPIModel,
                "collection"
            )),
            result
        );
    }

    #[test]
    fn test_decode_not_an_object() {
        let result = HomeContentAPIModel::from_json("[]");
        assert!(matches!(result, Err(DecodeError::MalformedDocument(_))));

        let result = HomeContentAPIModel::from_slice(b"{ \"collection\": [ ");
        assert!(matches!(result, Err(DecodeError::MalformedDocument(_))));
    }

    #[test]
    fn test_items_flattens_collections() {
        let home = HomeContentAPIModel::new(vec![
            CollectionItemData::new(
                1,
                "Continue Watching",
                vec![PlayableContentData::new(101, "Ice Age 1", "movie", vec![])],
            ),
            CollectionItemData::new(
                2,
                "Trending",
                vec![
                    PlayableContentData::new(102, "Arya 2", "series", vec![]),
                    PlayableContentData::new(103, "Ice Age 2", "movie", vec![]),
                ],
            ),
        ]);

        assert_eq!(
            vec![101, 102, 103],
            home.items().map(|item| item.id()).collect::<Vec<u64>>()
        );
    }

    #[test]
    fn test_encode_always_emits_id() {
        let encoded = HomeContentAPIModel::new(vec![]).encode().unwrap();
        assert_eq!(json!({ "id": 0, "collection": [] }), encoded);
    }

    #[test]
    fn test_round_trip() {
        let home = HomeContentAPIModel::from_json(HOME_FEED).unwrap();
        let encoded = home.encode().unwrap();
        assert_eq!(home, HomeContentAPIModel::decode(&encoded).unwrap());

        let home = HomeContentAPIModel::new(vec![])
            .with_id(7)
            .with_profile(UserProfileData::new(2, "Mona Sax", Username::new("mona")));
        let json = home.to_json().unwrap();
        assert_eq!(home, HomeContentAPIModel::from_json(&json).unwrap());
    }

    #[test]
    fn test_display() {
        let home = HomeContentAPIModel::from_json(HOME_FEED).unwrap();
        let expected = [
            "Home feed for Max Payne (@max9)",
            "  Continue Watching (2 item(s))",
            "    Ice Age 1 [movie] 1 media item(s), released 2002-03-15",
            "    Arya 2 [series] 3 media item(s)",
        ]
        .join("\n");

        assert_eq!(expected, home.to_string());
    }
}
