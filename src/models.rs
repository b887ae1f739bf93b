//! The catalog entities and their JSON shapes

use crate::codec::json_entity;

pub mod collection;
pub mod content;
pub mod home;
pub mod media;
pub mod person;
pub mod user;

pub use collection::CollectionItemData;
pub use content::{ContentKind, PlayableContentData, PlayableContentDataBuilder};
pub use home::HomeContentAPIModel;
pub use media::{MediaKind, PlayableContentMedia};
pub use person::{Cast, Director, Person, Writer};
pub use user::{UserAPIModel, UserProfileData};

json_entity!(
    Cast,
    Director,
    Writer,
    PlayableContentMedia,
    PlayableContentData,
    CollectionItemData,
    UserProfileData,
    HomeContentAPIModel,
    UserAPIModel,
);
