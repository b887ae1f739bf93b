use strum::{Display, EnumString, IntoStaticStr};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DecodeError>;

/// The catalog entities, as named in decode errors
#[derive(Clone, Copy, Debug, Display, EnumString, IntoStaticStr, Eq, Hash, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum Entity {
    Cast,
    Director,
    Writer,
    PlayableContentMedia,
    PlayableContentData,
    CollectionItemData,
    UserProfileData,
    HomeContentAPIModel,
    UserAPIModel,
}

/// Reasons a JSON document could not be turned into a catalog entity.
///
/// Decoding is atomic: when any of these is returned, no part of the entity is
/// handed back to the caller.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// A required key was absent or `null`
    #[error("{0} is missing required field `{1}`")]
    MissingField(Entity, &'static str),
    /// A key was present but held a value of the wrong JSON type
    #[error("{0} field `{1}` should be {2}")]
    TypeMismatch(Entity, &'static str, &'static str),
    /// The input is not well-formed JSON, or its top level is not an object
    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::MalformedDocument(err.to_string())
    }
}
