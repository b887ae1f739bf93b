use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::codec::{Decode, Fields};
use crate::error::{Entity, Result};
use crate::models::Person;
use crate::types::Username;

// PROFILE ####################################################################

/// The signed-in user's profile, as embedded in the home feed
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UserProfileData {
    id: u64,
    name: String,
    username: Username,
}

impl UserProfileData {
    pub fn new(id: u64, name: impl Into<String>, username: Username) -> Self {
        Self {
            id,
            name: name.into(),
            username,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> &Username {
        &self.username
    }
}

impl Decode for UserProfileData {
    const ENTITY: Entity = Entity::UserProfileData;

    fn decode_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            id: fields.required("id")?,
            name: fields.required("name")?,
            username: fields.required("username")?,
        })
    }
}

impl Display for UserProfileData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (@{})", self.name, self.username)
    }
}

// USER #######################################################################

/// One entry of the API's list of profiles.
///
/// ```json
/// {
///     "id": 1,
///     "name": "Max Payne",
///     "username": "max9"
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UserAPIModel {
    id: u64,
    name: String,
    username: Username,
}

impl UserAPIModel {
    pub fn new(id: u64, name: impl Into<String>, username: Username) -> Self {
        Self {
            id,
            name: name.into(),
            username,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the same user under a new display name. The username never changes.
    pub fn renamed(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }
}

impl Person for UserAPIModel {
    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Decode for UserAPIModel {
    const ENTITY: Entity = Entity::UserAPIModel;

    fn decode_fields(fields: &Fields<'_>) -> Result<Self> {
        Ok(Self {
            id: fields.required("id")?,
            name: fields.required("name")?,
            username: fields.required("username")?,
        })
    }
}

impl Display for UserAPIModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (@{})", self.name, self.username)
    }
}

#[cfg(test)]
mod user_profile_data_tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::codec::Encode;
    use crate::error::DecodeError;

    #[test]
    fn test_decode() {
        let profile =
            UserProfileData::from_json(r#"{ "id": 1, "name": "Max Payne", "username": "max9" }"#)
                .unwrap();

        assert_eq!(1, profile.id());
        assert_eq!("Max Payne", profile.name());
        assert_eq!("max9", profile.username().as_str());
    }

    #[test]
    fn test_decode_missing_username() {
        let result = UserProfileData::decode(&json!({ "id": 1, "name": "Max Payne" }));
        assert_eq!(
            Err(DecodeError::MissingField(Entity::UserProfileData, "username")),
            result
        );
    }

    #[test]
    fn test_round_trip() {
        let profile = UserProfileData::new(1, "Max Payne", Username::new("max9"));
        assert_eq!(
            json!({ "id": 1, "name": "Max Payne", "username": "max9" }),
            profile.encode().unwrap()
        );
        assert_eq!(profile, UserProfileData::decode(&profile.encode().unwrap()).unwrap());
    }
}
