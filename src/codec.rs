//! JSON decoding and encoding for catalog entities.
//!
//! Every entity decodes through [`Decode`], which walks a JSON object one key at a time with
//! [`Fields`]. Required keys go through [`Fields::required`] and fail the whole entity when absent;
//! optional keys go through [`Fields::optional`], which turns an absent or `null` key into `None`
//! independently of every other field.

use log::{debug, trace};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{DecodeError, Entity, Result};

// DECODE #####################################################################

/// An entity that can be built from a JSON object
pub trait Decode: Sized {
    const ENTITY: Entity;

    /// Builds the entity from the keys of an already-validated JSON object
    fn decode_fields(fields: &Fields<'_>) -> Result<Self>;

    /// Builds the entity from a JSON object. Nested entities are decoded through here as well.
    fn decode_object(object: &Map<String, Value>) -> Result<Self> {
        trace!("Decoding {}", Self::ENTITY);

        Self::decode_fields(&Fields::new(Self::ENTITY, object)).map_err(|err| {
            debug!("Could not decode {}: {err}", Self::ENTITY);
            err
        })
    }

    fn decode(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            DecodeError::MalformedDocument(format!(
                "expected a JSON object for {}, found {}",
                Self::ENTITY,
                describe(value)
            ))
        })?;

        Self::decode_object(object)
    }

    fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::decode(&value)
    }

    fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::decode(&value)
    }
}

/// The keys of a single JSON object, read on behalf of one entity
#[derive(Clone, Copy, Debug)]
pub struct Fields<'a> {
    entity: Entity,
    object: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn new(entity: Entity, object: &'a Map<String, Value>) -> Self {
        Self { entity, object }
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// Reads a key that must be present and non-null
    pub fn required<T: FieldValue>(&self, field: &'static str) -> Result<T> {
        match self.get(field) {
            Some(value) => T::from_field(self.entity, field, value),
            None => Err(DecodeError::MissingField(self.entity, field)),
        }
    }

    /// Reads a key that may be missing or `null`, either of which yields `None`
    pub fn optional<T: FieldValue>(&self, field: &'static str) -> Result<Option<T>> {
        self.get(field)
            .map(|value| T::from_field(self.entity, field, value))
            .transpose()
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.object.get(field).filter(|value| !value.is_null())
    }
}

/// A value that can sit under a key of an entity's JSON object
pub trait FieldValue: Sized {
    /// Description of the expected JSON type, used in [`DecodeError::TypeMismatch`]
    const EXPECTED: &'static str;

    fn from_field(entity: Entity, field: &'static str, value: &Value) -> Result<Self>;
}

impl FieldValue for u64 {
    const EXPECTED: &'static str = "a non-negative integer";

    fn from_field(entity: Entity, field: &'static str, value: &Value) -> Result<Self> {
        value
            .as_u64()
            .ok_or(DecodeError::TypeMismatch(entity, field, Self::EXPECTED))
    }
}

impl FieldValue for i64 {
    const EXPECTED: &'static str = "an integer";

    fn from_field(entity: Entity, field: &'static str, value: &Value) -> Result<Self> {
        value
            .as_i64()
            .ok_or(DecodeError::TypeMismatch(entity, field, Self::EXPECTED))
    }
}

impl FieldValue for String {
    const EXPECTED: &'static str = "a string";

    fn from_field(entity: Entity, field: &'static str, value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or(DecodeError::TypeMismatch(entity, field, Self::EXPECTED))
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    const EXPECTED: &'static str = "an array";

    fn from_field(entity: Entity, field: &'static str, value: &Value) -> Result<Self> {
        value
            .as_array()
            .ok_or(DecodeError::TypeMismatch(entity, field, Self::EXPECTED))?
            .iter()
            .map(|item| T::from_field(entity, field, item))
            .collect()
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ENCODE #####################################################################

/// An entity that can be written back out as JSON.
///
/// Optional fields that are `None` are left out of the output object.
pub trait Encode: Serialize {
    fn encode(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Wires a [`Decode`] entity into the rest of the JSON machinery: nesting under another entity's
/// keys, serde's `Deserialize`, and [`Encode`].
macro_rules! json_entity {
    ($($model:ty),+ $(,)?) => {$(
        impl $crate::codec::FieldValue for $model {
            const EXPECTED: &'static str = "an object";

            fn from_field(
                entity: $crate::error::Entity,
                field: &'static str,
                value: &::serde_json::Value,
            ) -> $crate::error::Result<Self> {
                match value.as_object() {
                    Some(object) => <$model as $crate::codec::Decode>::decode_object(object),
                    None => Err($crate::error::DecodeError::TypeMismatch(
                        entity,
                        field,
                        <Self as $crate::codec::FieldValue>::EXPECTED,
                    )),
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $model {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                <$model as $crate::codec::Decode>::decode(&value)
                    .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }

        impl $crate::codec::Encode for $model {}
    )+};
}

pub(crate) use json_entity;
