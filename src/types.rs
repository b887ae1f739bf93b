use nutype::nutype;
use serde_json::Value;

use crate::codec::FieldValue;
use crate::error::{Entity, Result};

/// A user's login handle. Once built it cannot be changed.
#[nutype(derive(
    Clone,
    Debug,
    Display,
    Serialize,
    AsRef,
    Deref,
    PartialEq,
    Eq,
    Hash
))]
pub struct Username(String);

impl FieldValue for Username {
    const EXPECTED: &'static str = <String as FieldValue>::EXPECTED;

    fn from_field(entity: Entity, field: &'static str, value: &Value) -> Result<Self> {
        String::from_field(entity, field, value).map(Username::new)
    }
}
