use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::codec::{Decode, Fields};
use crate::error::{Entity, Result};

/// Anything in the catalog that identifies a person: an `id` and a display `name`.
///
/// Implemented by the credit roles ([`Cast`], [`Director`], [`Writer`]) and by
/// [`UserAPIModel`](crate::models::UserAPIModel). Downstream types can opt in as well:
///
/// ```
/// use netfun::models::Person;
///
/// struct Lawyer {
///     id: u64,
///     name: String,
/// }
///
/// impl Person for Lawyer {
///     fn id(&self) -> u64 {
///         self.id
///     }
///
///     fn name(&self) -> &str {
///         &self.name
///     }
/// }
/// ```
pub trait Person {
    fn id(&self) -> u64;
    fn name(&self) -> &str;
}

macro_rules! person_model {
    ($(#[$meta:meta])* $model:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
        pub struct $model {
            id: u64,
            name: String,
        }

        impl $model {
            pub fn new(id: u64, name: impl Into<String>) -> Self {
                Self {
                    id,
                    name: name.into(),
                }
            }
        }

        impl Person for $model {
            fn id(&self) -> u64 {
                self.id
            }

            fn name(&self) -> &str {
                &self.name
            }
        }

        impl Decode for $model {
            const ENTITY: Entity = Entity::$model;

            fn decode_fields(fields: &Fields<'_>) -> Result<Self> {
                Ok(Self {
                    id: fields.required("id")?,
                    name: fields.required("name")?,
                })
            }
        }

        impl Display for $model {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{} (#{})", self.name, self.id)
            }
        }
    };
}

person_model!(
    /// A cast member of a movie or a series
    Cast
);

person_model!(
    /// The director of a movie or a series
    Director
);

person_model!(
    /// A writer of a movie or a series
    Writer
);
