/*!
`netfun` holds the data models of the NetFun media-streaming catalog (users, cast and crew,
playable media, collections and the home feed) together with the rules for reading them from,
and writing them back to, JSON.

```
use netfun::codec::Decode;
use netfun::models::PlayableContentMedia;

let episode = PlayableContentMedia::from_json(r#"{ "duration": 95 }"#).unwrap();
assert_eq!(Some(95), episode.duration());
assert_eq!(None, episode.title());
```
 */

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod types;

pub use codec::{Decode, Encode};
pub use error::{DecodeError, Entity};
