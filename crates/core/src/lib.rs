//! Client-side data model for the Matrix protocol.
//!
//! The crate covers three things:
//!
//! * [`events`]: the generic [`Event`](events::Event) envelope and typed
//!   contents, including the algorithm-dependent `m.room.encrypted` codec.
//! * [`room`]: the per-room state store that keeps the latest state event of
//!   every `(type, state_key)` pair.
//! * [`directory`]: public room directory records.
//!
//! No cryptography happens here: ciphertext is carried, never decrypted.

pub mod directory;
pub mod encryption;
pub mod events;
pub mod identifiers;
pub mod room;
pub mod serde;
pub mod state;
mod time;

use std::fmt;

use ::serde::Deserialize;

pub use self::encryption::EventEncryptionAlgorithm;
pub use self::identifiers::*;
pub use self::room::Room;
pub use self::serde::{JsonObject, JsonValue, RawJsonValue};
pub use self::time::UnixMillis;

// Wrapper around `Box<str>` that cannot be used in a meaningful way outside of
// this crate. Used for string enums because their `_Custom` variant can't be
// truly private (only `#[doc(hidden)]`).
#[doc(hidden)]
#[derive(Clone, PartialEq, Eq, PartialOrd, Deserialize, Ord, Hash)]
pub struct PrivOwnedStr(Box<str>);

impl fmt::Debug for PrivOwnedStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
