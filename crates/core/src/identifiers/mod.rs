//! Types for [Matrix](https://matrix.org/) identifiers for devices, rooms,
//! room aliases and users.
//!
//! User, room and room alias IDs are validated when they are constructed or
//! deserialized. Device IDs are completely opaque and never validated.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

pub use trellis_identifiers_validation::Error as IdParseError;
use trellis_identifiers_validation::{room_alias_id, room_id, user_id};

mod device_id;

pub use self::device_id::OwnedDeviceId;

macro_rules! owned_identifier {
    (
        $( #[$meta:meta] )*
        $name:ident, $validate:path
    ) => {
        $( #[$meta] )*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(Box<str>);

        impl $name {
            /// Validates the given string and wraps it.
            pub fn parse(s: impl AsRef<str> + Into<Box<str>>) -> Result<Self, IdParseError> {
                $validate(s.as_ref())?;
                Ok(Self(s.into()))
            }

            /// Creates a string slice from this identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// The part of the identifier after the first colon, if any.
            ///
            /// Always present for user IDs and room aliases; room IDs of newer
            /// room versions are opaque and have none.
            pub fn server_name(&self) -> Option<&str> {
                self.0.split_once(':').map(|(_, server)| server)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdParseError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdParseError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                <str as fmt::Debug>::fmt(self.as_str(), f)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = crate::serde::deserialize_cow_str(deserializer)?;
                Self::parse(s).map_err(de::Error::custom)
            }
        }
    };
}

owned_identifier! {
    /// A Matrix [user ID], e.g. `@carl:example.com`.
    ///
    /// [user ID]: https://spec.matrix.org/latest/appendices/#user-identifiers
    OwnedUserId, user_id::validate
}

owned_identifier! {
    /// A Matrix [room ID], e.g. `!n8f893n9:example.com`.
    ///
    /// [room ID]: https://spec.matrix.org/latest/appendices/#room-ids
    OwnedRoomId, room_id::validate
}

owned_identifier! {
    /// A Matrix [room alias ID], e.g. `#room:example.com`.
    ///
    /// [room alias ID]: https://spec.matrix.org/latest/appendices/#room-aliases
    OwnedRoomAliasId, room_alias_id::validate
}

impl OwnedUserId {
    /// The part of the user ID between the sigil and the colon.
    pub fn localpart(&self) -> &str {
        let end = self.0.find(':').unwrap_or(self.0.len());
        &self.0[1..end]
    }
}
