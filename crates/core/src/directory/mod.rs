//! Common types for room directory endpoints.

use serde::{Deserialize, Serialize};

use crate::{OwnedRoomAliasId, OwnedRoomId};

/// A chunk of a room list response, describing one room.
///
/// To create an instance of this type, first create a `PublicRoomsChunkInit`
/// and convert it via `PublicRoomsChunk::from` / `.into()`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PublicRoomsChunk {
    /// The canonical alias of the room, if any.
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::serde::empty_string_as_none"
    )]
    pub canonical_alias: Option<OwnedRoomAliasId>,

    /// The name of the room, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The number of members joined to the room.
    #[serde(default)]
    pub num_joined_members: u64,

    /// The ID of the room.
    pub room_id: OwnedRoomId,

    /// The topic of the room, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Whether the room may be viewed by guest users without joining.
    #[serde(default)]
    pub world_readable: bool,

    /// Whether guest users may join the room and participate in it.
    ///
    /// If they can, they will be subject to ordinary power level rules like any
    /// other user.
    #[serde(default)]
    pub guest_can_join: bool,

    /// The URL for the room's avatar, if one is set.
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::serde::empty_string_as_none"
    )]
    pub avatar_url: Option<String>,

    /// Other aliases of the room, as listed by older servers.
    ///
    /// Kept as plain strings: servers have been seen to publish aliases that
    /// do not validate.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::serde::none_as_default"
    )]
    pub aliases: Vec<String>,
}

/// Initial set of mandatory fields of `PublicRoomsChunk`.
///
/// This struct will not be updated even if additional fields are added to
/// `PublicRoomsChunk` in a new (non-breaking) release.
#[derive(Debug)]
#[allow(clippy::exhaustive_structs)]
pub struct PublicRoomsChunkInit {
    /// The number of members joined to the room.
    pub num_joined_members: u64,

    /// The ID of the room.
    pub room_id: OwnedRoomId,

    /// Whether the room may be viewed by guest users without joining.
    pub world_readable: bool,

    /// Whether guest users may join the room and participate in it.
    pub guest_can_join: bool,
}

impl From<PublicRoomsChunkInit> for PublicRoomsChunk {
    fn from(init: PublicRoomsChunkInit) -> Self {
        let PublicRoomsChunkInit {
            num_joined_members,
            room_id,
            world_readable,
            guest_can_join,
        } = init;

        Self {
            canonical_alias: None,
            name: None,
            num_joined_members,
            room_id,
            topic: None,
            world_readable,
            guest_can_join,
            avatar_url: None,
            aliases: Vec::new(),
        }
    }
}

/// One page of the public room directory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PublicRoomsResponse {
    /// A paginated chunk of public rooms.
    #[serde(default)]
    pub chunk: Vec<PublicRoomsChunk>,

    /// A pagination token for the response.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde::empty_string_as_none"
    )]
    pub next_batch: Option<String>,

    /// A pagination token that allows fetching previous results.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde::empty_string_as_none"
    )]
    pub prev_batch: Option<String>,

    /// An estimate on the total number of public rooms, if the server has an
    /// estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_room_count_estimate: Option<u64>,
}

impl PublicRoomsResponse {
    /// Creates a response holding a single page with no pagination tokens.
    pub fn new(chunk: Vec<PublicRoomsChunk>) -> Self {
        Self {
            chunk,
            ..Default::default()
        }
    }

    /// Whether the server has more rooms after this page.
    pub fn has_next_page(&self) -> bool {
        self.next_batch.is_some()
    }
}
