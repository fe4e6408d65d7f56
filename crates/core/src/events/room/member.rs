//! Types for the [`m.room.member`] event.
//!
//! [`m.room.member`]: https://spec.matrix.org/latest/client-server-api/#mroommember

use serde::{Deserialize, Serialize};

use crate::serde::string_enum;

string_enum! {
    /// The membership state of a user.
    pub enum MembershipState {
        /// The user is banned.
        Ban = "ban",

        /// The user has been invited.
        Invite = "invite",

        /// The user has joined.
        Join = "join",

        /// The user has requested to join.
        Knock = "knock",

        /// The user has left.
        Leave = "leave",
    }
}

/// The content of an `m.room.member` event.
///
/// The state key of the event is the user ID whose membership is described.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoomMemberEventContent {
    /// The membership state of this user.
    pub membership: MembershipState,

    /// The display name for this user, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayname: Option<String>,

    /// The avatar URL for this user, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// User-supplied text for why their membership has changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RoomMemberEventContent {
    /// Creates a new `RoomMemberEventContent` with the given membership state.
    pub fn new(membership: MembershipState) -> Self {
        Self {
            membership,
            displayname: None,
            avatar_url: None,
            reason: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{from_value as from_json_value, json, to_value as to_json_value};

    use super::{MembershipState, RoomMemberEventContent};

    #[test]
    fn serialize_minimal() {
        let content = RoomMemberEventContent::new(MembershipState::Join);
        assert_eq!(to_json_value(content).unwrap(), json!({ "membership": "join" }));
    }

    #[test]
    fn deserialize_with_profile() {
        let content: RoomMemberEventContent = from_json_value(json!({
            "membership": "invite",
            "displayname": "Alice",
            "reason": "come along",
        }))
        .unwrap();

        assert_eq!(content.membership, MembershipState::Invite);
        assert_eq!(content.displayname.as_deref(), Some("Alice"));
        assert_eq!(content.avatar_url, None);
    }

    #[test]
    fn custom_membership_is_kept() {
        let content: RoomMemberEventContent = from_json_value(json!({ "membership": "org.example.lurk" })).unwrap();
        assert_eq!(content.membership.as_str(), "org.example.lurk");
    }
}
