//! Types for the [`m.room_key`] event.
//!
//! [`m.room_key`]: https://spec.matrix.org/latest/client-server-api/#mroom_key

use serde::{Deserialize, Serialize};

use crate::{EventEncryptionAlgorithm, OwnedRoomId};

/// The content of an `m.room_key` event.
///
/// Typically encrypted as an `m.room.encrypted` event, then sent as a to-device
/// event.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToDeviceRoomKeyEventContent {
    /// The encryption algorithm the key in this event is to be used with.
    ///
    /// Must be `m.megolm.v1.aes-sha2`.
    pub algorithm: EventEncryptionAlgorithm,

    /// The room where the key is used.
    pub room_id: OwnedRoomId,

    /// The ID of the session that the key is for.
    pub session_id: String,

    /// The key to be exchanged.
    pub session_key: String,
}

impl ToDeviceRoomKeyEventContent {
    /// Creates a new `ToDeviceRoomKeyEventContent` with the given algorithm,
    /// room ID, session ID and session key.
    pub fn new(
        algorithm: EventEncryptionAlgorithm,
        room_id: OwnedRoomId,
        session_id: String,
        session_key: String,
    ) -> Self {
        Self {
            algorithm,
            room_id,
            session_id,
            session_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{from_value as from_json_value, json, to_value as to_json_value};

    use super::ToDeviceRoomKeyEventContent;
    use crate::{EventEncryptionAlgorithm, OwnedRoomId};

    #[test]
    fn serialization() {
        let content = ToDeviceRoomKeyEventContent {
            algorithm: EventEncryptionAlgorithm::MegolmV1AesSha2,
            room_id: OwnedRoomId::try_from("!testroomid:example.org").unwrap(),
            session_id: "SessId".into(),
            session_key: "SessKey".into(),
        };

        assert_eq!(
            to_json_value(content).unwrap(),
            json!({
                "algorithm": "m.megolm.v1.aes-sha2",
                "room_id": "!testroomid:example.org",
                "session_id": "SessId",
                "session_key": "SessKey",
            })
        );
    }

    #[test]
    fn opaque_room_id_is_accepted() {
        let content: ToDeviceRoomKeyEventContent = from_json_value(json!({
            "algorithm": "m.megolm.v1.aes-sha2",
            "room_id": "!31hneApxJ_1o-63DmFrpeqnkFfWppnzWso1JvH3ogLM",
            "session_id": "SessId",
            "session_key": "SessKey",
        }))
        .unwrap();
        assert_eq!(content.room_id, "!31hneApxJ_1o-63DmFrpeqnkFfWppnzWso1JvH3ogLM");
    }

    #[test]
    fn invalid_room_id_is_rejected() {
        let result = from_json_value::<ToDeviceRoomKeyEventContent>(json!({
            "algorithm": "m.megolm.v1.aes-sha2",
            "room_id": "testroomid",
            "session_id": "SessId",
            "session_key": "SessKey",
        }));
        assert!(result.is_err());
    }
}
