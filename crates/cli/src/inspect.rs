//! Loading of JSON dumps and the work behind each subcommand.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::core::events::room::encrypted::EncryptedEventContent;
use crate::core::events::room::member::MembershipState;
use crate::core::events::{Event, EventType};
use crate::core::{JsonValue, OwnedRoomId, OwnedUserId, Room};
use crate::{AppError, AppResult};

/// Reads the whole input, `-` meaning stdin.
pub fn read_input(path: &Path) -> AppResult<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        Ok(fs::read(path)?)
    }
}

/// Parses an event dump: either a JSON array of events or an object with an
/// `events` array.
pub fn load_events(bytes: &[u8]) -> AppResult<Vec<Event>> {
    match serde_json::from_slice(bytes)? {
        events @ JsonValue::Array(_) => Ok(serde_json::from_value(events)?),
        JsonValue::Object(mut dump) => match dump.remove("events") {
            Some(events) => Ok(serde_json::from_value(events)?),
            None => Err(AppError::public("event dump object has no `events` array")),
        },
        _ => Err(AppError::public(
            "event dump must be an array of events or an object with an `events` array",
        )),
    }
}

/// Decodes encrypted content given either bare or as the content of an
/// `m.room.encrypted` event.
pub fn decode_encrypted(bytes: &[u8]) -> AppResult<EncryptedEventContent> {
    let value: JsonValue = serde_json::from_slice(bytes)?;
    if value.get("type").is_some() && value.get("content").is_some() {
        let event: Event = serde_json::from_value(value)?;
        if event.event_type != EventType::RoomEncrypted {
            return Err(AppError::public(format!(
                "expected an `m.room.encrypted` event, got `{}`",
                event.event_type
            )));
        }
        return Ok(EncryptedEventContent::from_event_content(&event.content)?);
    }
    Ok(EncryptedEventContent::from_json_slice(bytes)?)
}

/// Decodes and re-encodes encrypted content, returning the pretty JSON.
pub fn decode(bytes: &[u8]) -> AppResult<String> {
    let content = decode_encrypted(bytes)?;
    tracing::info!(
        algorithm = %content.algorithm,
        ciphertext = content.ciphertext.kind(),
        sender_key = %content.sender_key,
        session_id = %content.session_id,
        "decoded encrypted content"
    );
    if let Some(ciphertexts) = content.olm_ciphertext() {
        for (recipient_key, ciphertext) in ciphertexts {
            tracing::debug!(recipient_key = %recipient_key, message_type = ?ciphertext.message_type, "olm ciphertext");
        }
    }

    let encoded: JsonValue = serde_json::from_slice(&content.to_json_vec()?)?;
    Ok(serde_json::to_string_pretty(&encoded)?)
}

/// Applies every state event of the dump, in order, to a fresh room.
///
/// The room is the one named by the first event that carries a room ID, else
/// `default_room_id`. Non-state events are skipped.
pub fn build_room(events: Vec<Event>, default_room_id: OwnedRoomId) -> AppResult<Room> {
    let room_id = events
        .iter()
        .find_map(|event| event.room_id.clone())
        .unwrap_or(default_room_id);
    let mut room = Room::new(room_id);

    for event in events {
        if !event.is_state() {
            tracing::debug!(event_type = %event.event_type, "skipping non-state event");
            continue;
        }
        if event.room_id.as_ref().is_some_and(|id| id != room.room_id()) {
            tracing::warn!(
                event_type = %event.event_type,
                room_id = %room.room_id(),
                "applying state event from another room"
            );
        }
        room.update_state(event)?;
    }
    tracing::info!(room_id = %room.room_id(), state_len = room.state_len(), "room state built");
    Ok(room)
}

/// The lines printed by the `state` command.
pub fn state(room: &Room, user_id: Option<&OwnedUserId>) -> Vec<String> {
    match user_id {
        Some(user_id) => vec![format!("{user_id} {}", room.get_membership_state(user_id))],
        None => room
            .members_with_membership(&MembershipState::Join)
            .into_iter()
            .map(|user_id| user_id.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches2::assert_matches;
    use serde_json::json;

    use super::{build_room, decode, decode_encrypted, load_events, read_input, state};
    use crate::AppError;
    use crate::core::events::room::encrypted::CodecError;
    use crate::core::{OwnedRoomId, OwnedUserId};

    fn default_room() -> OwnedRoomId {
        OwnedRoomId::try_from("!inspect:localhost").unwrap()
    }

    fn dump() -> serde_json::Value {
        json!([
            {
                "type": "m.room.create",
                "state_key": "",
                "room_id": "!lobby:example.org",
                "content": { "creator": "@alice:example.org" },
            },
            {
                "type": "m.room.member",
                "state_key": "@alice:example.org",
                "content": { "membership": "join" },
            },
            {
                "type": "m.room.message",
                "content": { "msgtype": "m.text", "body": "hello" },
            },
            {
                "type": "m.room.member",
                "state_key": "@bob:example.org",
                "content": { "membership": "join" },
            },
            {
                "type": "m.room.member",
                "state_key": "@bob:example.org",
                "content": { "membership": "leave" },
            },
        ])
    }

    #[test]
    fn load_array_and_wrapped_dumps() {
        let bytes = serde_json::to_vec(&dump()).unwrap();
        assert_eq!(load_events(&bytes).unwrap().len(), 5);

        let wrapped = serde_json::to_vec(&json!({ "events": dump() })).unwrap();
        assert_eq!(load_events(&wrapped).unwrap().len(), 5);
    }

    #[test]
    fn reject_other_dumps() {
        assert_matches!(load_events(br#"{"chunk": []}"#), Err(AppError::Public(_)));
        assert_matches!(load_events(b"42"), Err(AppError::Public(_)));
        assert_matches!(load_events(b"[{"), Err(AppError::SerdeJson(_)));
    }

    #[test]
    fn read_dump_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&serde_json::to_vec(&dump()).unwrap()).unwrap();

        let bytes = read_input(file.path()).unwrap();
        assert_eq!(load_events(&bytes).unwrap().len(), 5);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_matches!(read_input(&dir.path().join("absent.json")), Err(AppError::Io(_)));
    }

    #[test]
    fn build_room_from_dump() {
        let events = load_events(&serde_json::to_vec(&dump()).unwrap()).unwrap();
        let room = build_room(events, default_room()).unwrap();

        assert_eq!(room.room_id(), "!lobby:example.org");
        assert_eq!(room.state_len(), 3);
        assert_eq!(state(&room, None), ["@alice:example.org"]);

        let bob = OwnedUserId::try_from("@bob:example.org").unwrap();
        assert_eq!(state(&room, Some(&bob)), ["@bob:example.org leave"]);
    }

    #[test]
    fn build_room_falls_back_to_default_id() {
        let events = load_events(br#"[{"type": "m.room.name", "state_key": "", "content": {"name": "N"}}]"#).unwrap();
        let room = build_room(events, default_room()).unwrap();
        assert_eq!(room.room_id(), "!inspect:localhost");
    }

    #[test]
    fn decode_bare_and_wrapped_content() {
        let content = json!({
            "algorithm": "m.megolm.v1.aes-sha2",
            "sender_key": "sender",
            "device_id": "DEVICE",
            "session_id": "session",
            "ciphertext": "opaque",
        });

        let bare = decode_encrypted(&serde_json::to_vec(&content).unwrap()).unwrap();
        assert_eq!(bare.megolm_ciphertext(), Some("opaque"));

        let event = json!({ "type": "m.room.encrypted", "content": content });
        let wrapped = decode_encrypted(&serde_json::to_vec(&event).unwrap()).unwrap();
        assert_eq!(wrapped, bare);

        let printed: serde_json::Value =
            serde_json::from_str(&decode(&serde_json::to_vec(&event).unwrap()).unwrap()).unwrap();
        assert_eq!(printed, content);
    }

    #[test]
    fn decode_rejects_other_events_and_shapes() {
        let event = json!({ "type": "m.room.message", "content": { "body": "hi" } });
        assert_matches!(
            decode_encrypted(&serde_json::to_vec(&event).unwrap()),
            Err(AppError::Public(_))
        );

        let mismatched = json!({
            "algorithm": "m.megolm.v1.aes-sha2",
            "ciphertext": { "key": { "body": "b", "type": 0 } },
        });
        assert_matches!(
            decode_encrypted(&serde_json::to_vec(&mismatched).unwrap()),
            Err(AppError::Codec(CodecError::Decode(_)))
        );
    }
}
