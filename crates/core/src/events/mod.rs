//! (De)serializable types for the events in the [Matrix](https://matrix.org)
//! specification.
//!
//! Every event shares the same envelope, [`Event`]: a type, an optional state
//! key and a JSON object of content. Typed contents live in the submodules and
//! are read out of the envelope with [`EventContent::deserialize_as`].
//!
//! State events are the ones that carry a state key. They are scoped by
//! `(type, state_key)` and replace whatever was there before, see
//! [`Room`](crate::Room).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, ser};

use crate::serde::{JsonObject, JsonValue, string_enum};
use crate::{OwnedRoomId, OwnedUserId, UnixMillis};

pub mod forwarded_room_key;
pub mod room;
pub mod room_key;
pub mod room_key_request;

string_enum! {
    /// The type of an event.
    pub enum EventType {
        /// `m.room.create`
        RoomCreate = "m.room.create",

        /// `m.room.encrypted`
        RoomEncrypted = "m.room.encrypted",

        /// `m.room.encryption`
        RoomEncryption = "m.room.encryption",

        /// `m.room.member`
        RoomMember = "m.room.member",

        /// `m.room.message`
        RoomMessage = "m.room.message",

        /// `m.room.name`
        RoomName = "m.room.name",

        /// `m.room.topic`
        RoomTopic = "m.room.topic",

        /// `m.room_key`
        RoomKey = "m.room_key",

        /// `m.forwarded_room_key`
        ForwardedRoomKey = "m.forwarded_room_key",

        /// `m.room_key_request`
        RoomKeyRequest = "m.room_key_request",
    }
}

/// A Matrix event as received from a homeserver.
///
/// Only the fields needed to route the event are typed; the content stays a
/// raw JSON object until a caller asks for a specific shape.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Event {
    /// The type of the event.
    #[serde(rename = "type")]
    pub event_type: EventType,

    /// The state key, present only on state events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_key: Option<String>,

    /// The event content.
    #[serde(default)]
    pub content: EventContent,

    /// The user who sent the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<OwnedUserId>,

    /// The globally unique event identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,

    /// Timestamp on the originating homeserver when the event was sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_server_ts: Option<UnixMillis>,

    /// The room the event belongs to, absent in sync timelines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<OwnedRoomId>,
}

impl Event {
    /// Creates a new non-state `Event` with the given type and content.
    pub fn new(event_type: EventType, content: EventContent) -> Self {
        Self {
            event_type,
            state_key: None,
            content,
            sender: None,
            event_id: None,
            origin_server_ts: None,
            room_id: None,
        }
    }

    /// Creates a new state `Event` with the given type, state key and content.
    pub fn new_state(event_type: EventType, state_key: impl Into<String>, content: EventContent) -> Self {
        Self {
            state_key: Some(state_key.into()),
            ..Self::new(event_type, content)
        }
    }

    /// Sets the sender of the event.
    pub fn with_sender(mut self, sender: OwnedUserId) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Sets the event ID of the event.
    pub fn with_event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }

    /// Whether this is a state event, i.e. carries a state key.
    pub fn is_state(&self) -> bool {
        self.state_key.is_some()
    }

    /// Deserializes the content into `T`.
    pub fn content_as<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        self.content.deserialize_as()
    }
}

/// The content of an event: a JSON object with raw key/value access.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct EventContent(JsonObject);

impl EventContent {
    /// Creates an empty content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes a typed content.
    ///
    /// Fails if `content` does not serialize to a JSON object.
    pub fn from_typed<T: Serialize>(content: &T) -> serde_json::Result<Self> {
        match serde_json::to_value(content)? {
            JsonValue::Object(raw) => Ok(Self(raw)),
            other => Err(ser::Error::custom(format!(
                "event content must be a JSON object, got {other}"
            ))),
        }
    }

    /// The raw value under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    /// The string under `key`, if there is one and it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Deserializes the content into `T`.
    pub fn deserialize_as<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(JsonValue::Object(self.0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{from_value as from_json_value, json, to_value as to_json_value};

    use super::{Event, EventContent, EventType};
    use crate::events::room::member::{MembershipState, RoomMemberEventContent};
    use crate::{OwnedUserId, UnixMillis};

    #[test]
    fn deserialize_state_event() {
        let event: Event = from_json_value(json!({
            "type": "m.room.member",
            "state_key": "@alice:example.org",
            "sender": "@alice:example.org",
            "event_id": "$143273582443PhrSn:example.org",
            "origin_server_ts": 1_432_735_824_653_u64,
            "content": { "membership": "join", "displayname": "Alice" },
        }))
        .unwrap();

        assert_eq!(event.event_type, EventType::RoomMember);
        assert!(event.is_state());
        assert_eq!(event.origin_server_ts, Some(UnixMillis(1_432_735_824_653)));
        assert_eq!(event.content.get_str("displayname"), Some("Alice"));

        let content: RoomMemberEventContent = event.content_as().unwrap();
        assert_eq!(content.membership, MembershipState::Join);
    }

    #[test]
    fn message_event_has_no_state_key() {
        let event: Event = from_json_value(json!({
            "type": "m.room.message",
            "content": { "msgtype": "m.text", "body": "hi" },
        }))
        .unwrap();

        assert!(!event.is_state());
        assert_eq!(event.content.get("body"), Some(&json!("hi")));
        assert_eq!(event.content.get_str("missing"), None);
    }

    #[test]
    fn custom_event_type_round_trips() {
        let event = Event::new_state(EventType::from("org.example.custom"), "", EventContent::new());
        assert_eq!(
            to_json_value(&event).unwrap(),
            json!({ "type": "org.example.custom", "state_key": "", "content": {} })
        );
    }

    #[test]
    fn typed_content_must_be_an_object() {
        let content = EventContent::from_typed(&RoomMemberEventContent::new(MembershipState::Leave)).unwrap();
        assert_eq!(content.get_str("membership"), Some("leave"));

        assert!(EventContent::from_typed(&"not an object").is_err());
    }

    #[test]
    fn room_id_without_server_part() {
        let json = json!({
            "type": "m.room.name",
            "state_key": "",
            "room_id": "!31hneApxJ_1o-63DmFrpeqnkFfWppnzWso1JvH3ogLM",
            "content": { "name": "Lobby" },
        });

        let event: Event = from_json_value(json.clone()).unwrap();
        let room_id = event.room_id.as_ref().unwrap();
        assert_eq!(room_id, "!31hneApxJ_1o-63DmFrpeqnkFfWppnzWso1JvH3ogLM");
        assert_eq!(room_id.server_name(), None);
        assert_eq!(to_json_value(&event).unwrap(), json);
    }

    #[test]
    fn builder_sets_envelope_fields() {
        let alice = OwnedUserId::try_from("@alice:example.org").unwrap();
        let event = Event::new(EventType::RoomMessage, EventContent::new())
            .with_sender(alice.clone())
            .with_event_id("$ev");

        assert_eq!(event.sender, Some(alice));
        assert_eq!(event.event_id.as_deref(), Some("$ev"));
    }
}
