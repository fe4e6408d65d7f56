//! Current state of a single room.

use crate::events::room::member::MembershipState;
use crate::events::{Event, EventType};
use crate::state::{RoomStateMap, StateError, StateResult};
use crate::{OwnedRoomId, OwnedUserId};

/// A single Matrix room and its current state.
///
/// For every `(event type, state key)` pair the room keeps exactly one event:
/// the one applied last. The room does no ordering or conflict resolution of
/// its own, so events must be applied in timeline order.
///
/// Mutation needs `&mut Room`; share a room across threads behind a lock.
#[derive(Clone, Debug)]
pub struct Room {
    room_id: OwnedRoomId,
    state: RoomStateMap,
}

impl Room {
    /// Creates a new `Room` with the given ID and no state.
    pub fn new(room_id: OwnedRoomId) -> Self {
        Self {
            room_id,
            state: RoomStateMap::new(),
        }
    }

    /// The ID of this room.
    pub fn room_id(&self) -> &OwnedRoomId {
        &self.room_id
    }

    /// Updates the room's current state with the given event, replacing any
    /// event with the same type and state key.
    ///
    /// Returns the replaced event. Events without a state key are rejected and
    /// leave the state untouched.
    pub fn update_state(&mut self, event: Event) -> StateResult<Option<Event>> {
        let Some(state_key) = event.state_key.clone() else {
            return Err(StateError::MissingStateKey(event.event_type.to_string()));
        };

        let replaced = self
            .state
            .entry(event.event_type.clone())
            .or_default()
            .insert(state_key, event);

        if let Some(replaced) = &replaced {
            tracing::trace!(
                room_id = %self.room_id,
                event_type = %replaced.event_type,
                state_key = replaced.state_key.as_deref().unwrap_or_default(),
                "replaced state event"
            );
        }
        Ok(replaced)
    }

    /// The state event for the given type and state key, if one was applied.
    pub fn get_state_event(&self, event_type: &EventType, state_key: &str) -> Option<&Event> {
        self.state.get(event_type)?.get(state_key)
    }

    /// All state events of the given type, keyed by state key.
    pub fn state_events(&self, event_type: &EventType) -> impl Iterator<Item = (&str, &Event)> {
        self.state
            .get(event_type)
            .into_iter()
            .flat_map(|events| events.iter().map(|(state_key, event)| (state_key.as_str(), event)))
    }

    /// The number of populated `(type, state key)` slots.
    pub fn state_len(&self) -> usize {
        self.state.values().map(|events| events.len()).sum()
    }

    /// The membership state of the given user in this room.
    ///
    /// A user without an `m.room.member` event, or whose event has no string
    /// `membership` field, is reported as `leave`, the same as a user who left.
    pub fn get_membership_state(&self, user_id: &OwnedUserId) -> MembershipState {
        self.get_state_event(&EventType::RoomMember, user_id.as_str())
            .and_then(|event| event.content.get_str("membership"))
            .map(MembershipState::from)
            .unwrap_or(MembershipState::Leave)
    }

    /// The users whose current membership equals `membership`.
    ///
    /// Member events whose state key is not a valid user ID are skipped.
    pub fn members_with_membership(&self, membership: &MembershipState) -> Vec<OwnedUserId> {
        self.state_events(&EventType::RoomMember)
            .filter_map(|(state_key, _)| match OwnedUserId::parse(state_key) {
                Ok(user_id) => Some(user_id),
                Err(e) => {
                    tracing::debug!(room_id = %self.room_id, state_key, "skipping member event: {e}");
                    None
                }
            })
            .filter(|user_id| self.get_membership_state(user_id) == *membership)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches2::assert_matches;
    use serde_json::json;

    use super::Room;
    use crate::events::room::member::MembershipState;
    use crate::events::{Event, EventContent, EventType};
    use crate::state::StateError;
    use crate::{OwnedRoomId, OwnedUserId};

    fn room() -> Room {
        Room::new(OwnedRoomId::try_from("!room:example.org").unwrap())
    }

    fn user(id: &str) -> OwnedUserId {
        OwnedUserId::try_from(id).unwrap()
    }

    fn content(value: serde_json::Value) -> EventContent {
        serde_json::from_value(value).unwrap()
    }

    fn member_event(user_id: &str, membership: &str) -> Event {
        Event::new_state(
            EventType::RoomMember,
            user_id,
            content(json!({ "membership": membership })),
        )
    }

    #[test]
    fn empty_room_has_no_state() {
        let room = room();
        assert_eq!(room.get_state_event(&EventType::RoomName, ""), None);
        assert_eq!(room.state_len(), 0);
        assert_eq!(room.room_id(), "!room:example.org");
    }

    #[test]
    fn last_write_wins() {
        let mut room = room();
        let first = Event::new_state(EventType::RoomName, "", content(json!({ "name": "A" })));
        let second = Event::new_state(EventType::RoomName, "", content(json!({ "name": "B" })));

        assert_eq!(room.update_state(first.clone()), Ok(None));
        assert_eq!(room.update_state(second.clone()), Ok(Some(first)));

        assert_eq!(room.get_state_event(&EventType::RoomName, ""), Some(&second));
        assert_eq!(room.state_len(), 1);
    }

    #[test]
    fn state_keys_are_isolated() {
        let mut room = room();
        let alice = member_event("@alice:example.org", "join");
        room.update_state(alice.clone()).unwrap();
        room.update_state(member_event("@bob:example.org", "join")).unwrap();
        room.update_state(member_event("@bob:example.org", "ban")).unwrap();

        assert_eq!(
            room.get_state_event(&EventType::RoomMember, "@alice:example.org"),
            Some(&alice)
        );
        assert_eq!(room.state_len(), 2);
    }

    #[test]
    fn event_types_are_isolated() {
        let mut room = room();
        room.update_state(Event::new_state(EventType::RoomName, "", content(json!({ "name": "N" }))))
            .unwrap();
        room.update_state(Event::new_state(EventType::RoomTopic, "", content(json!({ "topic": "T" }))))
            .unwrap();

        let name = room.get_state_event(&EventType::RoomName, "").unwrap();
        assert_eq!(name.content.get_str("name"), Some("N"));
        assert_eq!(room.state_events(&EventType::RoomTopic).count(), 1);
    }

    #[test]
    fn rejects_events_without_state_key() {
        let mut room = room();
        let message = Event::new(EventType::RoomMessage, content(json!({ "body": "hi" })));

        assert_matches!(room.update_state(message), Err(StateError::MissingStateKey(event_type)));
        assert_eq!(event_type, "m.room.message");
        assert_eq!(room.state_len(), 0);
    }

    #[test]
    fn membership_defaults_to_leave() {
        assert_eq!(
            room().get_membership_state(&user("@nobody:example.org")),
            MembershipState::Leave
        );
    }

    #[test]
    fn membership_follows_latest_event() {
        let mut room = room();
        let alice = user("@alice:example.org");

        room.update_state(member_event("@alice:example.org", "join")).unwrap();
        assert_eq!(room.get_membership_state(&alice), MembershipState::Join);

        room.update_state(member_event("@alice:example.org", "leave")).unwrap();
        assert_eq!(room.get_membership_state(&alice), MembershipState::Leave);
    }

    #[test]
    fn malformed_membership_defaults_to_leave() {
        let mut room = room();
        room.update_state(Event::new_state(
            EventType::RoomMember,
            "@alice:example.org",
            content(json!({ "membership": 5 })),
        ))
        .unwrap();
        room.update_state(Event::new_state(
            EventType::RoomMember,
            "@bob:example.org",
            content(json!({ "displayname": "Bob" })),
        ))
        .unwrap();

        assert_eq!(room.get_membership_state(&user("@alice:example.org")), MembershipState::Leave);
        assert_eq!(room.get_membership_state(&user("@bob:example.org")), MembershipState::Leave);
    }

    #[test]
    fn custom_membership_is_reported_verbatim() {
        let mut room = room();
        room.update_state(member_event("@alice:example.org", "org.example.lurk"))
            .unwrap();

        assert_eq!(
            room.get_membership_state(&user("@alice:example.org")).as_str(),
            "org.example.lurk"
        );
    }

    #[test]
    fn lists_members_by_membership() {
        let mut room = room();
        room.update_state(member_event("@alice:example.org", "join")).unwrap();
        room.update_state(member_event("@bob:example.org", "invite")).unwrap();
        room.update_state(member_event("@carol:example.org", "join")).unwrap();
        room.update_state(member_event("not-a-user", "join")).unwrap();

        assert_eq!(
            room.members_with_membership(&MembershipState::Join),
            [user("@alice:example.org"), user("@carol:example.org")]
        );
        assert_eq!(
            room.members_with_membership(&MembershipState::Invite),
            [user("@bob:example.org")]
        );
    }
}
