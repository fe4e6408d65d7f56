//! Types shared by room state handling.

use std::collections::BTreeMap;

use crate::events::{Event, EventType};

mod error;

pub use self::error::{StateError, StateResult};

/// The current state of a room: the latest event for each state key, grouped
/// by event type.
pub type RoomStateMap = BTreeMap<EventType, BTreeMap<String, Event>>;
