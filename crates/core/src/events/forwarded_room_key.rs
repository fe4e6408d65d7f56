//! Types for the [`m.forwarded_room_key`] event.
//!
//! [`m.forwarded_room_key`]: https://spec.matrix.org/latest/client-server-api/#mforwarded_room_key

use serde::{Deserialize, Serialize};

use crate::events::room_key::ToDeviceRoomKeyEventContent;

/// The content of an `m.forwarded_room_key` event.
///
/// A room key that reached this device through one or more intermediaries
/// instead of from the session's creator.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToDeviceForwardedRoomKeyEventContent {
    /// The forwarded room key.
    #[serde(flatten)]
    pub room_key: ToDeviceRoomKeyEventContent,

    /// The Ed25519 key of the device which initiated the session originally.
    ///
    /// It is "claimed" because the receiving device has no way to tell that the
    /// original room_key actually came from a device which owns the private
    /// part of this key unless they have done device verification.
    pub sender_claimed_ed25519_key: String,

    /// Chain of Curve25519 keys.
    ///
    /// It starts out empty, but each time the key is forwarded to another
    /// device, the previous sender in the chain is added to the end of the
    /// list. For example, if the key is forwarded from A to B to C, this
    /// field is empty between A and B, and contains A's Curve25519 key
    /// between B and C.
    #[serde(default)]
    pub forwarding_curve25519_key_chain: Vec<String>,
}

impl ToDeviceForwardedRoomKeyEventContent {
    /// Creates a new `ToDeviceForwardedRoomKeyEventContent` for a key that has
    /// not been forwarded yet.
    pub fn new(room_key: ToDeviceRoomKeyEventContent, sender_claimed_ed25519_key: String) -> Self {
        Self {
            room_key,
            sender_claimed_ed25519_key,
            forwarding_curve25519_key_chain: Vec::new(),
        }
    }

    /// Whether the key came straight from the device that created the session.
    pub fn is_direct(&self) -> bool {
        self.forwarding_curve25519_key_chain.is_empty()
    }

    /// The content to send when forwarding this key again, with the current
    /// holder's Curve25519 key appended to the chain.
    pub fn forward_to(&self, forwarder_curve25519_key: impl Into<String>) -> Self {
        let mut forwarded = self.clone();
        forwarded
            .forwarding_curve25519_key_chain
            .push(forwarder_curve25519_key.into());
        forwarded
    }
}
