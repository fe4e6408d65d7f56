//! Types for the [`m.room_key_request`] event.
//!
//! [`m.room_key_request`]: https://spec.matrix.org/latest/client-server-api/#mroom_key_request

use serde::{Deserialize, Serialize};

use crate::serde::string_enum;
use crate::{EventEncryptionAlgorithm, OwnedDeviceId, OwnedRoomId};

/// The content of an `m.room_key_request` event.
///
/// Request IDs are chosen by the requesting client and are only used to tie a
/// cancellation to its request.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToDeviceRoomKeyRequestEventContent {
    /// Whether this is a new key request or a cancellation of a previous
    /// request.
    pub action: RequestAction,

    /// Information about the requested key.
    ///
    /// Required if action is `request`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestedKeyInfo>,

    /// ID of the device requesting the key.
    pub requesting_device_id: OwnedDeviceId,

    /// A random string uniquely identifying the request for a key.
    ///
    /// If the key is requested multiple times, it should be reused. It should
    /// also be reused in order to cancel a request.
    pub request_id: String,
}

impl ToDeviceRoomKeyRequestEventContent {
    /// Creates a new `ToDeviceRoomKeyRequestEventContent` with the given action,
    /// body, device ID and request ID.
    pub fn new(
        action: RequestAction,
        body: Option<RequestedKeyInfo>,
        requesting_device_id: OwnedDeviceId,
        request_id: String,
    ) -> Self {
        Self {
            action,
            body,
            requesting_device_id,
            request_id,
        }
    }

    /// Creates a request for the given session.
    pub fn new_request(body: RequestedKeyInfo, requesting_device_id: OwnedDeviceId, request_id: String) -> Self {
        Self::new(RequestAction::Request, Some(body), requesting_device_id, request_id)
    }

    /// Creates a cancellation of an earlier request.
    pub fn new_cancellation(requesting_device_id: OwnedDeviceId, request_id: String) -> Self {
        Self::new(RequestAction::CancelRequest, None, requesting_device_id, request_id)
    }

    /// The cancellation matching this request.
    pub fn cancellation(&self) -> Self {
        Self::new_cancellation(self.requesting_device_id.clone(), self.request_id.clone())
    }
}

string_enum! {
    /// A new key request or a cancellation of a previous request.
    pub enum RequestAction {
        /// Request a key.
        Request = "request",

        /// Cancel a request for a key.
        CancelRequest = "request_cancellation",
    }
}

/// Information about a requested key.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RequestedKeyInfo {
    /// The encryption algorithm the requested key in this event is to be used
    /// with.
    pub algorithm: EventEncryptionAlgorithm,

    /// The room where the key is used.
    pub room_id: OwnedRoomId,

    /// The Curve25519 key of the device which initiated the session originally.
    pub sender_key: String,

    /// The ID of the session that the key is for.
    pub session_id: String,
}

impl RequestedKeyInfo {
    /// Creates a new `RequestedKeyInfo` with the given algorithm, room ID,
    /// sender key and session ID.
    pub fn new(
        algorithm: EventEncryptionAlgorithm,
        room_id: OwnedRoomId,
        sender_key: String,
        session_id: String,
    ) -> Self {
        Self {
            algorithm,
            room_id,
            sender_key,
            session_id,
        }
    }
}
