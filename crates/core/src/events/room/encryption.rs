//! Types for the [`m.room.encryption`] event.
//!
//! [`m.room.encryption`]: https://spec.matrix.org/latest/client-server-api/#mroomencryption

use serde::{Deserialize, Serialize};

use crate::EventEncryptionAlgorithm;

/// The recommended session rotation period: one week.
pub const DEFAULT_ROTATION_PERIOD_MS: u64 = 604_800_000;

/// The recommended number of messages before a session is rotated.
pub const DEFAULT_ROTATION_PERIOD_MSGS: u64 = 100;

/// The content of an `m.room.encryption` event.
///
/// Defines how messages sent in this room should be encrypted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoomEncryptionEventContent {
    /// The encryption algorithm to be used to encrypt messages sent in this
    /// room.
    ///
    /// Must be `m.megolm.v1.aes-sha2`.
    pub algorithm: EventEncryptionAlgorithm,

    /// How long the session should be used before changing it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_period_ms: Option<u64>,

    /// How many messages should be sent before changing the session.
    ///
    /// Some older clients send this as `rotation_period_messages`.
    #[serde(default, alias = "rotation_period_messages", skip_serializing_if = "Option::is_none")]
    pub rotation_period_msgs: Option<u64>,
}

impl RoomEncryptionEventContent {
    /// Creates a new `RoomEncryptionEventContent` with the given algorithm.
    pub fn new(algorithm: EventEncryptionAlgorithm) -> Self {
        Self {
            algorithm,
            rotation_period_ms: None,
            rotation_period_msgs: None,
        }
    }

    /// Creates a new `RoomEncryptionEventContent` with Megolm and the
    /// recommended rotation periods.
    pub fn with_recommended_defaults() -> Self {
        Self {
            algorithm: EventEncryptionAlgorithm::MegolmV1AesSha2,
            rotation_period_ms: Some(DEFAULT_ROTATION_PERIOD_MS),
            rotation_period_msgs: Some(DEFAULT_ROTATION_PERIOD_MSGS),
        }
    }
}
