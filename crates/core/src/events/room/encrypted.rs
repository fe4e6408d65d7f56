//! Types for the [`m.room.encrypted`] event.
//!
//! The shape of the `ciphertext` field depends on the `algorithm` field, so the
//! content is decoded in two passes: first the envelope, whose shape never
//! changes, then the ciphertext according to the algorithm that was read.
//!
//! [`m.room.encrypted`]: https://spec.matrix.org/latest/client-server-api/#mroomencrypted

use std::collections::BTreeMap;

use serde::de::{self, Deserializer, Unexpected};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::events::EventContent;
use crate::serde::{RawJsonValue, to_raw_json_value};
use crate::{EventEncryptionAlgorithm, OwnedDeviceId};

/// Failure to convert between [`EncryptedEventContent`] and JSON bytes.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The input is not valid JSON, the envelope is malformed, or the
    /// ciphertext does not have the shape its algorithm requires.
    #[error("malformed encrypted content: {0}")]
    Decode(#[source] serde_json::Error),

    /// The content could not be serialized.
    #[error("failed to serialize encrypted content: {0}")]
    Encode(#[source] serde_json::Error),
}

/// The content of an `m.room.encrypted` event.
#[derive(Clone, Debug, PartialEq)]
pub struct EncryptedEventContent {
    /// The algorithm used to encrypt the payload.
    pub algorithm: EventEncryptionAlgorithm,

    /// The Curve25519 key of the sender.
    pub sender_key: String,

    /// The ID of the sending device.
    pub device_id: OwnedDeviceId,

    /// The ID of the session used to encrypt the message.
    pub session_id: String,

    /// The encrypted payload, shaped by `algorithm`.
    pub ciphertext: Ciphertext,
}

impl EncryptedEventContent {
    /// Creates a new `EncryptedEventContent` for a Megolm (group session)
    /// message.
    pub fn megolm(
        sender_key: String,
        device_id: OwnedDeviceId,
        session_id: String,
        ciphertext: String,
    ) -> Self {
        Self {
            algorithm: EventEncryptionAlgorithm::MegolmV1AesSha2,
            sender_key,
            device_id,
            session_id,
            ciphertext: Ciphertext::Megolm(ciphertext),
        }
    }

    /// Creates a new `EncryptedEventContent` for an Olm (pairwise) message.
    pub fn olm(
        sender_key: String,
        device_id: OwnedDeviceId,
        session_id: String,
        ciphertext: OlmCiphertexts,
    ) -> Self {
        Self {
            algorithm: EventEncryptionAlgorithm::OlmV1Curve25519AesSha2,
            sender_key,
            device_id,
            session_id,
            ciphertext: Ciphertext::Olm(ciphertext),
        }
    }

    /// Decodes the content from JSON bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CodecError> {
        let envelope: EncryptedEnvelope = serde_json::from_slice(bytes).map_err(CodecError::Decode)?;
        envelope.into_content().map_err(CodecError::Decode)
    }

    /// Decodes the content of a generic event.
    pub fn from_event_content(content: &EventContent) -> Result<Self, CodecError> {
        let bytes = serde_json::to_vec(content).map_err(CodecError::Decode)?;
        Self::from_json_slice(&bytes)
    }

    /// Encodes the content into JSON bytes.
    pub fn to_json_vec(&self) -> Result<Vec<u8>, CodecError> {
        let envelope = self.to_envelope().map_err(CodecError::Encode)?;
        serde_json::to_vec(&envelope).map_err(CodecError::Encode)
    }

    /// The Megolm ciphertext, if this is a group session message.
    pub fn megolm_ciphertext(&self) -> Option<&str> {
        match &self.ciphertext {
            Ciphertext::Megolm(ciphertext) => Some(ciphertext),
            _ => None,
        }
    }

    /// The Olm ciphertexts, if this is a pairwise message.
    pub fn olm_ciphertext(&self) -> Option<&OlmCiphertexts> {
        match &self.ciphertext {
            Ciphertext::Olm(ciphertexts) => Some(ciphertexts),
            _ => None,
        }
    }

    /// The Olm ciphertext addressed to the device with the given Curve25519
    /// key.
    pub fn olm_ciphertext_for(&self, recipient_key: &str) -> Option<&OlmCiphertext> {
        self.olm_ciphertext()?.get(recipient_key)
    }

    fn to_envelope(&self) -> serde_json::Result<EncryptedEnvelopeRef<'_>> {
        Ok(EncryptedEnvelopeRef {
            algorithm: &self.algorithm,
            sender_key: &self.sender_key,
            device_id: &self.device_id,
            session_id: &self.session_id,
            ciphertext: self.ciphertext.encode(&self.algorithm)?,
        })
    }
}

impl Serialize for EncryptedEventContent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_envelope().map_err(ser::Error::custom)?.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EncryptedEventContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        EncryptedEnvelope::deserialize(deserializer)?
            .into_content()
            .map_err(de::Error::custom)
    }
}

/// The fixed outer shape of the content, with the ciphertext left unparsed.
#[derive(Deserialize)]
struct EncryptedEnvelope {
    algorithm: EventEncryptionAlgorithm,
    #[serde(default)]
    sender_key: String,
    #[serde(default)]
    device_id: OwnedDeviceId,
    #[serde(default)]
    session_id: String,
    ciphertext: Box<RawJsonValue>,
}

impl EncryptedEnvelope {
    fn into_content(self) -> serde_json::Result<EncryptedEventContent> {
        let ciphertext = Ciphertext::decode(&self.algorithm, self.ciphertext)?;
        Ok(EncryptedEventContent {
            algorithm: self.algorithm,
            sender_key: self.sender_key,
            device_id: self.device_id,
            session_id: self.session_id,
            ciphertext,
        })
    }
}

#[derive(Serialize)]
struct EncryptedEnvelopeRef<'a> {
    algorithm: &'a EventEncryptionAlgorithm,
    sender_key: &'a str,
    device_id: &'a OwnedDeviceId,
    session_id: &'a str,
    ciphertext: Box<RawJsonValue>,
}

/// The encrypted payload of an [`EncryptedEventContent`].
#[derive(Clone, Debug)]
#[allow(clippy::exhaustive_enums)]
pub enum Ciphertext {
    /// A Megolm message: a single opaque string.
    Megolm(String),

    /// An Olm message: one ciphertext per recipient device, keyed by the
    /// recipient's Curve25519 key.
    Olm(OlmCiphertexts),

    /// The ciphertext of an algorithm this crate does not know, exactly as it
    /// was received.
    Unknown(Box<RawJsonValue>),
}

impl Ciphertext {
    /// A short name for the shape of this payload.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Megolm(_) => "megolm",
            Self::Olm(_) => "olm",
            Self::Unknown(_) => "unknown",
        }
    }

    fn decode(algorithm: &EventEncryptionAlgorithm, raw: Box<RawJsonValue>) -> serde_json::Result<Self> {
        match algorithm {
            EventEncryptionAlgorithm::MegolmV1AesSha2 => serde_json::from_str(raw.get()).map(Self::Megolm),
            EventEncryptionAlgorithm::OlmV1Curve25519AesSha2 => serde_json::from_str(raw.get()).map(Self::Olm),
            _ => {
                tracing::debug!(%algorithm, "keeping ciphertext of unknown algorithm unparsed");
                Ok(Self::Unknown(raw))
            }
        }
    }

    fn encode(&self, algorithm: &EventEncryptionAlgorithm) -> serde_json::Result<Box<RawJsonValue>> {
        match (algorithm, self) {
            (EventEncryptionAlgorithm::MegolmV1AesSha2, Self::Megolm(ciphertext)) => to_raw_json_value(ciphertext),
            (EventEncryptionAlgorithm::OlmV1Curve25519AesSha2, Self::Olm(ciphertexts)) => {
                to_raw_json_value(ciphertexts)
            }
            (EventEncryptionAlgorithm::_Custom(_), Self::Unknown(raw)) => Ok(raw.clone()),
            _ => Err(ser::Error::custom(format!(
                "`{algorithm}` content cannot carry a {} ciphertext",
                self.kind()
            ))),
        }
    }
}

impl PartialEq for Ciphertext {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Megolm(a), Self::Megolm(b)) => a == b,
            (Self::Olm(a), Self::Olm(b)) => a == b,
            (Self::Unknown(a), Self::Unknown(b)) => a.get() == b.get(),
            _ => false,
        }
    }
}

/// Olm ciphertexts keyed by the recipient device's Curve25519 key.
pub type OlmCiphertexts = BTreeMap<String, OlmCiphertext>;

/// The Olm ciphertext addressed to one device.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct OlmCiphertext {
    /// The encrypted payload.
    pub body: String,

    /// The Olm message type.
    #[serde(rename = "type")]
    pub message_type: OlmMessageType,
}

impl OlmCiphertext {
    /// Creates a new `OlmCiphertext` with the given body and type.
    pub fn new(body: String, message_type: OlmMessageType) -> Self {
        Self { body, message_type }
    }
}

/// The type of an Olm message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_enums)]
pub enum OlmMessageType {
    /// A pre-key message, which sets up the session.
    PreKey,

    /// A normal message on an established session.
    Normal,
}

impl From<OlmMessageType> for u8 {
    fn from(message_type: OlmMessageType) -> Self {
        match message_type {
            OlmMessageType::PreKey => 0,
            OlmMessageType::Normal => 1,
        }
    }
}

impl Serialize for OlmMessageType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8((*self).into())
    }
}

impl<'de> Deserialize<'de> for OlmMessageType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u64::deserialize(deserializer)? {
            0 => Ok(Self::PreKey),
            1 => Ok(Self::Normal),
            other => Err(de::Error::invalid_value(Unexpected::Unsigned(other), &"0 or 1")),
        }
    }
}
