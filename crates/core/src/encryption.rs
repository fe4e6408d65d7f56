//! Common types for end-to-end encryption.

use crate::serde::string_enum;

string_enum! {
    /// An encryption algorithm to be used to encrypt messages sent to a room.
    ///
    /// Algorithms this crate does not know are kept as-is, so the protocol can
    /// grow new schemes without breaking older clients.
    pub enum EventEncryptionAlgorithm {
        /// Olm version 1 using Curve25519, AES-256, and SHA-256.
        ///
        /// A pairwise scheme: one session per pair of devices.
        OlmV1Curve25519AesSha2 = "m.olm.v1.curve25519-aes-sha2",

        /// Megolm version 1 using AES-256 and SHA-256.
        ///
        /// A group scheme: one outbound session shared with every device in a
        /// room.
        MegolmV1AesSha2 = "m.megolm.v1.aes-sha2",
    }
}

impl EventEncryptionAlgorithm {
    /// Whether this algorithm is one this crate can shape ciphertext for.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::_Custom(_))
    }
}
