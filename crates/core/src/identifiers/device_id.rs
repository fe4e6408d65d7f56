use std::fmt;

use serde::{Deserialize, Serialize};

/// A Matrix device ID.
///
/// Device identifiers in Matrix are completely opaque character sequences. This
/// type is provided simply for its semantic value.
///
/// # Example
///
/// ```
/// use trellis_core::OwnedDeviceId;
///
/// let owned_id: OwnedDeviceId = "ijklmnop".into();
/// assert_eq!(owned_id.as_str(), "ijklmnop");
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct OwnedDeviceId(Box<str>);

impl OwnedDeviceId {
    /// Creates a string slice from this device ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OwnedDeviceId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for OwnedDeviceId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<Box<str>> for OwnedDeviceId {
    fn from(s: Box<str>) -> Self {
        Self(s)
    }
}

impl AsRef<str> for OwnedDeviceId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<&str> for OwnedDeviceId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for OwnedDeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for OwnedDeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <str as fmt::Debug>::fmt(self.as_str(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::OwnedDeviceId;

    #[test]
    fn create_device_id_from_str() {
        let ref_id: OwnedDeviceId = "abcdefgh".into();
        assert_eq!(ref_id.as_str(), "abcdefgh");
    }

    #[test]
    fn create_boxed_device_id_from_str() {
        let box_id: OwnedDeviceId = "12345678".into();
        assert_eq!(box_id.as_str(), "12345678");
    }

    #[test]
    fn create_device_id_from_box() {
        let box_str: Box<str> = "ijklmnop".into();
        let device_id: OwnedDeviceId = box_str.into();
        assert_eq!(device_id.as_str(), "ijklmnop");
    }

    #[test]
    fn device_ids_are_not_validated() {
        let device_id: OwnedDeviceId = serde_json::from_str(r#""not an id: @!#""#).unwrap();
        assert_eq!(device_id, "not an id: @!#");
    }
}
