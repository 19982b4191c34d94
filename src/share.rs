//! A single share and its textual form.
//!
//! A share is the byte blob `[index] || payload`, where `index` is the
//! nonzero x coordinate the share was evaluated at and `payload` holds one
//! field element per secret byte. On paper and on screen a share is written
//! as uppercase hex, two digits per byte, with no separators.

use core::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Share {
    bytes: Vec<u8>,
}

impl Share {
    /// Builds a share from its index and payload.
    pub fn new(index: u8, payload: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(payload.len() + 1);
        bytes.push(index);
        bytes.extend_from_slice(payload);
        Share { bytes }
    }

    /// Wraps raw share bytes. Structural checks happen when shares are
    /// combined, so that each problem is reported precisely.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Share { bytes }
    }

    /// The share index, or 0 for an empty blob.
    pub fn index(&self) -> u8 {
        self.bytes.first().copied().unwrap_or(0)
    }

    pub fn payload(&self) -> &[u8] {
        self.bytes.get(1..).unwrap_or(&[])
    }

    pub(crate) fn payload_mut(&mut self) -> &mut [u8] {
        self.bytes.get_mut(1..).unwrap_or(&mut [])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Uppercase hex, e.g. `[0x01, 0x0F]` becomes `"010F"`.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(&self.bytes)
    }

    /// Parses a hex share. Either case is accepted and surrounding
    /// whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHex`] for odd-length input or non-hex
    /// characters.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim())?;
        Ok(Share { bytes })
    }
}

impl AsRef<Share> for Share {
    fn as_ref(&self) -> &Share {
        self
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Only the index is shown, payload bytes stay out of logs.
impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("index", &self.index())
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

impl FromStr for Share {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Share::from_hex(s)
    }
}

impl Serialize for Share {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Share {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Share::from_hex(&s).map_err(de::Error::custom)
    }
}
