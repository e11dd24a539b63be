// rfidrw-rs/rfidrw/src/types.rs

use std::convert::TryFrom;
use std::fmt;

use derive_more::{Display, From};

use crate::Error;

/// EM4100 tag id - Newtype Pattern (5 バイト)
///
/// Byte 0 is the version / customer byte, bytes 1..5 the 32-bit serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagId([u8; 5]);

impl TagId {
    pub fn from_bytes(bytes: [u8; 5]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 5] {
        &self.0
    }

    pub fn version(&self) -> u8 {
        self.0[0]
    }

    pub fn serial(&self) -> u32 {
        u32::from_be_bytes([self.0[1], self.0[2], self.0[3], self.0[4]])
    }

    /// Uppercase hex without separators, the form printed by reader tools.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(self.as_bytes())
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<&[u8]> for TagId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 5 {
            return Err(Error::InvalidLength {
                expected: 5,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 5];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Outcome of a tag read. `NoTag` is an ordinary result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagRead {
    Tag(TagId),
    NoTag,
}

impl TagRead {
    pub fn tag(&self) -> Option<&TagId> {
        match self {
            TagRead::Tag(id) => Some(id),
            TagRead::NoTag => None,
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, TagRead::Tag(_))
    }
}

impl fmt::Display for TagRead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagRead::Tag(id) => write!(f, "{}", id),
            TagRead::NoTag => f.write_str("NOTAG"),
        }
    }
}

/// Terminal status of a single USB transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransferStatus {
    Completed,
    Cancelled,
    NoDevice,
    TimedOut,
    Error,
    Stall,
    Overflow,
}

impl TransferStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, TransferStatus::Completed)
    }
}

/// Identifier handed out by a transport for each submitted transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
#[display(fmt = "#{}", _0)]
pub struct TransferId(u64);

impl TransferId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Transfer direction derived from the endpoint address bit 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    pub fn of_endpoint(endpoint: u8) -> Self {
        if endpoint & 0x80 != 0 {
            Direction::In
        } else {
            Direction::Out
        }
    }
}
