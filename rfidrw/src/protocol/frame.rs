// rfidrw-rs/rfidrw/src/protocol/frame.rs

use std::fmt;

use crate::constants::{
    EM4100_ID_LEN, EM4100_ID_OFFSET, ENDPOINT_OUT, INBOUND_ENDPOINT_MARKER, INBOUND_FRAME_LEN,
    MAX_INBOUND_MESSAGE_SIZE, MAX_PAYLOAD_LEN, MESSAGE_END_MARKER, MESSAGE_START_MARKER,
    MESSAGE_STRUCTURE_SIZE, OUTBOUND_FRAME_LEN,
};
use crate::protocol::checksum::xor_checksum;
use crate::types::TagId;
use crate::{Error, Result};

/// Offset of the command / response code in both frame directions.
const COMMAND_OFFSET: usize = 3;
/// Offset of the first payload byte in both frame directions.
const PAYLOAD_OFFSET: usize = 4;

/// A single problem found while validating a frame. Inbound issues are
/// diagnostics: the device is known to emit the odd malformed answer on a
/// live link, so parsing carries on regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramingError {
    BadEndpoint { actual: u8 },
    BadStartMarker { actual: u8 },
    OversizedLength { size: u8 },
    /// `None` when the size field points past the end of the buffer.
    BadEndMarker { actual: Option<u8> },
    BadLengthField { expected: u8, actual: u8 },
    ChecksumMismatch { expected: u8, actual: u8 },
}

impl fmt::Display for FramingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramingError::BadEndpoint { actual } => write!(
                f,
                "invalid endpoint value {:#04x} != {:#04x}",
                actual, INBOUND_ENDPOINT_MARKER
            ),
            FramingError::BadStartMarker { actual } => write!(
                f,
                "invalid start marker {:#04x} != {:#04x}",
                actual, MESSAGE_START_MARKER
            ),
            FramingError::OversizedLength { size } => {
                write!(f, "invalid message size {}", size)
            }
            FramingError::BadEndMarker { actual: Some(b) } => write!(
                f,
                "invalid end marker {:#04x} != {:#04x}",
                b, MESSAGE_END_MARKER
            ),
            FramingError::BadEndMarker { actual: None } => {
                write!(f, "invalid end marker (out of range)")
            }
            FramingError::BadLengthField { expected, actual } => {
                write!(f, "invalid length field {} != {}", actual, expected)
            }
            FramingError::ChecksumMismatch { expected, actual } => write!(
                f,
                "checksum mismatch: expected {:#04x}, got {:#04x}",
                expected, actual
            ),
        }
    }
}

/// Host -> device frame.
/// Format (24 bytes, zero padded):
/// [EndpointTag(1)] [Start 0x01] [Len = 5 + n] [Command(1)] [Payload(n)] [XOR(1)] [End 0x04]
///
/// The endpoint tag is not read by the device; the checksum covers start
/// marker through the last payload byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundFrame {
    endpoint_tag: u8,
    command: u8,
    payload: Vec<u8>,
}

impl OutboundFrame {
    /// Build a frame addressed to the OUT endpoint. Payloads that would not
    /// fit the 24-byte buffer (more than 18 bytes) are rejected.
    pub fn new(command: u8, payload: &[u8]) -> Result<Self> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge {
                max: MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }
        Ok(Self {
            endpoint_tag: ENDPOINT_OUT,
            command,
            payload: payload.to_vec(),
        })
    }

    pub fn with_endpoint_tag(mut self, endpoint_tag: u8) -> Self {
        self.endpoint_tag = endpoint_tag;
        self
    }

    pub fn endpoint_tag(&self) -> u8 {
        self.endpoint_tag
    }

    pub fn command(&self) -> u8 {
        self.command
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Value of the length byte (command + checksum + markers + payload).
    pub fn length_field(&self) -> u8 {
        (MESSAGE_STRUCTURE_SIZE + self.payload.len()) as u8
    }

    pub fn checksum(&self) -> u8 {
        let header = [MESSAGE_START_MARKER, self.length_field(), self.command];
        xor_checksum(&header) ^ xor_checksum(&self.payload)
    }

    /// Encode into the fixed 24-byte wire buffer.
    pub fn encode(&self) -> [u8; OUTBOUND_FRAME_LEN] {
        let mut out = [0u8; OUTBOUND_FRAME_LEN];
        out[0] = self.endpoint_tag;
        out[1] = MESSAGE_START_MARKER;
        out[2] = self.length_field();
        out[COMMAND_OFFSET] = self.command;
        let end = PAYLOAD_OFFSET + self.payload.len();
        out[PAYLOAD_OFFSET..end].copy_from_slice(&self.payload);
        out[end] = xor_checksum(&out[1..end]);
        out[end + 1] = MESSAGE_END_MARKER;
        out
    }

    /// Strictly decode a 24-byte outbound buffer (used by mocks and tests
    /// to inspect what was sent).
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() != OUTBOUND_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: OUTBOUND_FRAME_LEN,
                actual: buf.len(),
            });
        }
        if buf[1] != MESSAGE_START_MARKER {
            return Err(Error::Framing(vec![FramingError::BadStartMarker {
                actual: buf[1],
            }]));
        }

        let len = buf[2] as usize;
        if len < MESSAGE_STRUCTURE_SIZE || len > MESSAGE_STRUCTURE_SIZE + MAX_PAYLOAD_LEN {
            return Err(Error::Framing(vec![FramingError::BadLengthField {
                expected: MESSAGE_STRUCTURE_SIZE as u8,
                actual: buf[2],
            }]));
        }

        let end = PAYLOAD_OFFSET + (len - MESSAGE_STRUCTURE_SIZE);
        let expected = xor_checksum(&buf[1..end]);
        if buf[end] != expected {
            return Err(Error::Framing(vec![FramingError::ChecksumMismatch {
                expected,
                actual: buf[end],
            }]));
        }
        if buf[end + 1] != MESSAGE_END_MARKER {
            return Err(Error::Framing(vec![FramingError::BadEndMarker {
                actual: Some(buf[end + 1]),
            }]));
        }

        Ok(Self {
            endpoint_tag: buf[0],
            command: buf[COMMAND_OFFSET],
            payload: buf[PAYLOAD_OFFSET..end].to_vec(),
        })
    }
}

/// Device -> host frame, parsed tolerantly.
/// Format (48 bytes):
/// [Endpoint 0x05] [Start 0x01] [Size] [Response(1)] [Payload ..] [Checksum] [End 0x04 @ Size]
///
/// The checksum of inbound frames is computed differently by the device and
/// is not verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundFrame {
    raw: [u8; INBOUND_FRAME_LEN],
    issues: Vec<FramingError>,
}

impl InboundFrame {
    /// Parse a 48-byte answer. Every check is recorded independently and
    /// the best-effort fields are always available.
    pub fn parse(raw: &[u8; INBOUND_FRAME_LEN]) -> Self {
        let mut issues = Vec::new();

        if raw[0] != INBOUND_ENDPOINT_MARKER {
            issues.push(FramingError::BadEndpoint { actual: raw[0] });
        }
        if raw[1] != MESSAGE_START_MARKER {
            issues.push(FramingError::BadStartMarker { actual: raw[1] });
        }

        let size = raw[2];
        if size as usize > MAX_INBOUND_MESSAGE_SIZE {
            issues.push(FramingError::OversizedLength { size });
        }
        match raw.get(size as usize) {
            Some(&MESSAGE_END_MARKER) => {}
            other => issues.push(FramingError::BadEndMarker {
                actual: other.copied(),
            }),
        }

        for issue in &issues {
            log::warn!("inbound frame: {}", issue);
        }

        let frame = Self { raw: *raw, issues };
        if let Some(sum) = frame.checksum_byte() {
            log::debug!(
                "inbound checksum {:#04x}, xor {:#04x}",
                sum,
                xor_checksum(&raw[1..size as usize - 1])
            );
        }
        frame
    }

    /// Parse from a slice, requiring exactly 48 bytes.
    pub fn parse_slice(raw: &[u8]) -> Result<Self> {
        let arr: &[u8; INBOUND_FRAME_LEN] =
            raw.try_into().map_err(|_| Error::InvalidLength {
                expected: INBOUND_FRAME_LEN,
                actual: raw.len(),
            })?;
        Ok(Self::parse(arr))
    }

    pub fn command(&self) -> u8 {
        self.raw[COMMAND_OFFSET]
    }

    /// Raw message size field.
    pub fn size(&self) -> u8 {
        self.raw[2]
    }

    /// Payload bytes between the response code and the trailing checksum.
    pub fn payload(&self) -> &[u8] {
        let end = (self.size() as usize)
            .saturating_sub(1)
            .clamp(PAYLOAD_OFFSET, MAX_INBOUND_MESSAGE_SIZE);
        &self.raw[PAYLOAD_OFFSET..end]
    }

    /// Checksum byte just before the end marker, when the size allows one.
    pub(crate) fn checksum_byte(&self) -> Option<u8> {
        let size = self.size() as usize;
        if size > PAYLOAD_OFFSET && size <= MAX_INBOUND_MESSAGE_SIZE {
            Some(self.raw[size - 1])
        } else {
            None
        }
    }

    /// Number of answer data bytes: size minus framing minus the status
    /// byte. Negative for empty or stale buffers.
    pub fn response_length(&self) -> isize {
        self.size() as isize - MESSAGE_STRUCTURE_SIZE as isize - 1
    }

    /// EM4100 id carried by the answer, once the answer is long enough.
    pub fn tag_id(&self) -> Option<TagId> {
        if self.response_length() < EM4100_ID_LEN as isize {
            return None;
        }
        let mut id = [0u8; EM4100_ID_LEN];
        id.copy_from_slice(&self.raw[EM4100_ID_OFFSET..EM4100_ID_OFFSET + EM4100_ID_LEN]);
        Some(TagId::from_bytes(id))
    }

    pub fn issues(&self) -> &[FramingError] {
        &self.issues
    }

    pub fn is_well_formed(&self) -> bool {
        self.issues.is_empty()
    }

    /// Turn recorded issues into an error for callers that want strictness.
    pub fn validate(&self) -> Result<()> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(Error::Framing(self.issues.clone()))
        }
    }

    pub fn as_bytes(&self) -> &[u8; INBOUND_FRAME_LEN] {
        &self.raw
    }
}
