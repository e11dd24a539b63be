// rfidrw-rs/rfidrw/src/protocol/parser.rs

use crate::types::TagId;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Parse a TagId (5 bytes) at `start` index with bounds checking.
pub fn tag_id_at(data: &[u8], start: usize) -> Result<TagId> {
    let s = slice_at(data, start, 5)?;
    TagId::try_from(s)
}

/// Ensure the response code equals `expected`.
pub fn expect_response_code(actual: u8, expected: u8) -> Result<()> {
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(())
}
