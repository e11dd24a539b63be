// rfidrw-rs/rfidrw/src/utils/hex.rs

//! Hexadecimal helpers for logging and tag display.
//!
//! Tag ids are shown in compact uppercase (`1234567890`), frames in the
//! logs as spaced lowercase bytes.

use std::fmt::Write;

fn write_hex(bytes: &[u8], upper: bool, sep: Option<char>) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if let (Some(c), true) = (sep, i != 0) {
            s.push(c);
        }
        // write! never fails writing to a String
        let _ = if upper {
            write!(&mut s, "{:02X}", b)
        } else {
            write!(&mut s, "{:02x}", b)
        };
    }
    s
}

/// Lowercase hex without separators: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    write_hex(bytes, false, None)
}

/// Uppercase hex without separators: `&[0xde, 0xad]` -> `"DEAD"`
pub fn bytes_to_hex_upper(bytes: &[u8]) -> String {
    write_hex(bytes, true, None)
}

/// Lowercase hex, one space between bytes: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    write_hex(bytes, false, Some(' '))
}

/// Parse a hex string into bytes. ASCII whitespace is ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();

    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    cleaned
        .chunks(2)
        .map(|pair| {
            let text = String::from_utf8_lossy(pair);
            u8::from_str_radix(&text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}
