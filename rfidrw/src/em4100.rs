// rfidrw-rs/rfidrw/src/em4100.rs

//! EM4100 bit-level encoding.
//!
//! An EM4100 tag transmits 64 bits: 9 header ones, 10 rows of four data
//! bits each followed by an even row parity bit, 4 even column parity bits
//! and a stop bit (0). The layout produced here prefixes that frame with a
//! 0xFF preamble byte, giving 9 bytes:
//!
//! ```text
//! byte 0      : 1111 1111                       preamble
//! bytes 1..9  : 1 1111 1111 | D3 D2 D1 D0 P ... | C3 C2 C1 C0 | 0
//!               header        10 rows             column par.   stop
//! ```
//!
//! Bits are packed MSB first.

use crate::{Error, Result};

/// Number of raw data bytes carried by a tag.
pub const DATA_LEN: usize = 5;

/// Length of the encoded layout.
pub const LAYOUT_LEN: usize = 9;

const PREAMBLE: u8 = 0xFF;
const HEADER_BITS: usize = 9;
const ROWS: usize = DATA_LEN * 2;
const ROW_BITS: usize = 5;
const COLUMN_BITS: usize = 4;
const FRAME_BITS: usize = HEADER_BITS + ROWS * ROW_BITS + COLUMN_BITS + 1;

/// Even parity bit of each nibble value.
const PARITY: [u8; 16] = [0, 1, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 1, 1, 0];

/// Split five bytes into their ten nibbles, high nibble first.
fn nibbles(raw: &[u8; DATA_LEN]) -> [u8; ROWS] {
    let mut out = [0u8; ROWS];
    for (i, b) in raw.iter().enumerate() {
        out[i * 2] = b >> 4;
        out[i * 2 + 1] = b & 0x0f;
    }
    out
}

/// Even parity of bit `bit` (0 = LSB) across all ten nibbles.
fn column_parity(nibbles: &[u8; ROWS], bit: usize) -> u8 {
    nibbles.iter().map(|n| (n >> bit) & 1).sum::<u8>() & 1
}

/// MSB-first bit writer over the 64-bit frame.
struct BitWriter {
    bytes: [u8; LAYOUT_LEN - 1],
    pos: usize,
}

impl BitWriter {
    fn new() -> Self {
        Self {
            bytes: [0u8; LAYOUT_LEN - 1],
            pos: 0,
        }
    }

    fn push(&mut self, bit: u8) {
        if bit & 1 == 1 {
            self.bytes[self.pos / 8] |= 0x80 >> (self.pos % 8);
        }
        self.pos += 1;
    }

    fn push_bits(&mut self, value: u8, count: usize) {
        for i in (0..count).rev() {
            self.push((value >> i) & 1);
        }
    }
}

fn bit_at(frame: &[u8], pos: usize) -> u8 {
    (frame[pos / 8] >> (7 - pos % 8)) & 1
}

fn bits_at(frame: &[u8], pos: usize, count: usize) -> u8 {
    (0..count).fold(0u8, |acc, i| (acc << 1) | bit_at(frame, pos + i))
}

/// Encode five raw bytes into the 9-byte transmittable layout.
pub fn encode(raw: &[u8; DATA_LEN]) -> [u8; LAYOUT_LEN] {
    let nibbles = nibbles(raw);
    let mut w = BitWriter::new();

    for _ in 0..HEADER_BITS {
        w.push(1);
    }
    for &n in &nibbles {
        w.push_bits(n, 4);
        w.push(PARITY[n as usize]);
    }
    for bit in (0..COLUMN_BITS).rev() {
        w.push(column_parity(&nibbles, bit));
    }
    w.push(0);
    debug_assert_eq!(w.pos, FRAME_BITS);

    let mut out = [0u8; LAYOUT_LEN];
    out[0] = PREAMBLE;
    out[1..].copy_from_slice(&w.bytes);
    out
}

/// Verify a 9-byte layout and recover the five data bytes.
pub fn decode(layout: &[u8; LAYOUT_LEN]) -> Result<[u8; DATA_LEN]> {
    if layout[0] != PREAMBLE {
        return Err(Error::Em4100Layout(format!(
            "invalid preamble {:#04x}",
            layout[0]
        )));
    }
    let frame = &layout[1..];

    if (0..HEADER_BITS).any(|i| bit_at(frame, i) == 0) {
        return Err(Error::Em4100Layout("invalid header".into()));
    }

    let mut nibbles = [0u8; ROWS];
    for (row, nibble) in nibbles.iter_mut().enumerate() {
        let pos = HEADER_BITS + row * ROW_BITS;
        *nibble = bits_at(frame, pos, 4);
        if bit_at(frame, pos + 4) != PARITY[*nibble as usize] {
            return Err(Error::ParityMismatch {
                kind: "row",
                index: row,
            });
        }
    }

    let col_pos = HEADER_BITS + ROWS * ROW_BITS;
    for (i, bit) in (0..COLUMN_BITS).rev().enumerate() {
        if bit_at(frame, col_pos + i) != column_parity(&nibbles, bit) {
            return Err(Error::ParityMismatch {
                kind: "column",
                index: i,
            });
        }
    }

    if bit_at(frame, FRAME_BITS - 1) != 0 {
        return Err(Error::Em4100Layout("invalid stop bit".into()));
    }

    let mut out = [0u8; DATA_LEN];
    for (i, b) in out.iter_mut().enumerate() {
        *b = (nibbles[i * 2] << 4) | nibbles[i * 2 + 1];
    }
    Ok(out)
}
