// rfidrw-rs/rfidrw/src/protocol/commands/buzzer.rs

/// Duration used by reader tools for a short confirmation beep.
pub const DEFAULT_BUZZER_DURATION: u8 = 9;

/// Encode Buzzer command payload (command code 0x03): a single duration byte.
pub fn encode_buzzer(duration: u8) -> Vec<u8> {
    vec![duration]
}
