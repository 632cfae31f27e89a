//! Pad type detection.
//!
//! After a low/high/low/high/low strobe sequence the low nibble of the data
//! register identifies the pad: a 6-button pad pulls all four direction
//! lines low on its third TH=0 phase, a 3-button pad pulls left/right low on
//! every TH=0 phase, and anything else is treated as a plain 2-button pad.

use core::fmt;

/// Low nibble a 6-button pad presents on its ID phase (after inversion).
pub const ID_NIBBLE: u8 = 0x0F;

/// Left/right lines, pulled low by a 3-button pad while TH=0.
const THREE_BUTTON_MASK: u8 = 0x0C;

/// Controller generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// Atari-compatible 2-button pad.
    Legacy2,
    Three,
    Six,
}

impl DeviceType {
    /// Four-column label used on the status line.
    pub fn label(self) -> &'static str {
        match self {
            DeviceType::Legacy2 => "  2B",
            DeviceType::Three => "MD3B",
            DeviceType::Six => "MD6B",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a raw (active-low) sample taken on the fifth strobe write.
pub fn classify(raw: u8) -> DeviceType {
    let id = !raw & 0x0F;
    if id == ID_NIBBLE {
        DeviceType::Six
    } else if id & THREE_BUTTON_MASK == THREE_BUTTON_MASK {
        DeviceType::Three
    } else {
        DeviceType::Legacy2
    }
}
