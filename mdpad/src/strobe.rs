//! TH strobe control.
//!
//! Both ports share one control register. On the 8255 each write is a
//! bit set/reset (BSR) command for a single port C line: PC4 is TH for
//! port A and PC5 is TH for port B.

use crate::mmio::PadBus;

/// Joystick port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Port {
    A,
    B,
}

impl Port {
    pub const ALL: [Port; 2] = [Port::A, Port::B];

    /// Label shown on the status line.
    pub fn label(self) -> &'static str {
        match self {
            Port::A => "#1",
            Port::B => "#2",
        }
    }
}

/// Level of the TH line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    High,
}

/// Control codes that assert or release TH on each port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrobeCodes {
    pub a_low: u8,
    pub a_high: u8,
    pub b_low: u8,
    pub b_high: u8,
}

impl StrobeCodes {
    /// 8255 BSR commands: PC4 reset/set for port A, PC5 reset/set for port B.
    pub const PPI_BSR: StrobeCodes = StrobeCodes {
        a_low: 0x08,
        a_high: 0x09,
        b_low: 0x0A,
        b_high: 0x0B,
    };

    pub const fn code(&self, port: Port, level: Level) -> u8 {
        match (port, level) {
            (Port::A, Level::Low) => self.a_low,
            (Port::A, Level::High) => self.a_high,
            (Port::B, Level::Low) => self.b_low,
            (Port::B, Level::High) => self.b_high,
        }
    }

    /// Reverse lookup of a control code, for bus recorders and replays.
    pub fn decode(&self, code: u8) -> Option<(Port, Level)> {
        [
            (Port::A, Level::Low),
            (Port::A, Level::High),
            (Port::B, Level::Low),
            (Port::B, Level::High),
        ]
        .into_iter()
        .find(|&(port, level)| self.code(port, level) == code)
    }
}

impl Default for StrobeCodes {
    fn default() -> Self {
        Self::PPI_BSR
    }
}

/// Drive TH on `port` to `level`. Writes exactly one control code.
pub fn set_strobe<B: PadBus>(bus: &mut B, codes: &StrobeCodes, port: Port, level: Level) {
    bus.write_control(codes.code(port, level));
}
