//! Platform configuration: register addresses, strobe codes and debounce limits.

use crate::sample::{STABLE_MAX_ITERS, STABLE_READS};
use crate::strobe::StrobeCodes;

/// Where the pad registers live and which codes drive TH.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IoMap {
    /// Port A data register.
    pub port_a: usize,
    /// Port B data register.
    pub port_b: usize,
    /// Shared control register.
    pub control: usize,
    pub codes: StrobeCodes,
}

impl IoMap {
    /// X68000 joystick ports on the 8255 PPI ($E9A001/$E9A003, control $E9A007).
    pub const X68000: IoMap = IoMap {
        port_a: 0x00E9_A001,
        port_b: 0x00E9_A003,
        control: 0x00E9_A007,
        codes: StrobeCodes::PPI_BSR,
    };
}

/// Limits for the bounded-retry stable read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    /// Consecutive repeats of the same value that count as stable.
    pub stable_reads: u8,
    /// Total reads allowed before the last value is returned as-is.
    pub max_reads: u8,
}

impl Debounce {
    pub const DEFAULT: Debounce = Debounce {
        stable_reads: STABLE_READS,
        max_reads: STABLE_MAX_ITERS,
    };
}

impl Default for Debounce {
    fn default() -> Self {
        Self::DEFAULT
    }
}
