//! Debounced sampling of a pad data register.
//!
//! The data lines glitch for a few cycles after TH changes, so a single read
//! flickers. The data register is re-read until the same value repeats
//! `stable_reads` times in a row, or until `max_reads` reads have been made.
//! On the cap the last value is returned anyway.

use log::debug;

use crate::config::Debounce;
use crate::mmio::PadBus;
use crate::strobe::Port;

/// Consecutive repeats required for a read to count as stable.
pub const STABLE_READS: u8 = 3;
/// Hard cap on reads per sample.
pub const STABLE_MAX_ITERS: u8 = 64;

/// Read `port` until stable or until the read budget is spent.
///
/// Returns the raw (active-low) value.
pub fn read_stable<B: PadBus>(bus: &mut B, port: Port, limits: &Debounce) -> u8 {
    let mut prev = bus.read_data(port);
    let mut reads = 1u8;
    let mut stable = 0u8;

    while stable < limits.stable_reads && reads < limits.max_reads {
        let cur = bus.read_data(port);
        reads += 1;
        stable = if cur == prev { stable + 1 } else { 0 };
        prev = cur;
    }

    if stable < limits.stable_reads {
        debug!(
            "port {:?}: no stable value after {} reads, using {:#04x}",
            port, reads, prev
        );
    }

    prev
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testbus::ScriptedBus;

    fn sample(reads: Vec<u8>) -> (u8, usize) {
        let mut bus = ScriptedBus::from_reads(vec![reads]);
        bus.write_control(0x08);
        let value = read_stable(&mut bus, Port::A, &Debounce::DEFAULT);
        (value, bus.reads)
    }

    #[test]
    fn test_constant_value_is_returned() {
        let (value, reads) = sample(vec![0x3F]);
        assert_eq!(value, 0x3F);
        // First read plus three repeats.
        assert_eq!(reads, 4);
    }

    #[test]
    fn test_glitch_then_settle() {
        let (value, reads) = sample(vec![0xFF, 0x7F, 0xFF, 0x33]);
        assert_eq!(value, 0x33);
        assert_eq!(reads, 7);
    }

    #[test]
    fn test_two_repeats_are_not_enough() {
        let (value, _) = sample(vec![0x10, 0x10, 0x10, 0x20]);
        assert_eq!(value, 0x20);
    }

    #[test]
    fn test_unstable_returns_last_of_64() {
        let noise: Vec<u8> = (0..100u8).collect();
        let (value, reads) = sample(noise);
        assert_eq!(reads, 64);
        assert_eq!(value, 63);
    }

    #[test]
    fn test_stable_read_at_the_cap() {
        let mut reads: Vec<u8> = (0..60u8).collect();
        reads.extend([0xAA; 4]);
        let (value, count) = sample(reads);
        assert_eq!(value, 0xAA);
        assert_eq!(count, 64);
    }

    #[test]
    fn test_custom_limits() {
        let mut bus = ScriptedBus::from_reads(vec![vec![1, 2, 3, 4, 5, 6]]);
        bus.write_control(0x08);
        let limits = Debounce {
            stable_reads: 1,
            max_reads: 4,
        };
        assert_eq!(read_stable(&mut bus, Port::A, &limits), 4);
        assert_eq!(bus.reads, 4);
    }
}
