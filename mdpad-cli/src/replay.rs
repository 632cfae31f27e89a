//! A [`PadBus`] that plays back a recorded trace for one port.

use log::warn;
use mdpad::{PadBus, Port, StrobeCodes};

use crate::trace::TraceStep;

/// Idle value of an unconnected data register.
const IDLE: u8 = 0xFF;

pub struct ReplayBus {
    port: Port,
    codes: StrobeCodes,
    steps: Vec<TraceStep>,
    /// Strobe writes seen on the traced port.
    writes: usize,
    /// Reads taken since the last strobe write.
    cursor: usize,
    reads: usize,
}

impl ReplayBus {
    pub fn new(port: Port, codes: StrobeCodes, steps: Vec<TraceStep>) -> Self {
        Self {
            port,
            codes,
            steps,
            writes: 0,
            cursor: 0,
            reads: 0,
        }
    }

    /// Strobe writes consumed so far on the traced port.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Steps in the trace.
    pub fn steps(&self) -> usize {
        self.steps.len()
    }
}

impl PadBus for ReplayBus {
    fn read_data(&mut self, port: Port) -> u8 {
        if port != self.port {
            return IDLE;
        }
        self.reads += 1;

        let value = match self.writes.checked_sub(1).and_then(|i| self.steps.get(i)) {
            Some(step) => match step.reads.get(self.cursor) {
                Some(&v) => v,
                None => step.reads.last().copied().unwrap_or(IDLE),
            },
            None => IDLE,
        };
        self.cursor += 1;
        value
    }

    fn write_control(&mut self, code: u8) {
        match self.codes.decode(code) {
            Some((port, _)) if port == self.port => {
                self.writes += 1;
                self.cursor = 0;
            }
            Some(_) => {}
            None => warn!("ignoring unknown control code {:#04x}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::parse_trace;
    use mdpad::{Buttons, DeviceType, Pad};

    fn pad(port: Port, trace: &str) -> Pad<ReplayBus> {
        let steps = parse_trace(trace).unwrap();
        Pad::new(ReplayBus::new(port, StrobeCodes::PPI_BSR, steps), StrobeCodes::PPI_BSR)
    }

    #[test]
    fn test_replay_three_button_frame() {
        let mut p = pad(Port::A, "FF FF FF FF F3  FF D0 DF");
        assert_eq!(p.detect(Port::A), DeviceType::Three);
        let state = p.read_three(Port::A);
        assert_eq!(state, Buttons::DPAD | Buttons::A | Buttons::B);
        assert_eq!(p.bus().writes(), p.bus().steps());
    }

    #[test]
    fn test_replay_glitches_are_debounced() {
        let mut p = pad(Port::B, "FF FF FF FF FF>00>FF>F0");
        assert_eq!(p.detect(Port::B), DeviceType::Six);
        assert_eq!(p.bus().writes(), 5);
    }

    #[test]
    fn test_other_port_is_idle() {
        let mut p = pad(Port::A, "00 00 00 00 00");
        assert_eq!(p.detect(Port::B), DeviceType::Legacy2);
        assert_eq!(p.bus().writes(), 0);
        assert_eq!(p.bus().reads(), 0);
    }

    #[test]
    fn test_past_end_reads_idle() {
        let mut p = pad(Port::A, "00");
        assert_eq!(p.read_six(Port::A), Buttons::empty());
        assert_eq!(p.bus().writes(), 8);
    }

    #[test]
    fn test_bundled_traces() {
        let mut p = pad(Port::A, include_str!("../traces/six_button.trace"));
        assert_eq!(p.read(Port::A).to_binary(), "100100110001");
        assert_eq!(p.bus().writes(), p.bus().steps());

        let mut p = pad(Port::B, include_str!("../traces/three_button_noisy.trace"));
        assert_eq!(p.read(Port::B), Buttons::DPAD | Buttons::A | Buttons::B);
        assert_eq!(p.bus().writes(), p.bus().steps());
    }
}
