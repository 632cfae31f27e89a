//! Pad read transactions.
//!
//! [`Pad`] owns the bus, so every transaction borrows it mutably for its
//! whole strobe/read sequence. A transaction on one port can therefore never
//! interleave with one on the other port, which matters because both ports
//! share the control register.

use log::{debug, trace};

use crate::config::{Debounce, IoMap};
use crate::decode::{decode_six, decode_three, Raw6};
use crate::detect::{classify, DeviceType};
use crate::locate::{DefaultLocator, ExtSlotLocator};
use crate::mmio::{MmioBus, PadBus};
use crate::sample::read_stable;
use crate::state::Buttons;
use crate::strobe::{set_strobe, Level, Port, StrobeCodes};

/// Strobe schedule of the detection sequence.
const DETECT_SEQUENCE: [Level; 5] = [Level::Low, Level::High, Level::Low, Level::High, Level::Low];

/// Strobe schedule of the six informative 6-button samples.
const SIX_SEQUENCE: [Level; 6] = [
    Level::Low,
    Level::High,
    Level::Low,
    Level::High,
    Level::Low,
    Level::High,
];

/// Mega Drive pad reader on top of a [`PadBus`].
pub struct Pad<B, L = DefaultLocator> {
    bus: B,
    codes: StrobeCodes,
    debounce: Debounce,
    locator: L,
}

impl Pad<MmioBus> {
    /// Reader for the X68000 joystick ports.
    ///
    /// # Safety
    ///
    /// The CPU must be in supervisor mode for as long as the pad is used, and
    /// nothing else may drive the 8255 control register meanwhile.
    pub unsafe fn x68000() -> Self {
        Self::from_map(&IoMap::X68000)
    }

    /// # Safety
    ///
    /// See [`MmioBus::new`].
    pub unsafe fn from_map(map: &IoMap) -> Self {
        Pad::new(MmioBus::new(map), map.codes)
    }
}

impl<B: PadBus> Pad<B> {
    pub fn new(bus: B, codes: StrobeCodes) -> Self {
        Self {
            bus,
            codes,
            debounce: Debounce::DEFAULT,
            locator: DefaultLocator,
        }
    }
}

impl<B: PadBus, L: ExtSlotLocator> Pad<B, L> {
    /// Replace the extended-slot heuristic.
    pub fn with_locator<M: ExtSlotLocator>(self, locator: M) -> Pad<B, M> {
        Pad {
            bus: self.bus,
            codes: self.codes,
            debounce: self.debounce,
            locator,
        }
    }

    pub fn with_debounce(mut self, debounce: Debounce) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn into_bus(self) -> B {
        self.bus
    }

    fn strobe(&mut self, port: Port, level: Level) {
        set_strobe(&mut self.bus, &self.codes, port, level);
    }

    /// Drive TH and take a debounced raw sample.
    fn strobe_sample(&mut self, port: Port, level: Level) -> u8 {
        self.strobe(port, level);
        read_stable(&mut self.bus, port, &self.debounce)
    }

    /// Identify the pad on `port`. Best effort: one noisy sample can
    /// misclassify, and nothing is cached between calls.
    pub fn detect(&mut self, port: Port) -> DeviceType {
        let mut last = 0xFF;
        for level in DETECT_SEQUENCE {
            last = self.strobe_sample(port, level);
        }
        let kind = classify(last);
        trace!("port {:?}: id sample {:#04x} -> {:?}", port, last, kind);
        kind
    }

    /// Read a 3-button (or 2-button) pad.
    pub fn read_three(&mut self, port: Port) -> Buttons {
        // Settle the line; the value is meaningless.
        self.strobe(port, Level::Low);
        let _ = self.bus.read_data(port);

        let high = !self.strobe_sample(port, Level::High);
        let low = !self.strobe_sample(port, Level::Low);
        trace!("port {:?}: th1 {:#04x} th0 {:#04x}", port, high, low);

        decode_three(high, low)
    }

    /// Capture the six informative 6-button samples, already inverted.
    ///
    /// Leaves TH high.
    pub fn read_six_raw(&mut self, port: Port) -> Raw6 {
        let _ = self.strobe_sample(port, Level::High);

        let mut raw = [0u8; Raw6::LEN];
        for (slot, level) in raw.iter_mut().zip(SIX_SEQUENCE) {
            *slot = self.strobe_sample(port, level);
        }

        let _ = self.strobe_sample(port, Level::High);
        Raw6::from_bus(raw)
    }

    /// Read a 6-button pad.
    pub fn read_six(&mut self, port: Port) -> Buttons {
        let raw = self.read_six_raw(port);
        let slot = self.locator.locate(&raw);
        trace!(
            "port {:?}: samples {:02x?} ext slot {:?}",
            port,
            raw.samples,
            slot
        );
        if slot.is_none() {
            debug!(
                "port {:?}: no extended slot, X/Y/Z/Mode reported released",
                port
            );
        }
        decode_six(&raw, slot)
    }

    /// Detect the pad and read it with the matching decoder.
    ///
    /// Anything that is not a 6-button pad goes through the 3-button path.
    pub fn read(&mut self, port: Port) -> Buttons {
        match self.detect(port) {
            DeviceType::Six => self.read_six(port),
            DeviceType::Three | DeviceType::Legacy2 => self.read_three(port),
        }
    }
}
