//! Turning inverted samples into [`Buttons`].
//!
//! All inputs here are already inverted (pressed = 1).
//!
//! | TH | bits 0-3              | bit 5 | bit 6 |
//! |----|-----------------------|-------|-------|
//! | 1  | up, down, left, right | B     | C     |
//! | 0  | up, down, (id)        | A     | Start |
//!
//! A 6-button pad reuses bits 0-3 of one extra phase for Z, Y, X, Mode.

use crate::detect::ID_NIBBLE;
use crate::state::Buttons;

/// The six informative samples of a 6-button read, inverted, in strobe
/// order: TH=0, TH=1, TH=0, TH=1, TH=0, TH=1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Raw6 {
    pub samples: [u8; 6],
}

impl Raw6 {
    pub const LEN: usize = 6;

    /// Wrap six raw (active-low) bus values, inverting them.
    pub fn from_bus(raw: [u8; 6]) -> Self {
        Self {
            samples: raw.map(|v| !v),
        }
    }

    /// OR of the TH=0 samples, leaving out `skip`.
    pub fn th0(&self, skip: Option<usize>) -> u8 {
        self.merge(0, skip)
    }

    /// OR of the TH=1 samples, leaving out `skip`.
    pub fn th1(&self, skip: Option<usize>) -> u8 {
        self.merge(1, skip)
    }

    fn merge(&self, phase: usize, skip: Option<usize>) -> u8 {
        self.samples
            .iter()
            .enumerate()
            .skip(phase)
            .step_by(2)
            .filter(|&(i, _)| Some(i) != skip)
            .fold(0, |acc, (_, &v)| acc | v)
    }
}

fn directions(th1: u8) -> Buttons {
    let mut state = Buttons::empty();
    state.set(Buttons::UP, th1 & (1 << 0) != 0);
    state.set(Buttons::DOWN, th1 & (1 << 1) != 0);
    state.set(Buttons::LEFT, th1 & (1 << 2) != 0);
    state.set(Buttons::RIGHT, th1 & (1 << 3) != 0);
    state
}

fn face(th1: u8, th0: u8) -> Buttons {
    let mut state = Buttons::empty();
    state.set(Buttons::B, th1 & (1 << 5) != 0);
    state.set(Buttons::C, th1 & (1 << 6) != 0);
    state.set(Buttons::A, th0 & (1 << 5) != 0);
    state.set(Buttons::START, th0 & (1 << 6) != 0);
    state
}

fn extended(nibble: u8) -> Buttons {
    let mut state = Buttons::empty();
    state.set(Buttons::Z, nibble & (1 << 0) != 0);
    state.set(Buttons::Y, nibble & (1 << 1) != 0);
    state.set(Buttons::X, nibble & (1 << 2) != 0);
    state.set(Buttons::MODE, nibble & (1 << 3) != 0);
    state
}

/// Decode a 3-button transaction from its TH=1 and TH=0 samples.
///
/// Never sets X, Y, Z or Mode.
pub fn decode_three(high: u8, low: u8) -> Buttons {
    directions(high) | face(high, low)
}

/// Decode a 6-button transaction given the extended slot, if any.
///
/// The slot sample is left out of both merges. A slot holding the ID
/// nibble carries no buttons.
pub fn decode_six(raw: &Raw6, slot: Option<usize>) -> Buttons {
    let slot = slot.filter(|&i| i < Raw6::LEN);
    let th0 = raw.th0(slot);
    let th1 = raw.th1(slot);

    let ext = match slot {
        Some(i) if raw.samples[i] & 0x0F != ID_NIBBLE => raw.samples[i] & 0x0F,
        _ => 0,
    };

    directions(th1) | face(th1, th0) | extended(ext)
}
