//! Mega Drive control pad decoder for 8255-style joystick ports.
//!
//! Reads 2-button (Atari-compatible), 3-button and 6-button pads by toggling
//! the TH strobe line through a shared control register and sampling the
//! port's data register. Every read is a fresh transaction: the pad type is
//! re-detected each time because pads can be swapped while powered.
//!
//! All volatile register access lives in [`mmio`]; the detector and decoders
//! work on plain sample bytes and run against any [`PadBus`].
//!
//! ```no_run
//! use mdpad::{Buttons, Pad, Port};
//!
//! // Supervisor mode is required before touching the X68000 I/O area.
//! let mut pad = unsafe { Pad::x68000() };
//! let state = pad.read(Port::A);
//! if state.contains(Buttons::START) {
//!     // ...
//! }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod decode;
pub mod detect;
pub mod locate;
pub mod mmio;
pub mod pad;
pub mod sample;
pub mod state;
pub mod strobe;

#[cfg(test)]
mod testbus;

pub use config::{Debounce, IoMap};
pub use decode::Raw6;
pub use detect::DeviceType;
pub use locate::{DefaultLocator, ExtSlotLocator, FixedSlot};
pub use mmio::{MmioBus, PadBus, Register};
pub use pad::Pad;
pub use state::{BinaryString, Buttons};
pub use strobe::{Level, Port, StrobeCodes};
