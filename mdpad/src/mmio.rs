//! Memory-mapped register access.
//!
//! The pad interface is three byte registers: one read-only data register per
//! port and one write-only control register shared by both ports. This is the
//! only module that dereferences raw addresses.

use core::ptr::{read_volatile, write_volatile};
use core::sync::atomic::{compiler_fence, Ordering};

use crate::config::IoMap;
use crate::strobe::Port;

/// Access to the pad data registers and the shared control register.
///
/// Data reads return the raw bus value (active low: a released button reads
/// as 1).
pub trait PadBus {
    /// Read the data register of `port` once.
    fn read_data(&mut self, port: Port) -> u8;

    /// Write one code to the shared control register.
    fn write_control(&mut self, code: u8);
}

impl<B: PadBus + ?Sized> PadBus for &mut B {
    fn read_data(&mut self, port: Port) -> u8 {
        (**self).read_data(port)
    }

    fn write_control(&mut self, code: u8) {
        (**self).write_control(code)
    }
}

/// A single 8-bit I/O register at a fixed address.
///
/// Every access is volatile and fenced, so the compiler neither caches a read
/// nor moves it across a neighbouring register write.
pub struct Register(*mut u8);

impl Register {
    /// # Safety
    ///
    /// `addr` must be a mapped byte register that is valid to read and write
    /// for as long as the `Register` exists. On the X68000 this also means the
    /// CPU must be in supervisor mode.
    pub const unsafe fn new(addr: usize) -> Self {
        Self(addr as *mut u8)
    }

    /// Read the register once.
    pub fn read(&self) -> u8 {
        compiler_fence(Ordering::SeqCst);
        let value = unsafe { read_volatile(self.0) };
        compiler_fence(Ordering::SeqCst);
        value
    }

    /// Write `value` to the register.
    pub fn write(&self, value: u8) {
        compiler_fence(Ordering::SeqCst);
        unsafe { write_volatile(self.0, value) };
        compiler_fence(Ordering::SeqCst);
    }
}

/// The real hardware bus: two data registers plus the control register.
pub struct MmioBus {
    port_a: Register,
    port_b: Register,
    control: Register,
}

impl MmioBus {
    /// # Safety
    ///
    /// Every address in `map` must satisfy the contract of [`Register::new`].
    pub const unsafe fn new(map: &IoMap) -> Self {
        Self {
            port_a: Register::new(map.port_a),
            port_b: Register::new(map.port_b),
            control: Register::new(map.control),
        }
    }
}

impl PadBus for MmioBus {
    fn read_data(&mut self, port: Port) -> u8 {
        match port {
            Port::A => self.port_a.read(),
            Port::B => self.port_b.read(),
        }
    }

    fn write_control(&mut self, code: u8) {
        self.control.write(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_roundtrips_through_memory() {
        let mut cell: u8 = 0x5A;
        let reg = unsafe { Register::new(&mut cell as *mut u8 as usize) };
        assert_eq!(reg.read(), 0x5A);
        reg.write(0xA5);
        assert_eq!(reg.read(), 0xA5);
    }

    #[test]
    fn test_mmio_bus_routes_ports() {
        let mut regs = [0x11u8, 0x22, 0x00];
        let base = regs.as_mut_ptr() as usize;
        let map = IoMap {
            port_a: base,
            port_b: base + 1,
            control: base + 2,
            ..IoMap::X68000
        };
        let mut bus = unsafe { MmioBus::new(&map) };
        assert_eq!(bus.read_data(Port::A), 0x11);
        assert_eq!(bus.read_data(Port::B), 0x22);
        bus.write_control(0x09);
        assert_eq!(bus.control.read(), 0x09);
    }
}
