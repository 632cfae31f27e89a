//! Normalized pad state.

use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// Buttons currently held down. Set means pressed.
    ///
    /// Every combination is accepted; the decoders never reject a state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u16 {
        const UP    = 1 << 0;
        const DOWN  = 1 << 1;
        const LEFT  = 1 << 2;
        const RIGHT = 1 << 3;
        const A     = 1 << 4;
        const B     = 1 << 5;
        const C     = 1 << 6;
        const START = 1 << 7;
        // 6-button pads only
        const X     = 1 << 8;
        const Y     = 1 << 9;
        const Z     = 1 << 10;
        const MODE  = 1 << 11;
    }
}

/// Display order of [`Buttons::to_binary`], most significant first.
const BINARY_ORDER: [Buttons; 12] = [
    Buttons::MODE,
    Buttons::Z,
    Buttons::Y,
    Buttons::X,
    Buttons::START,
    Buttons::C,
    Buttons::B,
    Buttons::A,
    Buttons::RIGHT,
    Buttons::LEFT,
    Buttons::DOWN,
    Buttons::UP,
];

impl Buttons {
    /// D-pad directions.
    pub const DPAD: Buttons = Buttons::UP
        .union(Buttons::DOWN)
        .union(Buttons::LEFT)
        .union(Buttons::RIGHT);

    /// Buttons that only a 6-button pad reports.
    pub const EXTENDED: Buttons = Buttons::X
        .union(Buttons::Y)
        .union(Buttons::Z)
        .union(Buttons::MODE);

    /// Column header matching [`Buttons::to_binary`].
    pub const BINARY_HEADER: &'static str = "MZYXSCBARLDU";

    /// Render as twelve `0`/`1` characters in `MZYXSCBARLDU` order.
    pub fn to_binary(self) -> BinaryString {
        let mut out = [b'0'; 12];
        for (ch, flag) in out.iter_mut().zip(BINARY_ORDER) {
            if self.contains(flag) {
                *ch = b'1';
            }
        }
        BinaryString(out)
    }
}

/// Fixed-width binary rendering of a [`Buttons`] value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryString([u8; 12]);

impl BinaryString {
    pub fn as_str(&self) -> &str {
        // Only ASCII '0' and '1' are ever stored.
        core::str::from_utf8(&self.0).unwrap_or_default()
    }

    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }
}

impl fmt::Display for BinaryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for BinaryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl PartialEq<&str> for BinaryString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
