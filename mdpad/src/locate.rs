//! Finding the sample that carries X/Y/Z/Mode on a 6-button read.
//!
//! Nothing in the protocol tags the extended nibble. It is found by looking
//! for the sample whose low nibble stops matching the direction lines.

use crate::decode::Raw6;
use crate::detect::ID_NIBBLE;

/// Picks the extended-button slot out of a 6-sample capture.
pub trait ExtSlotLocator {
    /// Index into [`Raw6::samples`], or `None` when no sample carries
    /// extended buttons.
    fn locate(&self, raw: &Raw6) -> Option<usize>;
}

impl<F> ExtSlotLocator for F
where
    F: Fn(&Raw6) -> Option<usize>,
{
    fn locate(&self, raw: &Raw6) -> Option<usize> {
        self(raw)
    }
}

/// Third TH=0 phase first (index 4), then the second (index 2).
const LOW_CANDIDATES: [usize; 2] = [4, 2];
/// Clone topologies: third TH=1 phase (index 5), then the second (index 3).
const HIGH_CANDIDATES: [usize; 2] = [5, 3];

/// Positional heuristic covering genuine pads and the common clone layouts.
///
/// The reference is the direction nibble of the first TH=1 sample. The first
/// candidate whose nibble differs from it and is not the ID nibble wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultLocator;

impl ExtSlotLocator for DefaultLocator {
    fn locate(&self, raw: &Raw6) -> Option<usize> {
        let reference = raw.samples[1] & 0x0F;
        LOW_CANDIDATES
            .into_iter()
            .chain(HIGH_CANDIDATES)
            .find(|&i| {
                let nibble = raw.samples[i] & 0x0F;
                nibble != reference && nibble != ID_NIBBLE
            })
    }
}

/// Always uses one slot, for hardware with a known layout.
#[derive(Clone, Copy, Debug)]
pub struct FixedSlot(pub usize);

impl ExtSlotLocator for FixedSlot {
    fn locate(&self, _raw: &Raw6) -> Option<usize> {
        (self.0 < Raw6::LEN).then_some(self.0)
    }
}
