//! Scripted bus used by the unit tests.

use crate::mmio::PadBus;
use crate::strobe::Port;

/// Plays back one script entry per control write.
///
/// Entry `n` describes the data register after the `n`th control write: a
/// list of successive read values whose last element repeats forever. Reads
/// before the first write, or after the script runs out, return idle `0xFF`.
pub struct ScriptedBus {
    steps: Vec<Vec<u8>>,
    cursor: usize,
    pub writes: Vec<u8>,
    pub reads: usize,
    /// Reads taken after each control write.
    pub reads_per_step: Vec<usize>,
}

impl ScriptedBus {
    /// One constant data value per control write.
    pub fn new(steps: &[u8]) -> Self {
        Self::from_reads(steps.iter().map(|&v| vec![v]).collect())
    }

    pub fn from_reads(steps: Vec<Vec<u8>>) -> Self {
        Self {
            steps,
            cursor: 0,
            writes: Vec::new(),
            reads: 0,
            reads_per_step: Vec::new(),
        }
    }
}

impl PadBus for ScriptedBus {
    fn read_data(&mut self, _port: Port) -> u8 {
        self.reads += 1;
        let Some(step) = self.writes.len().checked_sub(1) else {
            return 0xFF;
        };
        self.reads_per_step[step] += 1;
        let value = match self.steps.get(step) {
            Some(reads) if !reads.is_empty() => reads[self.cursor.min(reads.len() - 1)],
            _ => 0xFF,
        };
        self.cursor += 1;
        value
    }

    fn write_control(&mut self, code: u8) {
        self.writes.push(code);
        self.reads_per_step.push(0);
        self.cursor = 0;
    }
}
