pub mod scanner;
pub mod collector;

pub use collector::{collect_fragment_set, collect_fragments, find_codons};
pub use scanner::{scan_start_to_stop, scan_stop_to_start};

use crate::codons::{CodonSet, STANDARD_START, STANDARD_STOP};

/// Fragments shorter than this are dropped after pooling.
pub const DEFAULT_MIN_FRAGMENT_LEN: usize = 100;

/// Codon sets and the length gate used while collecting fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub start_codons: CodonSet,
    pub stop_codons: CodonSet,
    pub min_fragment_len: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            start_codons: STANDARD_START,
            stop_codons: STANDARD_STOP,
            min_fragment_len: DEFAULT_MIN_FRAGMENT_LEN,
        }
    }
}
