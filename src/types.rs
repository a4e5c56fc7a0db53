//src/types.rs

/// A minimal representation of one loaded genome.
#[derive(Debug, Clone)]
pub struct GenomeSequence {
    pub id: String,
    pub header_line: String,
    pub seq: Vec<u8>,
}

impl GenomeSequence {
    pub fn new(id: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        let id = id.into();
        Self {
            header_line: id.clone(),
            id,
            seq: seq.into(),
        }
    }
}

/// A contiguous slice of one reading frame, copied out by the scanner.
pub type Fragment = Vec<u8>;

/// Which codon pair the scanner is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// From a start codon up to the next stop codon.
    StartToStop,
    /// From a stop codon up to the last start codon before the next stop.
    StopToStart,
}

/// Fragments of one genome, kept apart by scan mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentSet {
    pub start_to_stop: Vec<Fragment>,
    pub stop_to_start: Vec<Fragment>,
}

impl FragmentSet {
    /// Drop every fragment shorter than `min_len`. Each side is filtered on its own.
    pub fn filter_by_length(self, min_len: usize) -> Self {
        Self {
            start_to_stop: keep_long(self.start_to_stop, min_len),
            stop_to_start: keep_long(self.stop_to_start, min_len),
        }
    }

    /// Start→stop fragments followed by stop→start fragments, glued together
    /// in collection order.
    pub fn pooled(&self) -> Vec<u8> {
        let total: usize = self
            .start_to_stop
            .iter()
            .chain(&self.stop_to_start)
            .map(Vec::len)
            .sum();
        let mut pool = Vec::with_capacity(total);
        for fragment in self.start_to_stop.iter().chain(&self.stop_to_start) {
            pool.extend_from_slice(fragment);
        }
        pool
    }

    pub fn len(&self) -> usize {
        self.start_to_stop.len() + self.stop_to_start.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn keep_long(fragments: Vec<Fragment>, min_len: usize) -> Vec<Fragment> {
    fragments.into_iter().filter(|f| f.len() >= min_len).collect()
}

/// A k-mer code paired with its relative frequency in one pooled sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Frequency {
    pub code: Vec<u8>,
    pub freq: f64,
}

impl Frequency {
    pub fn new(code: impl Into<Vec<u8>>, freq: f64) -> Self {
        Self {
            code: code.into(),
            freq,
        }
    }
}

/// Sliding-window layout for a profile: `stride` is how far the window moves,
/// `width` is the window length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmerConfig {
    pub stride: usize,
    pub width: usize,
}

impl KmerConfig {
    /// Single codons read at every position.
    pub const CODON: KmerConfig = KmerConfig { stride: 1, width: 3 };
    /// Codon pairs read every third position.
    pub const DICODON: KmerConfig = KmerConfig { stride: 3, width: 6 };

    pub fn name(&self) -> String {
        match *self {
            Self::CODON => "codon".to_string(),
            Self::DICODON => "dicodon".to_string(),
            KmerConfig { stride, width } => format!("k{width}s{stride}"),
        }
    }
}
