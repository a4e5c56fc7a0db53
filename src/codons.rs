//src/codons.rs

/// An immutable set of 3-symbol codons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodonSet {
    codons: &'static [[u8; 3]],
}

/// `ATG`
pub const STANDARD_START: CodonSet = CodonSet::new(&[[b'A', b'T', b'G']]);
/// `TAG`, `TAA`, `TGA`
pub const STANDARD_STOP: CodonSet = CodonSet::new(&[
    [b'T', b'A', b'G'],
    [b'T', b'A', b'A'],
    [b'T', b'G', b'A'],
]);

impl CodonSet {
    pub const fn new(codons: &'static [[u8; 3]]) -> Self {
        Self { codons }
    }

    /// True only for a window of exactly three symbols that is in the set.
    #[inline]
    pub fn contains(&self, window: &[u8]) -> bool {
        window.len() == 3 && self.codons.iter().any(|c| c[..] == *window)
    }

    /// Whether the 3-symbol window starting at `pos` is in the set.
    /// Windows running past the end never match.
    #[inline]
    pub fn matches_at(&self, seq: &[u8], pos: usize) -> bool {
        pos + 3 <= seq.len() && self.contains(&seq[pos..pos + 3])
    }
}

/// Every third symbol of `seq`, starting at `offset` (0, 1 or 2).
pub fn frame(seq: &[u8], offset: usize) -> Vec<u8> {
    seq.iter().skip(offset).step_by(3).copied().collect()
}

/// Complement each base (A<->T, C<->G) and reverse. Anything else is copied through.
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .rev()
        .map(|&b| match b {
            b'A' => b'T',
            b'T' => b'A',
            b'C' => b'G',
            b'G' => b'C',
            b'a' => b't',
            b't' => b'a',
            b'c' => b'g',
            b'g' => b'c',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_lengths_and_symbols() {
        let seq = b"ACGTACGTAC";
        for offset in 0..3 {
            let f = frame(seq, offset);
            assert_eq!(f.len(), (seq.len() - offset).div_ceil(3));
            for (j, &b) in f.iter().enumerate() {
                assert_eq!(b, seq[offset + 3 * j]);
            }
        }
        assert_eq!(frame(seq, 0), b"ATGC".to_vec());
        assert_eq!(frame(seq, 1), b"CAT".to_vec());
        assert_eq!(frame(seq, 2), b"GCA".to_vec());
    }

    #[test]
    fn test_frame_of_short_sequence() {
        assert!(frame(b"AC", 2).is_empty());
        assert_eq!(frame(b"AC", 1), b"C".to_vec());
    }

    #[test]
    fn test_codon_membership() {
        assert!(STANDARD_START.contains(b"ATG"));
        assert!(!STANDARD_START.contains(b"AT"));
        assert!(STANDARD_STOP.contains(b"TGA"));
        assert!(!STANDARD_STOP.contains(b"TGAT"));
        assert!(!STANDARD_STOP.matches_at(b"GGTA", 2));
        assert!(STANDARD_STOP.matches_at(b"GGTAA", 2));
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement(b"ATGC"), b"GCAT".to_vec());
        assert_eq!(reverse_complement(b"AANG"), b"CNTT".to_vec());
        assert_eq!(reverse_complement(b""), Vec::<u8>::new());
    }
}
