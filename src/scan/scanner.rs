// src/scan/scanner.rs

use crate::codons::CodonSet;
use crate::types::Fragment;

/// Extend a fragment from the start codon at `i` up to and including the first
/// stop codon whose window begins at or after `i + 3`.
///
/// Windows are tested at every symbol, not only at codon boundaries, so the
/// terminal stop may overlap the symbols before it. Returns `None` when the
/// frame ends first.
pub fn scan_start_to_stop(frame: &[u8], i: usize, stop_codons: &CodonSet) -> Option<Fragment> {
    let stride = i + 3;
    (stride..frame.len())
        .find(|&p| stop_codons.matches_at(frame, p))
        .map(|p| frame[i..p + 3].to_vec())
}

/// From the stop codon at `i`, look for start codons until the next stop codon
/// (or the end of the frame).
///
/// Every start codon found before the terminating stop replaces the previous
/// candidate, so the fragment runs from `i` through the *last* such start
/// codon. A stop seen before any start yields `None`.
pub fn scan_stop_to_start(
    frame: &[u8],
    i: usize,
    start_codons: &CodonSet,
    stop_codons: &CodonSet,
) -> Option<Fragment> {
    let mut last_start = None;
    for p in i + 3..frame.len() {
        if start_codons.matches_at(frame, p) {
            last_start = Some(p);
        } else if stop_codons.matches_at(frame, p) {
            break;
        }
    }
    last_start.map(|q| frame[i..q + 3].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codons::{STANDARD_START, STANDARD_STOP};

    #[test]
    fn test_start_to_stop_whole_sequence() {
        let frag = scan_start_to_stop(b"ATGAAATAG", 0, &STANDARD_STOP);
        assert_eq!(frag.as_deref(), Some(&b"ATGAAATAG"[..]));
        assert_eq!(frag.map(|f| f.len()), Some(9));
    }

    #[test]
    fn test_start_to_stop_without_stop() {
        assert_eq!(scan_start_to_stop(b"ATGAAACCC", 0, &STANDARD_STOP), None);
    }

    #[test]
    fn test_start_to_stop_overlapping_window() {
        // "ATA" at 3 is not a stop, "TAA" at 4 is
        let frag = scan_start_to_stop(b"ATGATAACC", 0, &STANDARD_STOP);
        assert_eq!(frag.as_deref(), Some(&b"ATGATAA"[..]));
    }

    #[test]
    fn test_start_to_stop_ignores_stop_inside_start_window() {
        // the stop search begins after the start codon itself
        let frag = scan_start_to_stop(b"CCATGACCTGA", 2, &STANDARD_STOP);
        assert_eq!(frag.as_deref(), Some(&b"ATGACCTGA"[..]));
    }

    #[test]
    fn test_start_to_stop_fragment_shape() {
        let frame = b"GGATGCCCAAATTTGGGTAACCATGTTTTAG";
        for i in 0..frame.len() {
            if !STANDARD_START.matches_at(frame, i) {
                continue;
            }
            let frag = scan_start_to_stop(frame, i, &STANDARD_STOP).expect("stop present");
            assert!(frag.len() >= 6);
            assert!(STANDARD_START.contains(&frag[..3]));
            assert!(STANDARD_STOP.contains(&frag[frag.len() - 3..]));
            for p in 3..frag.len() - 3 {
                assert!(!STANDARD_STOP.matches_at(&frag, p), "internal stop at {p}");
            }
        }
    }

    #[test]
    fn test_stop_to_start_aborts_on_stop() {
        assert_eq!(
            scan_stop_to_start(b"AAATAGATG", 0, &STANDARD_START, &STANDARD_STOP),
            None
        );
    }

    #[test]
    fn test_stop_to_start_finds_start() {
        let frag = scan_stop_to_start(b"AAATAGATG", 3, &STANDARD_START, &STANDARD_STOP);
        assert_eq!(frag.as_deref(), Some(&b"TAGATG"[..]));
    }

    #[test]
    fn test_stop_to_start_last_start_wins() {
        let frame = b"TAGATGCATGCTAAATG";
        let frag = scan_stop_to_start(frame, 0, &STANDARD_START, &STANDARD_STOP);
        assert_eq!(frag.as_deref(), Some(&b"TAGATGCATG"[..]));
    }

    #[test]
    fn test_stop_to_start_runs_to_frame_end() {
        let frame = b"TGACCATGCCCCATGCC";
        let frag = scan_stop_to_start(frame, 0, &STANDARD_START, &STANDARD_STOP);
        assert_eq!(frag.as_deref(), Some(&b"TGACCATGCCCCATG"[..]));
    }

    #[test]
    fn test_short_frames_never_yield() {
        assert_eq!(scan_start_to_stop(b"AT", 0, &STANDARD_STOP), None);
        assert_eq!(scan_start_to_stop(b"ATG", 0, &STANDARD_STOP), None);
        assert_eq!(
            scan_stop_to_start(b"TA", 0, &STANDARD_START, &STANDARD_STOP),
            None
        );
    }
}
