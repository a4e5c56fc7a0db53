// src/scan/collector.rs

use super::scanner::{scan_start_to_stop, scan_stop_to_start};
use super::ScanConfig;
use crate::codons::{frame, reverse_complement};
use crate::types::{Fragment, FragmentSet, ScanMode};

/// Run the scanner from every position of `frame` whose window is in the
/// mode's trigger set (start codons for start→stop, stop codons for
/// stop→start) and append each fragment found to `out`.
///
/// Neighbouring triggers may produce overlapping or duplicate fragments; they
/// are all kept.
pub fn find_codons(frame: &[u8], mode: ScanMode, config: &ScanConfig, out: &mut Vec<Fragment>) {
    for i in 0..frame.len() {
        let found = match mode {
            ScanMode::StartToStop if config.start_codons.matches_at(frame, i) => {
                scan_start_to_stop(frame, i, &config.stop_codons)
            }
            ScanMode::StopToStart if config.stop_codons.matches_at(frame, i) => {
                scan_stop_to_start(frame, i, &config.start_codons, &config.stop_codons)
            }
            _ => None,
        };
        if let Some(fragment) = found {
            out.push(fragment);
        }
    }
}

fn call_three_frames(seq: &[u8], mode: ScanMode, config: &ScanConfig, out: &mut Vec<Fragment>) {
    for offset in 0..3 {
        find_codons(&frame(seq, offset), mode, config, out);
    }
}

/// All fragments for one scan mode: the three forward frames first, then the
/// three frames of the reverse complement. No length filter is applied here.
pub fn collect_fragments(seq: &[u8], mode: ScanMode, config: &ScanConfig) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    call_three_frames(seq, mode, config, &mut fragments);
    let forward = fragments.len();
    call_three_frames(&reverse_complement(seq), mode, config, &mut fragments);
    log::debug!(
        "{:?}: {} forward, {} reverse-complement fragments",
        mode,
        forward,
        fragments.len() - forward
    );
    fragments
}

/// Both scan modes over `seq`, then the minimum-length gate.
pub fn collect_fragment_set(seq: &[u8], config: &ScanConfig) -> FragmentSet {
    FragmentSet {
        start_to_stop: collect_fragments(seq, ScanMode::StartToStop, config),
        stop_to_start: collect_fragments(seq, ScanMode::StopToStart, config),
    }
    .filter_by_length(config.min_fragment_len)
}
