//src/profile.rs

use ahash::{AHashMap, AHashSet};

use crate::error::{OrfDistError, Result};
use crate::types::{Frequency, KmerConfig};

/// Reject layouts that would never advance or never match.
pub fn validate_kmer_config(kmer: KmerConfig) -> Result<()> {
    if kmer.stride == 0 || kmer.width == 0 {
        return Err(OrfDistError::InvalidKmerConfig {
            stride: kmer.stride,
            width: kmer.width,
        });
    }
    Ok(())
}

/// Distinct full-width windows of `pool`, read from position 0 every
/// `kmer.stride` symbols, in order of first appearance.
pub fn kmer_vocabulary(pool: &[u8], kmer: KmerConfig) -> Result<Vec<&[u8]>> {
    validate_kmer_config(kmer)?;

    let mut seen: AHashSet<&[u8]> = AHashSet::new();
    let mut vocabulary = Vec::new();
    let mut i = 0;
    while i + kmer.width <= pool.len() {
        let code = &pool[i..i + kmer.width];
        if seen.insert(code) {
            vocabulary.push(code);
        }
        i += kmer.stride;
    }
    Ok(vocabulary)
}

/// Occurrences of `code` in `pool`, counted left to right without overlap:
/// after a match the search resumes right after it.
pub fn count_occurrences(pool: &[u8], code: &[u8]) -> usize {
    if code.is_empty() || code.len() > pool.len() {
        return 0;
    }
    let mut count = 0;
    let mut i = 0;
    while i + code.len() <= pool.len() {
        if &pool[i..i + code.len()] == code {
            count += 1;
            i += code.len();
        } else {
            i += 1;
        }
    }
    count
}

/// Per-code running state for the single-pass count.
#[derive(Default, Clone, Copy)]
struct Occurrences {
    count: usize,
    next_free: usize,
}

/// Relative frequency of every vocabulary code: its non-overlapping
/// occurrence count anywhere in `pool`, divided by the pool length.
///
/// Counting touches each window position once. A match only counts when it
/// starts at or after the end of the previous counted match of the same code,
/// which gives exactly the counts of [`count_occurrences`].
pub fn frequency_profile(pool: &[u8], kmer: KmerConfig) -> Result<Vec<Frequency>> {
    let vocabulary = kmer_vocabulary(pool, kmer)?;
    if vocabulary.is_empty() {
        return Ok(Vec::new());
    }

    let width = kmer.width;
    let mut counts: AHashMap<&[u8], Occurrences> = vocabulary
        .iter()
        .map(|&code| (code, Occurrences::default()))
        .collect();

    for pos in 0..=pool.len() - width {
        if let Some(occ) = counts.get_mut(&pool[pos..pos + width]) {
            if pos >= occ.next_free {
                occ.count += 1;
                occ.next_free = pos + width;
            }
        }
    }

    let pool_len = pool.len() as f64;
    Ok(vocabulary
        .into_iter()
        .map(|code| {
            let count = counts.get(code).map_or(0, |occ| occ.count);
            Frequency::new(code, count as f64 / pool_len)
        })
        .collect())
}
