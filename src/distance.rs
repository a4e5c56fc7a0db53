//src/distance.rs

use ahash::AHashMap;
use rayon::prelude::*;

use crate::types::Frequency;

/// Distance reported when two profiles have no code in common.
pub const INCOMPARABLE: f64 = -1.0;

/// Scale applied to the mean frequency delta.
pub const DISTANCE_SCALE: f64 = 1000.0;

/// First entry of `profile` whose code equals `code`.
pub fn find_same_frequency<'a>(code: &[u8], profile: &'a [Frequency]) -> Option<&'a Frequency> {
    profile.iter().find(|f| f.code == code)
}

/// Mean absolute frequency delta over the codes of `a` that also occur in
/// `b`, times 1000. Codes missing from `b` are skipped; if nothing matches
/// the result is [`INCOMPARABLE`], which means "no signal", not "close".
pub fn compare_profiles(a: &[Frequency], b: &[Frequency]) -> f64 {
    mean_delta(a, |code| find_same_frequency(code, b).map(|f| f.freq))
}

fn mean_delta<F>(a: &[Frequency], mut lookup: F) -> f64
where
    F: FnMut(&[u8]) -> Option<f64>,
{
    let mut sum = 0.0;
    let mut matched = 0usize;
    for item in a {
        if let Some(other) = lookup(&item.code) {
            sum += (item.freq - other).abs();
            matched += 1;
        }
    }
    if matched == 0 {
        return INCOMPARABLE;
    }
    (sum / matched as f64) * DISTANCE_SCALE
}

/// Code -> frequency lookup over one profile. With duplicate codes the first
/// entry wins, as with [`find_same_frequency`].
pub struct ProfileIndex<'a> {
    by_code: AHashMap<&'a [u8], f64>,
}

impl<'a> ProfileIndex<'a> {
    pub fn new(profile: &'a [Frequency]) -> Self {
        let mut by_code = AHashMap::with_capacity(profile.len());
        for f in profile {
            by_code.entry(f.code.as_slice()).or_insert(f.freq);
        }
        Self { by_code }
    }

    pub fn get(&self, code: &[u8]) -> Option<f64> {
        self.by_code.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

/// Same result as [`compare_profiles`], with `b` looked up through its index.
pub fn compare_indexed(a: &[Frequency], b: &ProfileIndex<'_>) -> f64 {
    mean_delta(a, |code| b.get(code))
}

/// Square genome-by-genome distance table with its row labels.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    pub labels: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i)?.get(j).copied()
    }
}

/// Cell `(i, j)` is `compare_profiles(profiles[i], profiles[j])`.
/// Rows are computed in parallel; row order follows `profiles`.
pub fn build_distance_matrix(labels: Vec<String>, profiles: &[Vec<Frequency>]) -> DistanceMatrix {
    debug_assert_eq!(labels.len(), profiles.len());

    let indexes: Vec<ProfileIndex<'_>> = profiles.iter().map(|p| ProfileIndex::new(p)).collect();
    let rows: Vec<Vec<f64>> = profiles
        .par_iter()
        .map(|a| indexes.iter().map(|b| compare_indexed(a, b)).collect())
        .collect();

    let incomparable = rows.iter().flatten().filter(|&&d| d == INCOMPARABLE).count();
    if incomparable > 0 {
        log::warn!(
            "{} of {} matrix cells have no shared codes",
            incomparable,
            rows.len() * rows.len()
        );
    }

    DistanceMatrix { labels, rows }
}
