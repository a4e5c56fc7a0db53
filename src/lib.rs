// src/lib.rs
pub mod codons;
pub mod distance;
pub mod error;
pub mod fasta;
pub mod phylip;
pub mod profile;
pub mod scan;
pub mod types;

use rayon::prelude::*;
use std::path::PathBuf;

use crate::distance::{build_distance_matrix, DistanceMatrix};
use crate::error::{OrfDistError, Result};
use crate::fasta::read_first_fasta_record;
use crate::profile::{frequency_profile, validate_kmer_config};
use crate::scan::{collect_fragment_set, ScanConfig};
use crate::types::{FragmentSet, Frequency, GenomeSequence, KmerConfig};

/// Everything a distance run can be tuned with.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub scan: ScanConfig,
    /// One profile and one matrix per entry, in this order.
    pub kmer_configs: Vec<KmerConfig>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            kmer_configs: vec![KmerConfig::CODON, KmerConfig::DICODON],
        }
    }
}

/// Length-filtered fragments of one genome and its frequency profiles.
#[derive(Debug, Clone)]
pub struct GenomeProfile {
    pub id: String,
    pub fragments: FragmentSet,
    /// Parallel to `PipelineConfig::kmer_configs`.
    pub profiles: Vec<Vec<Frequency>>,
}

/// Fragments and profiles for a single genome. Genomes never share state, so
/// callers are free to run this for many genomes at once.
pub fn profile_genome(genome: &GenomeSequence, config: &PipelineConfig) -> Result<GenomeProfile> {
    let fragments = collect_fragment_set(&genome.seq, &config.scan);
    let pool = fragments.pooled();
    if pool.is_empty() {
        log::warn!("{}: no fragment of at least {} bp", genome.id, config.scan.min_fragment_len);
    }

    let profiles = config
        .kmer_configs
        .iter()
        .map(|&kmer| frequency_profile(&pool, kmer))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "{}: {} start-to-stop and {} stop-to-start fragments, pool {} bp",
        genome.id,
        fragments.start_to_stop.len(),
        fragments.stop_to_start.len(),
        pool.len()
    );

    Ok(GenomeProfile {
        id: genome.id.clone(),
        fragments,
        profiles,
    })
}

/// Per-genome profiles plus one distance matrix per k-mer configuration.
pub struct DistanceResults {
    pub genomes: Vec<GenomeProfile>,
    pub kmer_configs: Vec<KmerConfig>,
    /// Parallel to `kmer_configs`.
    pub matrices: Vec<DistanceMatrix>,
}

impl DistanceResults {
    /// All matrices in PHYLIP style, printed one after the other.
    pub fn get_phylip_text(&self) -> String {
        self.matrices.iter().map(DistanceMatrix::to_phylip).collect()
    }

    pub fn matrix(&self, kmer: KmerConfig) -> Option<&DistanceMatrix> {
        self.kmer_configs
            .iter()
            .position(|&k| k == kmer)
            .map(|i| &self.matrices[i])
    }
}

/// Profile every genome (in parallel, order kept) and build the matrices.
pub fn compute_distances(
    genomes: &[GenomeSequence],
    config: &PipelineConfig,
) -> Result<DistanceResults> {
    if genomes.is_empty() {
        return Err(OrfDistError::NoGenomes);
    }
    for &kmer in &config.kmer_configs {
        validate_kmer_config(kmer)?;
    }

    let profiled = genomes
        .par_iter()
        .map(|genome| profile_genome(genome, config))
        .collect::<Result<Vec<_>>>()?;

    let labels: Vec<String> = profiled.iter().map(|g| g.id.clone()).collect();
    let matrices = config
        .kmer_configs
        .iter()
        .enumerate()
        .map(|(k, kmer)| {
            let profiles: Vec<Vec<Frequency>> =
                profiled.iter().map(|g| g.profiles[k].clone()).collect();
            log::info!("Building {} distance matrix for {} genomes", kmer.name(), labels.len());
            build_distance_matrix(labels.clone(), &profiles)
        })
        .collect();

    Ok(DistanceResults {
        genomes: profiled,
        kmer_configs: config.kmer_configs.clone(),
        matrices,
    })
}

/// Load the first record of each FASTA file, then [`compute_distances`].
pub fn compute_distances_from_fasta(
    fasta_paths: &[PathBuf],
    config: &PipelineConfig,
) -> Result<DistanceResults> {
    let genomes = fasta_paths
        .iter()
        .map(read_first_fasta_record)
        .collect::<Result<Vec<_>>>()?;
    compute_distances(&genomes, config)
}
