use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a distance run. Scans that find nothing, empty
/// profiles and incomparable genomes are ordinary results, not errors.
#[derive(Error, Debug)]
pub enum OrfDistError {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// A FASTA file held no record at all
    #[error("No FASTA record found in {}", .0.display())]
    EmptyFasta(PathBuf),
    /// Stride and width must both be positive
    #[error("Invalid k-mer configuration: stride={stride}, width={width}")]
    InvalidKmerConfig { stride: usize, width: usize },
    /// Nothing to compare
    #[error("No genomes given")]
    NoGenomes,
}

pub type Result<T> = std::result::Result<T, OrfDistError>;
