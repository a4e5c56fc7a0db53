use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::error::{OrfDistError, Result};
use crate::types::GenomeSequence;

fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let f = File::open(path)?;

    // If the file ends with ".gz", wrap it in a MultiGzDecoder
    let is_gz = path
        .extension()
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    Ok(if is_gz {
        Box::new(BufReader::new(MultiGzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    })
}

fn record_from_header(header_line: &str) -> GenomeSequence {
    GenomeSequence {
        id: header_line
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string(),
        header_line: header_line.to_string(),
        seq: Vec::new(),
    }
}

/// Read FASTA records, stopping after `limit` records when one is given.
/// Sequence lines are joined and upper-cased; `.gz` input is decompressed.
fn read_records(path: &Path, limit: Option<usize>) -> Result<Vec<GenomeSequence>> {
    let mut reader = open_reader(path)?;
    let mut records: Vec<GenomeSequence> = Vec::new();
    let mut current: Option<GenomeSequence> = None;
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let trimmed = line.trim_end();

        if let Some(header) = trimmed.strip_prefix('>') {
            if let Some(done) = current.take() {
                records.push(done);
                if limit.is_some_and(|n| records.len() >= n) {
                    return Ok(records);
                }
            }
            current = Some(record_from_header(header));
        } else if let Some(record) = current.as_mut() {
            record.seq.extend(
                trimmed
                    .bytes()
                    .filter(|b| !b.is_ascii_whitespace())
                    .map(|b| b.to_ascii_uppercase()),
            );
        }
        // lines before the first header are skipped
    }

    if let Some(done) = current {
        records.push(done);
    }
    Ok(records)
}

/// All records of a FASTA file (plain or `.gz`).
pub fn read_fasta_records<P: AsRef<Path>>(path: P) -> Result<Vec<GenomeSequence>> {
    read_records(path.as_ref(), None)
}

/// The first record of a FASTA file; the rest of the file is not read.
pub fn read_first_fasta_record<P: AsRef<Path>>(path: P) -> Result<GenomeSequence> {
    let path = path.as_ref();
    let record = read_records(path, Some(1))?
        .into_iter()
        .next()
        .ok_or_else(|| OrfDistError::EmptyFasta(path.to_path_buf()))?;
    log::info!(
        "Loaded {} ({} bp) from {}",
        record.id,
        record.seq.len(),
        path.display()
    );
    Ok(record)
}

/// File names of the bundled dataset layout: the first half of `count` are
/// `bacterial1.fasta`, `bacterial2.fasta`, ..., the rest `mamalian1.fasta`, ...
pub fn dataset_paths<P: AsRef<Path>>(dir: P, count: usize) -> Vec<PathBuf> {
    let half = count / 2;
    (1..=count)
        .map(|num| {
            // odd counts put the extra genome in the second group
            let name = if 2 * num > count {
                format!("mamalian{}.fasta", num - half)
            } else {
                format!("bacterial{num}.fasta")
            };
            dir.as_ref().join(name)
        })
        .collect()
}
