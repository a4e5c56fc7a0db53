use std::io::Write;
use std::path::PathBuf;

use flate2::write::GzEncoder;
use flate2::Compression;

use orfdist_rs::distance::INCOMPARABLE;
use orfdist_rs::fasta::dataset_paths;
use orfdist_rs::types::KmerConfig;
use orfdist_rs::{compute_distances_from_fasta, PipelineConfig};

fn work_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("orfdist-it-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// ATG, `repeats` copies of `codon`, TAA, laid into reading frame 0.
fn genome(codon: &[u8], repeats: usize) -> String {
    let mut body = b"ATG".to_vec();
    for _ in 0..repeats {
        body.extend_from_slice(codon);
    }
    body.extend_from_slice(b"TAA");
    body.iter()
        .flat_map(|&b| [b as char, 'C', 'C'])
        .collect()
}

fn wrap(seq: &str) -> String {
    seq.as_bytes()
        .chunks(60)
        .map(|line| format!("{}\n", String::from_utf8_lossy(line)))
        .collect()
}

#[test]
fn test_dataset_directory_run() {
    let dir = work_dir("dataset");
    let seqs = [
        genome(b"AAA", 40),
        genome(b"AAA", 60),
        genome(b"AAA", 40),
        "CCCCCCCCCCCC".to_string(),
    ];
    let paths = dataset_paths(&dir, seqs.len());
    for (i, (path, seq)) in paths.iter().zip(&seqs).enumerate() {
        let text = format!(">genome{} test record\n{}", i + 1, wrap(seq));
        std::fs::write(path, text).unwrap();
    }

    let results = compute_distances_from_fasta(&paths, &PipelineConfig::default()).unwrap();
    assert_eq!(results.genomes.len(), 4);

    for kmer in [KmerConfig::CODON, KmerConfig::DICODON] {
        let m = results.matrix(kmer).unwrap();
        assert_eq!(m.labels, vec!["genome1", "genome2", "genome3", "genome4"]);
        assert_eq!(m.get(0, 0), Some(0.0));
        assert_eq!(m.get(0, 2), Some(0.0));
        assert_eq!(m.get(3, 3), Some(INCOMPARABLE));
        assert_eq!(m.get(1, 3), Some(INCOMPARABLE));
        assert!(m.get(0, 1).unwrap() > 0.0);
    }

    let text = results.get_phylip_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "4");
    assert_eq!(lines[4], "genome4 -1.0 -1.0 -1.0 -1.0");
    assert_eq!(lines[5], "4");
    assert!(lines[6].starts_with("genome1 0.0 "));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_gzipped_input_matches_plain() {
    let dir = work_dir("gzip");
    let record = format!(">plain\n{}", wrap(&genome(b"GCA", 50)));

    let plain = dir.join("a.fasta");
    std::fs::write(&plain, &record).unwrap();

    let zipped = dir.join("b.fasta.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(record.as_bytes()).unwrap();
    std::fs::write(&zipped, encoder.finish().unwrap()).unwrap();

    let results =
        compute_distances_from_fasta(&[plain, zipped], &PipelineConfig::default()).unwrap();
    for m in &results.matrices {
        assert_eq!(m.rows, vec![vec![0.0, 0.0], vec![0.0, 0.0]]);
    }

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_file_fails() {
    let dir = work_dir("missing");
    let result = compute_distances_from_fasta(&[dir.join("nope.fasta")], &PipelineConfig::default());
    assert!(result.is_err());
    std::fs::remove_dir_all(&dir).unwrap();
}
