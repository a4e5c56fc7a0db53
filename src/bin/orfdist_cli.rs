use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use orfdist_rs::fasta::dataset_paths;
use orfdist_rs::scan::{ScanConfig, DEFAULT_MIN_FRAGMENT_LEN};
use orfdist_rs::{compute_distances_from_fasta, PipelineConfig};

#[derive(Debug, Parser)]
#[command(
    name = "orfdist-rs",
    about = "Codon and dicodon frequency distance matrices between genomes",
    version = env!("CARGO_PKG_VERSION")
)]
struct Args {
    #[arg(
        value_name = "FASTA",
        required_unless_present = "dataset_dir",
        help = "FASTA files, one genome each (first record is used; .gz accepted)"
    )]
    fasta: Vec<PathBuf>,

    #[arg(
        short = 'd',
        long = "dataset-dir",
        conflicts_with = "fasta",
        help = "Directory holding bacterialN.fasta / mamalianN.fasta"
    )]
    dataset_dir: Option<PathBuf>,

    #[arg(
        short = 'g',
        long = "genomes",
        default_value_t = 8,
        help = "Number of genomes to take from --dataset-dir"
    )]
    genomes: usize,

    #[arg(
        short = 'm',
        long = "min-length",
        default_value_t = DEFAULT_MIN_FRAGMENT_LEN,
        help = "Fragments shorter than this are dropped"
    )]
    min_length: usize,

    #[arg(
        short = 'o',
        long = "output",
        help = "Write the matrices here instead of stdout"
    )]
    output: Option<PathBuf>,

    #[arg(
        short = 't',
        long = "threads",
        default_value_t = 0,
        help = "Number of threads (0 = one per core)"
    )]
    threads: usize,

    #[arg(
        short = 'L',
        long = "level",
        value_name = "LEVEL",
        default_value_t = log::Level::Warn,
        help = "Logging level"
    )]
    level: log::Level,
}

fn spinner(color: &str, msg: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{color}}} {{msg}}"))
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(msg);
    spinner
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()?;
    }

    let paths = match &args.dataset_dir {
        Some(dir) => dataset_paths(dir, args.genomes),
        None => args.fasta.clone(),
    };

    let config = PipelineConfig {
        scan: ScanConfig {
            min_fragment_len: args.min_length,
            ..ScanConfig::default()
        },
        ..PipelineConfig::default()
    };

    let progress = spinner("green", "Scanning genomes and building matrices...");
    let results = compute_distances_from_fasta(&paths, &config)?;
    progress.finish_with_message(format!("Compared {} genome(s).", results.genomes.len()));

    let text = results.get_phylip_text();
    match &args.output {
        Some(path) => {
            fs::write(path, text)?;
            log::info!("Matrices written to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let start = std::time::Instant::now();
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.level.to_level_filter())
        .init();

    if let Err(e) = run(args) {
        log::error!("{e}");
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    log::info!("Elapsed time: {:.3?}", start.elapsed());
    ExitCode::SUCCESS
}
