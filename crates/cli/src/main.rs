mod settings;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use facecluster_core::clustering::domain::similarity_graph::validate_threshold;
use facecluster_core::clustering::infrastructure::clusterer_factory::{
    create_clusterer, ClusterMethod,
};
use facecluster_core::clustering::infrastructure::open_embedding_reader;
use facecluster_core::grid::infrastructure::text_grid_reader::TextGridReader;
use facecluster_core::pipeline::cluster_embeddings_use_case::ClusterEmbeddingsUseCase;
use facecluster_core::pipeline::pipeline_logger::LogPipelineLogger;
use facecluster_core::pipeline::scan_grid_use_case::ScanGridUseCase;

use crate::settings::Settings;

/// Cluster face embeddings by identity and scan grids for filled regions.
#[derive(Parser)]
#[command(name = "facecluster")]
struct Cli {
    /// Settings file (defaults to the platform config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Group embeddings that are closer than a distance threshold.
    Cluster {
        /// Embeddings file: `.json` array of vectors, or one vector per line.
        input: PathBuf,

        /// Euclidean distance below which two embeddings are linked.
        #[arg(long)]
        threshold: Option<f64>,

        /// Partitioning: components, union-find or chinese-whispers.
        #[arg(long)]
        method: Option<String>,

        /// Round budget for chinese-whispers.
        #[arg(long)]
        iterations: Option<usize>,

        /// Shuffle seed for chinese-whispers.
        #[arg(long)]
        seed: Option<u64>,

        /// Write a JSON report to this file.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the size of each 4-connected non-zero region of a grid.
    Regions {
        /// Grid file, one row of integers per line.
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load(),
    };

    match cli.command {
        Command::Cluster {
            input,
            threshold,
            method,
            iterations,
            seed,
            output,
        } => {
            let method = method.as_deref().map(str::parse::<ClusterMethod>).transpose()?;
            let settings = settings.with_overrides(threshold, method, iterations, seed);
            validate_input(&input)?;
            validate_settings(&settings)?;
            run_cluster(&input, &settings, output.as_deref())
        }
        Command::Regions { input } => {
            validate_input(&input)?;
            run_regions(&input)
        }
    }
}

fn run_cluster(
    input: &Path,
    settings: &Settings,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let clusterer = create_clusterer(settings.method, settings.max_iterations, settings.seed)?;
    let mut use_case = ClusterEmbeddingsUseCase::new(
        open_embedding_reader(input),
        clusterer,
        Box::new(LogPipelineLogger::new()),
    );
    let report = use_case.execute(input, settings.distance_threshold)?;

    for (idx, (label, color)) in report.labels.iter().zip(&report.colors).enumerate() {
        println!("{idx}\t{label}\t{color}");
    }

    if let Some(path) = output {
        fs::write(path, report.to_json()?)
            .map_err(|e| format!("Cannot write report {}: {e}", path.display()))?;
        log::info!("Report written to {}", path.display());
    }
    Ok(())
}

fn run_regions(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut use_case =
        ScanGridUseCase::new(Box::new(TextGridReader::new()), Box::new(LogPipelineLogger::new()));
    for region in use_case.execute(input)? {
        println!("{}", region.size());
    }
    Ok(())
}

fn validate_input(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("Input file not found: {}", input.display()).into());
    }
    Ok(())
}

fn validate_settings(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    validate_threshold(settings.distance_threshold)?;
    if settings.method == ClusterMethod::ChineseWhispers && settings.max_iterations == 0 {
        return Err("Iterations must be at least 1 for chinese-whispers".into());
    }
    Ok(())
}
