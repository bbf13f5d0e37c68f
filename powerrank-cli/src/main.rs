mod config;
mod ingest;
mod output;

use clap::Parser;
use powerrank_core::constants::DEFAULT_ITERATIONS;
use powerrank_core::{rank_by, run_ratings, EngineConfig, RankMetric, TeamTable};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::{debug, info};

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "powerrank",
    version,
    about = "Rank competition teams from alliance match score records"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Compute average, power, and stacking rankings from a match-stats export
    Rank(RankArgs),
    /// Create a default config file at ~/.config/powerrank/config.toml
    Init,
}

#[derive(Parser)]
struct RankArgs {
    /// Match-stats export file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Relaxation passes for the power and stacking ratings
    #[arg(long)]
    iterations: Option<usize>,

    /// Output JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Path to config file (default: ~/.config/powerrank/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show progress during execution
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging to stderr; stdout is reserved for the rankings.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .unwrap_or_else(|e| bail(format!("Failed to initialize logging: {e}")));
}

/// Read the export text: from the input file, or stdin when piped.
fn load_input(args: &RankArgs) -> String {
    match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read {}: {e}", path.display()))),
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                bail("No input provided. Pass a match-stats file or pipe one via stdin.");
            }
            let mut text = String::new();
            stdin
                .lock()
                .read_to_string(&mut text)
                .unwrap_or_else(|e| bail(format!("Failed to read stdin: {e}")));
            text
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => {
            init_logging(args.verbose);
            run_rank(args);
        }
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default iteration count.");
        }
    }
}

fn run_rank(args: RankArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let iterations = args.iterations.or(cfg.iterations).unwrap_or(DEFAULT_ITERATIONS);
    let json = args.json || cfg.json.unwrap_or(false);

    let text = load_input(&args);
    let records = ingest::ingest(&text).unwrap_or_else(|e| bail(e));
    if records.is_empty() {
        bail("No played matches found in input.");
    }
    info!("ingested {} alliance records", records.len());

    let mut table = TeamTable::build(&records);
    table.compute_averages();
    debug!("team table built: {} teams", table.len());

    run_ratings(&records, &mut table, &EngineConfig { iterations });
    info!("completed {iterations} relaxation passes");

    let average = rank_by(&table, RankMetric::Average);
    let power = rank_by(&table, RankMetric::Power);
    let stacking = rank_by(&table, RankMetric::Stacking);

    if json {
        output::print_json(&average, &power, &stacking, records.len(), iterations);
    } else {
        output::print_tables(&average, &power, &stacking, records.len());
    }
}
