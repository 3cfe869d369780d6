//! Draw a secret gift exchange from the command line.
//!
//! Usage: `secret-santa [NAME[=EXCLUDED,...]]... [--file FILE] [--seed N]`

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use secret_santa::generator::{format_pairings, PairingGenerator, SeededGenerator};
use secret_santa::restrictions::{GiftRestrictions, Limits, MAX_EXCLUSIONS, MAX_PARTICIPANTS};

#[derive(Parser, Debug)]
#[command(name = "secret-santa")]
#[command(about = "Assign secret gift givers in one cycle, honouring exclusions")]
struct Args {
    /// Participants as `Name` or `Name=Excluded,Other`
    entries: Vec<String>,

    /// JSON file mapping each participant to the people they must not give to
    #[arg(long)]
    file: Option<PathBuf>,

    /// Seed for a reproducible draw (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of participants
    #[arg(long, default_value_t = MAX_PARTICIPANTS)]
    max_participants: usize,

    /// Maximum number of exclusions per participant
    #[arg(long, default_value_t = MAX_EXCLUSIONS)]
    max_exclusions: usize,
}

fn load_restrictions(args: &Args) -> anyhow::Result<GiftRestrictions> {
    let mut restrictions = GiftRestrictions::new();

    if let Some(path) = &args.file {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let from_file = GiftRestrictions::from_json(&json)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        restrictions.extend(from_file);
    }

    for entry in &args.entries {
        let (name, exclusions) = GiftRestrictions::parse_entry(entry)?;
        restrictions.insert(name, exclusions)?;
    }

    Ok(restrictions)
}

fn run(args: &Args) -> anyhow::Result<String> {
    let restrictions = load_restrictions(args)?;
    let limits = Limits {
        max_participants: args.max_participants,
        max_exclusions: args.max_exclusions,
    };

    let mut generator = match args.seed {
        Some(seed) => SeededGenerator::from_seed(seed),
        None => SeededGenerator::from_time(),
    }
    .with_limits(limits);

    info!("Drawing pairings for {} participants", restrictions.len());
    let pairs = generator.generate(&restrictions)?;
    Ok(format_pairings(&pairs))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("secret_santa=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(text) => print!("{}", text),
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    }
}
