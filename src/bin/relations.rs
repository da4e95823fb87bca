use std::{path::PathBuf, process};

use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use relgen::{
    ensure_parent_dir, path_str, relation,
    sampler::{self, SamplingStrategy},
    symbols, GenError,
};

#[derive(Parser)]
#[command(author, version, about = "Generate a random binary relation fixture", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "files/relations_big.txt")]
    output: PathBuf,
    /// Number of symbols in the base set
    #[arg(short, long, default_value_t = 1000)]
    num: usize,
    /// Fraction of all ordered pairs to include, in [0, 1]
    #[arg(short, long, default_value_t = 0.02)]
    density: f64,
    /// Always use the sparse sampler (automatic above 10000 symbols)
    #[arg(short, long, action)]
    fast: bool,
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = generate(&cli) {
        let msg = format!("error: {}", e);
        println!("{}", msg.red().bold());
        process::exit(1);
    }
    println!("{}", "DONE".green().bold());
}

fn generate(cli: &Cli) -> Result<(), GenError> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    let rng = &mut rand_chacha::ChaChaRng::seed_from_u64(seed);

    println!(
        "{}: relation n={} density={} seed={}",
        "GENERATING".green().bold(), cli.num, cli.density, seed
    );

    let strategy = SamplingStrategy::auto(cli.num, cli.fast);
    let base = symbols::build_base(cli.num, rng)?;
    let selection = sampler::sample_pairs(cli.num, cli.density, strategy, rng)?;

    println!("{}: {}", "WRITING".green().bold(), path_str(&cli.output));
    ensure_parent_dir(&cli.output)?;
    let progress = progress_bar();
    relation::write_relation(&cli.output, &base, &selection, &progress)?;
    progress.finish_and_clear();

    Ok(())
}

fn progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} pairs ({eta})") {
        bar.set_style(style);
    }
    bar
}
