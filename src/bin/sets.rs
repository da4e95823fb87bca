use std::{path::PathBuf, process};

use clap::Parser;
use colored::*;
use rand::SeedableRng;
use relgen::{
    ensure_parent_dir, path_str,
    setscript::{self, SetScriptParams},
    GenError,
};

#[derive(Parser)]
#[command(author, version, about = "Generate a random set-algebra command script", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "files/sets_big.txt")]
    output: PathBuf,
    /// Number of sets, named A, B, ...
    #[arg(long, default_value_t = 3)]
    sets: usize,
    /// Elements added to each set
    #[arg(long, default_value_t = 5)]
    elements: usize,
    /// Letters available as elements, starting at 'a'
    #[arg(long, default_value_t = 10)]
    universe: usize,
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
}

fn generate(cli: &Cli) -> Result<(), GenError> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    let rng = &mut rand_chacha::ChaChaRng::seed_from_u64(seed);

    let params = SetScriptParams {
        n_sets: cli.sets,
        elements_per_set: cli.elements,
        universe_size: cli.universe,
    };
    params.validate()?;
    ensure_parent_dir(&cli.output)?;
    let count = setscript::generate_set_script(&cli.output, &params, rng)?;

    println!(
        "{} {} with {} sets and {} commands",
        "Generated".green().bold(), path_str(&cli.output), params.n_sets, count
    );
    Ok(())
}
