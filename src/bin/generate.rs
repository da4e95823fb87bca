use std::{
    fs::{self, File},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use colored::*;
use indicatif::ProgressBar;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use relgen::{
    ensure_parent_dir, fmt_open_err, path_str, relation, remove_if_present, sampler,
    schema::*,
    setscript, symbols,
};

#[derive(Parser)]
#[command(author, version, about = "Generate every fixture listed in a TOML file", long_about = None)]
struct Cli {
    #[arg(default_value = "fixtures.toml")]
    config: PathBuf,
    /// Overrides the seed in the config file
    #[arg(long)]
    seed: Option<u64>,
    /// Regenerate fixtures even when their info file matches
    #[arg(long, action)]
    force: bool,
    /// Remove configured fixtures and their info files
    #[arg(long, action)]
    clean: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = read_config(&cli.config).and_then(|config| {
        if cli.clean {
            clean(&config)
        }
        else {
            generate(&cli, &config)
        }
    });

    if let Err(err) = result {
        println!("{}", err.red().bold());
        process::exit(1);
    }
    println!("{}", "DONE".green().bold());
}

fn read_config(path: &Path) -> Result<FixtureConfig, String> {
    println!(
        "{}: {} (\"{}\")",
        "READING".green().bold(),
        "config file",
        path_str(path)
    );

    let config_string = fs::read_to_string(path)
        .map_err(|e| fmt_open_err(e, path))?;
    let config: FixtureConfig = toml::from_str(&config_string)
        .map_err(|e| format!("Invalid toml file {}: {}", path_str(path), e))?;

    for (name, info) in &config.relation {
        info.validate().map_err(|e| format!("relation.{}: {}", name, e))?;
    }
    for (name, info) in &config.sets {
        info.validate().map_err(|e| format!("sets.{}: {}", name, e))?;
    }
    Ok(config)
}

fn clean(config: &FixtureConfig) -> Result<(), String> {
    let outputs = config.relation.values().map(|r| &r.output)
        .chain(config.sets.values().map(|s| &s.output));
    for output in outputs {
        for path in [output.clone(), info_path(output)] {
            let removed = remove_if_present(&path)
                .map_err(|e| format!("failed to remove {}: {}", path_str(&path), e))?;
            if removed {
                println!("{} {}", "Removed".bold(), path_str(&path));
            }
        }
    }
    Ok(())
}

fn generate(cli: &Cli, config: &FixtureConfig) -> Result<(), String> {
    // Each fixture draws its own seed so one can be rebuilt alone.
    let mut rng = ChaChaRng::seed_from_u64(match cli.seed.or(config.seed) {
        Some(seed) => seed,
        None => rand::random(),
    });

    let fixtures = config.relation.iter()
        .map(|(name, info)| (name, Fixture::Relation(info.clone())))
        .chain(config.sets.iter()
            .map(|(name, info)| (name, Fixture::Sets(info.clone()))));

    for (name, fixture) in fixtures {
        let info = FixtureInfo { seed: rng.gen(), fixture };
        maybe_generate_fixture(cli, name, &info)?;
    }
    Ok(())
}

fn maybe_generate_fixture(cli: &Cli, name: &str, info: &FixtureInfo) -> Result<(), String> {
    let output = info.fixture.output();
    let info_path = info_path(output);

    // Check info file
    if let Ok(info_file) = File::open(&info_path) {
        let existing: FixtureInfo = serde_json::from_reader(info_file)
            .map_err(|e| format!(
                "invalid json file {}: {}",
                path_str(&info_path), e
            ))?;

        if existing.fixture == info.fixture && output.exists() && !cli.force {
            println!("{} {}", "Skipping".bold(), name);
            return Ok(());
        }
        else {
            println!("{} {}", "Rebuilding".green().bold(), name);
        }
    }
    else {
        println!("{} {}", "Building".green().bold(), name);
    }

    ensure_parent_dir(output)
        .map_err(|e| format!(
            "failed to create directory for {}:\n{}",
            path_str(output), e
        ))?;

    // A partial fixture must never look up to date.
    remove_if_present(&info_path)
        .map_err(|e| format!("failed to remove {}: {}", path_str(&info_path), e))?;
    generate_fixture(info)
        .map_err(|e| format!("{}: {}", name, e))?;

    // Write new info file
    let info_file = File::create(&info_path)
        .map_err(|e| format!(
            "failed to open file {}:\n{}",
            path_str(&info_path), e
        ))?;
    serde_json::to_writer_pretty(info_file, info)
        .map_err(|e| e.to_string())?;

    Ok(())
}

fn generate_fixture(info: &FixtureInfo) -> Result<(), relgen::GenError> {
    let rng = &mut ChaChaRng::seed_from_u64(info.seed);

    match &info.fixture {
        Fixture::Relation(relation_info) => {
            let base = symbols::build_base(relation_info.num, rng)?;
            let selection = sampler::sample_pairs(
                relation_info.num,
                relation_info.density,
                relation_info.strategy(),
                rng)?;

            let progress = ProgressBar::new(0);
            relation::write_relation(&relation_info.output, &base, &selection, &progress)?;
            progress.finish_and_clear();
        },
        Fixture::Sets(sets_info) => {
            setscript::generate_set_script(&sets_info.output, &sets_info.params(), rng)?;
        },
    }
    Ok(())
}
