#![deny(unsafe_code)]
//! CLI binary for cellgrid.
//!
//! Subcommands:
//! - `run <rule>`: run a simulation N steps, write a PNG
//! - `list`: print available rules, Life patterns and Gray-Scott presets
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG=debug` to see
//! them.

mod error;

use cellgrid_core::{Seed, Simulation};
use cellgrid_engines::SimulationKind;
use clap::{Args, Parser, Subcommand};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "cellgrid", about = "Cellular automaton and reaction-diffusion CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a simulation for N steps and write a PNG snapshot.
    Run(RunArgs),
    /// List available rules, patterns and presets.
    List,
}

#[derive(Args)]
struct RunArgs {
    /// Rule name (e.g. "life", "gray-scott"). Required unless --seed-file is given.
    #[arg(required_unless_present = "seed_file")]
    rule: Option<String>,

    /// Grid width in cells.
    #[arg(short = 'C', long, default_value_t = 200)]
    cols: usize,

    /// Grid height in cells.
    #[arg(short = 'R', long, default_value_t = 150)]
    rows: usize,

    /// Number of generations to run.
    #[arg(short, long, default_value_t = 200)]
    steps: usize,

    /// PRNG seed for deterministic output.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Rule parameters as a JSON object.
    #[arg(long, default_value = "{}")]
    params: String,

    /// Load rule, dimensions, params, seed and steps from a JSON seed file.
    #[arg(long, conflicts_with_all = ["rule", "params"])]
    seed_file: Option<PathBuf>,

    /// Write the effective seed as JSON to this path.
    #[arg(long)]
    save_seed: Option<PathBuf>,

    /// Pixels per cell in the output image.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=64))]
    scale: u16,

    /// Output file path.
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,
}

/// Builds the seed for a run from a seed file or from flags.
fn resolve_seed(args: &RunArgs) -> Result<Seed, CliError> {
    if let Some(path) = &args.seed_file {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::ReadSeed {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        return Seed::from_json_str(&text).map_err(|source| CliError::BadSeedFile {
            path: path.clone(),
            source,
        });
    }
    // clap requires a rule when there is no seed file; an empty name fails
    // the registry lookup.
    let rule = args.rule.as_deref().unwrap_or_default();
    let params: serde_json::Value =
        serde_json::from_str(&args.params).map_err(|e| CliError::BadParams(e.to_string()))?;
    if !params.is_object() {
        return Err(CliError::BadParams("expected a JSON object".into()));
    }
    let mut seed = Seed::new(rule, args.cols, args.rows, args.seed);
    seed.params = params;
    seed.steps = args.steps;
    Ok(seed)
}

fn save_seed(seed: &Seed, path: &Path) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(seed)?;
    std::fs::write(path, text).map_err(|e| CliError::write(path, e))
}

fn warn_on_degenerate_params(sim: &SimulationKind) {
    if let SimulationKind::GrayScott(s) = sim {
        if let Err(e) = s.rule().validate() {
            warn!("{e}; output will likely be blank or saturated");
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let rules = SimulationKind::list_rules();
            let patterns = cellgrid_life::patterns::PATTERN_NAMES;
            let presets: Vec<&str> = cellgrid_gray_scott::presets::names().collect();
            if cli.json {
                let info = serde_json::json!({
                    "rules": rules,
                    "life_patterns": patterns,
                    "gray_scott_presets": presets,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Rules:");
                for name in rules {
                    println!("  {name}");
                }
                println!("Life patterns:");
                println!("  {}", patterns.join(", "));
                println!("Gray-Scott presets:");
                println!("  {}", presets.join(", "));
            }
        }
        Command::Run(args) => {
            let seed = resolve_seed(&args)?;
            if let Some(path) = &args.save_seed {
                save_seed(&seed, path)?;
            }

            let mut sim = SimulationKind::from_seed(&seed)?;
            warn_on_degenerate_params(&sim);

            info!(rule = %seed.rule, steps = seed.steps, "running");
            for _ in 0..seed.steps {
                sim.step();
            }

            let scale = usize::from(args.scale);
            let rgba = sim.to_rgba(scale);
            cellgrid_engines::snapshot::write_png(
                rgba,
                seed.cols * scale,
                seed.rows * scale,
                &args.output,
            )
            .map_err(|e| CliError::writing(&args.output, e))?;

            if cli.json {
                let info = serde_json::json!({
                    "rule": seed.rule,
                    "cols": seed.cols,
                    "rows": seed.rows,
                    "steps": seed.steps,
                    "seed": seed.seed,
                    "generation": sim.generation(),
                    "params": sim.params(),
                    "output": args.output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "ran {} ({}x{}, {} steps, seed {}) -> {}",
                    seed.rule,
                    seed.cols,
                    seed.rows,
                    seed.steps,
                    seed.seed,
                    args.output.display()
                );
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
