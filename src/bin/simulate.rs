//! Banner pull simulator CLI.
//!
//! Run Monte Carlo simulations to audit banner odds and pity.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 1000 players on the standard banner
//!   cargo run --bin simulate -- -b storm_knight      # Rate-up banner
//!   cargo run --bin simulate -- --seed 42            # Reproducible run

use anyhow::Context;
use gacha::simulator::{run_simulation, SimConfig};
use gacha::{GachaConfig, GachaEngine};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let (config, config_path) = parse_args(&args);

    let default_level = match config.verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let gacha_config = match &config_path {
        Some(path) => GachaConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GachaConfig::builtin(),
    };
    let engine = GachaEngine::new(gacha_config)?;

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              GACHA PULL SIMULATOR                             ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Banner:         {}", config.banner_id);
    println!("  Players:        {}", config.num_players);
    println!("  Pulls/player:   {}", config.pulls_per_player);
    println!(
        "  Batch:          {}",
        if config.ten_pulls { "ten-pull" } else { "single" }
    );
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&engine, &config)
        .with_context(|| format!("simulating banner {}", config.banner_id))?;

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).context("writing JSON report")?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> (SimConfig, Option<PathBuf>) {
    let mut config = SimConfig::default();
    let mut config_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--players" => {
                if i + 1 < args.len() {
                    config.num_players = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-p" | "--pulls" => {
                if i + 1 < args.len() {
                    config.pulls_per_player = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-b" | "--banner" => {
                if i + 1 < args.len() {
                    config.banner_id = args[i + 1].clone();
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--time" => {
                if i + 1 < args.len() {
                    config.now = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--singles" => {
                config.ten_pulls = false;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick(&config.banner_id);
            }
            "--audit" => {
                config = SimConfig::pity_audit(&config.banner_id);
            }
            _ => {}
        }
        i += 1;
    }

    (config, config_path)
}

fn print_help() {
    println!("Gacha Pull Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --players <N>   Number of simulated players (default: 1000)");
    println!("    -p, --pulls <P>     Pulls per player (default: 200)");
    println!("    -b, --banner <ID>   Banner to pull on (default: standard)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --time <UNIX>   Pull at this time (default: banner start)");
    println!("    --config <PATH>     Load catalog and banners from a JSON file");
    println!("    --singles           Single pulls instead of ten-pulls");
    println!("    -v, --verbose       Per-player output");
    println!("    -q, --quiet         Warnings only");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick check (100 players, 100 pulls)");
    println!("    --audit             Pity audit (200 players, 1000 single pulls)");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                       # Default run");
    println!("    cargo run --bin simulate -- -b storm_knight    # Rate-up banner");
    println!("    cargo run --bin simulate -- --seed 42          # Reproducible");
    println!("    cargo run --bin simulate -- -b moon_oracle --audit");
}
