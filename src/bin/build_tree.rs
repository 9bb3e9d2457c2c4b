//! Electric chair game tree builder binary.
//!
//! Usage:
//!   cargo run --release --bin build_tree -- [OPTIONS]
//!
//! Options:
//!   --config <FILE>        Configuration JSON file (optional)
//!   --chairs <N>           Number of chairs (default: 12)
//!   --life <N>             Starting lives (default: 2)
//!   --winning-score <N>    Score that ends the game (default: 10)
//!   --output <FILE>        Write tree statistics as JSON
//!   --samples <N>          Print N random play-throughs
//!   --seed <N>             Random seed for play-throughs

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

use chair_tree::games::electric_chair::{ChairGameConfig, ElectricChair};
use chair_tree::tree::{Game, GameTreeBuilder};

/// Expansions between two spinner refreshes.
const TICK_INTERVAL: usize = 10_000;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut config_file: Option<String> = None;
    let mut chairs: Option<u8> = None;
    let mut life: Option<u8> = None;
    let mut winning_score: Option<u32> = None;
    let mut output_file: Option<String> = None;
    let mut samples: usize = 0;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(args[i].clone());
                }
            }
            "--chairs" | "-n" => {
                i += 1;
                if i < args.len() {
                    chairs = args[i].parse().ok();
                }
            }
            "--life" | "-l" => {
                i += 1;
                if i < args.len() {
                    life = args[i].parse().ok();
                }
            }
            "--winning-score" | "-w" => {
                i += 1;
                if i < args.len() {
                    winning_score = args[i].parse().ok();
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output_file = Some(args[i].clone());
                }
            }
            "--samples" => {
                i += 1;
                if i < args.len() {
                    samples = args[i].parse().unwrap_or(0);
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                return;
            }
        }
        i += 1;
    }

    let mut config = match &config_file {
        Some(path) => match ChairGameConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                return;
            }
        },
        None => ChairGameConfig::default(),
    };
    if let Some(n) = chairs {
        config = config.with_chairs(n);
    }
    if let Some(n) = life {
        config = config.with_max_life(n);
    }
    if let Some(n) = winning_score {
        config = config.with_winning_score(n);
    }

    let game = match ElectricChair::new(config.clone()) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };

    println!("=================================================");
    println!("  Electric Chair Game Tree");
    println!("=================================================");
    println!("Chairs: {}", config.chairs());
    println!("Lives: {}", config.max_life);
    println!("Winning score: {}", config.winning_score);
    println!("Node bound: {}", config.node_bound());
    println!();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {elapsed_precise} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start_time = Instant::now();
    let observer = spinner.clone();
    let tree = GameTreeBuilder::new(game)
        .on_progress(move |count| {
            if count % TICK_INTERVAL == 0 {
                observer.set_message(format!("expansions: {}", count));
            }
        })
        .build();
    spinner.finish_and_clear();

    let stats = tree.stats();
    println!("Built in {:.2}s", start_time.elapsed().as_secs_f64());
    println!("Nodes: {}", stats.nodes);
    println!("  Decision: {}", stats.decision_nodes);
    println!("  Terminal: {}", stats.terminal_nodes);
    println!("Edges: {} ({} shared, {:.1}%)", stats.edges, stats.shared_edges, stats.sharing_ratio() * 100.0);
    for player in 0..2 {
        println!(
            "Player {} info sets: {} ({} entries)",
            player, stats.info_sets[player], stats.info_set_entries[player]
        );
    }

    if samples > 0 {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        println!();
        println!("=== Sample Play-throughs ===");
        for n in 1..=samples {
            let path = tree.sample_path(&mut rng);
            let Some(&leaf) = path.last() else { continue };
            let leaf = tree.node(leaf);
            println!();
            println!("#{} ({} steps, utility {:+})", n, path.len() - 1, leaf.utility());
            for pair in path.windows(2) {
                let parent = tree.node(pair[0]);
                let action = parent
                    .children()
                    .iter()
                    .find(|&&(_, child)| child == pair[1])
                    .map(|&(action, _)| tree.game().action_name(&action))
                    .unwrap_or_default();
                println!("  P{} {:<9} -> {}", parent.player(), action, tree.game().state_description(tree.node(pair[1]).state()));
            }
        }
    }

    if let Some(path) = output_file {
        let written = serde_json::to_string_pretty(&stats)
            .map_err(|e| e.to_string())
            .and_then(|json| fs::write(&path, json).map_err(|e| e.to_string()));
        match written {
            Ok(()) => println!("Statistics saved to {}", path),
            Err(e) => eprintln!("Error saving statistics: {}", e),
        }
    }
}

fn print_help() {
    println!("Electric Chair Game Tree Builder");
    println!();
    println!("Usage: build_tree [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --config <FILE>        Configuration JSON file");
    println!("  -n, --chairs <N>           Number of chairs (default: 12)");
    println!("  -l, --life <N>             Starting lives (default: 2)");
    println!("  -w, --winning-score <N>    Score that ends the game (default: 10)");
    println!("  -o, --output <FILE>        Write tree statistics as JSON");
    println!("      --samples <N>          Print N random play-throughs");
    println!("  -s, --seed <N>             Random seed for play-throughs");
    println!("  -h, --help                 Show this help");
    println!();
    println!("Examples:");
    println!("  build_tree --chairs 3 --life 1 --winning-score 3 --samples 2");
    println!("  build_tree --config configs/classic.json --output stats.json");
}
