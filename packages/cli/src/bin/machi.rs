//! Interactive city explorer with simulated weather and per-city chat rooms.
//!
//! Browse the built-in city catalog, open a weather panel or join a city's
//! chat room where simulated locals talk now and then.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin machi
//! cargo run --bin machi -- --tick-secs 3 --chatter-probability 0.8
//! cargo run --bin machi -- --seed 42
//! ```

use std::time::Duration;

use clap::Parser;

use machi_cli::{RunOptions, run_explorer};
use machi_explorer::usecase::{ActivityConfig, DEFAULT_CHATTER_PROBABILITY, DEFAULT_TICK_PERIOD};
use machi_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "machi")]
#[command(about = "City explorer with simulated weather and chat rooms", long_about = None)]
struct Args {
    /// Seconds between simulated chat activity checks
    #[arg(short = 't', long, default_value_t = DEFAULT_TICK_PERIOD.as_secs())]
    tick_secs: u64,

    /// Chance (0.0 to 1.0) that a simulated user speaks on each check
    #[arg(short = 'p', long, default_value_t = DEFAULT_CHATTER_PROBABILITY)]
    chatter_probability: f64,

    /// Seed for reproducible weather and chat activity
    #[arg(short = 's', long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never interleave with the prompt
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    let args = Args::parse();

    let activity = match ActivityConfig::new(
        Duration::from_secs(args.tick_secs),
        args.chatter_probability,
    ) {
        Ok(activity) => activity,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let options = RunOptions {
        activity,
        seed: args.seed,
    };
    if let Err(e) = run_explorer(options).await {
        tracing::error!("Explorer error: {}", e);
        std::process::exit(1);
    }
}
