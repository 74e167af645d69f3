//! Headless runner (default binary).
//!
//! Drives the engine for a fixed number of ticks from a scripted input loop
//! and prints the final well. Logging goes through `env_logger`; set
//! `RUST_LOG=debug` to watch spawns, locks and clears.
//!
//! ```text
//! blocky [--seed N] [--ticks N] [--moves left,none,cw,right,ccw] [--json]
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use blocky::{Engine, Phase};

#[derive(Debug, Parser)]
#[command(name = "blocky", version, about = "Run the falling-block engine headless")]
struct Options {
    /// Seed for the piece bag
    #[arg(long, default_value_t = 1)]
    seed: u32,
    /// Maximum number of ticks to run
    #[arg(long, default_value_t = 2000)]
    ticks: u32,
    /// Input script applied one entry per tick, cycling: none, left, right, cw, ccw
    #[arg(long, value_delimiter = ',', default_value = "none")]
    moves: Vec<String>,
    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let opts = Options::parse();
    let mut engine = Engine::with_seed(opts.seed);

    let mut ticks_run = 0;
    for (tick, token) in opts.moves.iter().cycle().take(opts.ticks as usize).enumerate() {
        match token.trim().to_lowercase().as_str() {
            "cw" => {
                engine.rotate_piece(true);
            }
            "ccw" => {
                engine.rotate_piece(false);
            }
            name => engine
                .set_direction_by_name(name)
                .with_context(|| format!("tick {tick}"))?,
        }

        ticks_run += 1;
        if engine.step()? == Phase::GameOver {
            break;
        }
    }

    info!(
        "stopped after {} ticks, {} pieces, phase {:?}",
        ticks_run,
        engine.pieces_spawned(),
        engine.phase()
    );

    let snapshot = engine.snapshot();
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", snapshot.render_text());
        println!("phase: {:?}", engine.phase());
    }
    Ok(())
}
