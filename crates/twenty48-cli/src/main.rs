mod config;
mod input;
mod render;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::debug;

use twenty48_core::engine::Game;
use twenty48_core::rng::TileRng;

use config::Config;
use input::{Command, RawModeGuard};

#[derive(Parser, Debug)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "FILE", value_parser = clap::value_parser!(PathBuf))]
    config: Option<PathBuf>,

    /// Fixed RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_toml(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => Config::default(),
    };
    debug!("spawn low rate: {}%", config.spawn.low_rate);

    // One seeding at process start; restarts reuse the stream.
    let rng = match args.seed {
        Some(seed) => TileRng::seed_from_u64(seed),
        None => TileRng::from_entropy(),
    };
    let mut game = Game::with_spawn_low_rate(rng, config.spawn.low_rate);

    let _raw = RawModeGuard::enable().context("entering raw mode")?;
    let mut stdout = io::stdout();
    render::draw_frame(&mut stdout, &mut game)?;

    loop {
        let symbol = input::next_symbol()?;
        match input::command_for(symbol) {
            Some(Command::Slide(direction)) => {
                game.apply_move(direction);
            }
            Some(Command::Restart) => game.restart(),
            Some(Command::Quit) => break,
            None => {}
        }
        render::draw_frame(&mut stdout, &mut game)?;
    }

    Ok(())
}
