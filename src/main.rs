#![warn(clippy::all)]

use anyhow::Result;
use clap::Parser;
use conway_console::{Config, Shell, Simulator};
use log::{info, LevelFilter};

const DEFAULT_SIDE: u32 = Config::SIDE as u32;

/// Conway's Game of Life on a small bounded grid, one generation per Enter.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of columns.
    #[arg(
        long,
        value_name = "COLUMNS",
        default_value_t = DEFAULT_SIDE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    width: u32,

    /// Number of rows.
    #[arg(
        long,
        value_name = "ROWS",
        default_value_t = DEFAULT_SIDE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    height: u32,

    /// Seed of the initial field (random if omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Glyph of an alive cell.
    #[arg(long = "live", default_value_t = Config::LIVE_GLYPH)]
    live_glyph: char,

    /// Glyph of a dead cell.
    #[arg(long = "dead", default_value_t = Config::DEAD_GLYPH)]
    dead_glyph: char,

    /// Log to stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            width: args.width as usize,
            height: args.height as usize,
            seed: args.seed,
            live_glyph: args.live_glyph,
            dead_glyph: args.dead_glyph,
        }
    }
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    simple_logger::SimpleLogger::new()
        .with_level(level(args.verbose))
        .init()?;

    let config = Config::from(args);
    info!("starting with {config:?}");
    let simulator = Simulator::new(config.width, config.height, &mut config.rng());

    let (stdin, stdout) = (std::io::stdin(), std::io::stdout());
    let mut shell = Shell::new(simulator, &config, stdin.lock(), stdout.lock());
    let outcome = shell.run()?;
    info!("finished: {outcome:?} at generation {}", shell.generation());
    Ok(())
}
