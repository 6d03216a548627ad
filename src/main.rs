//! Main entry point for the mosaic terminal front end.
//!
//! Builds the grid, prints it, then reads commands from stdin until `quit`
//! or end of input. Tile records are written to the log (`RUST_LOG`).

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

use mosaic::app::{Command, HELP, Mosaic};
use mosaic::config::grid::{DEFAULT_COLS, DEFAULT_ROWS};
use mosaic::config::render::{SURFACE_HEIGHT, SURFACE_WIDTH};
use mosaic::diagnostics::LogSink;
use mosaic::grid::GridController;
use mosaic::render::{SurfaceSize, print_grid};

#[derive(Parser)]
#[command(name = "mosaic")]
#[command(about = "Grid of randomly colored and lettered tiles", long_about = None)]
struct Cli {
    /// Number of rows at startup
    #[arg(short, long, default_value_t = DEFAULT_ROWS as i64, allow_negative_numbers = true)]
    rows: i64,

    /// Number of columns at startup
    #[arg(short, long, default_value_t = DEFAULT_COLS as i64, allow_negative_numbers = true)]
    cols: i64,

    /// Seed for reproducible tiles
    #[arg(short, long)]
    seed: Option<u64>,

    /// Surface width used for tile geometry
    #[arg(long, default_value_t = SURFACE_WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,

    /// Surface height used for tile geometry
    #[arg(long, default_value_t = SURFACE_HEIGHT, value_parser = clap::value_parser!(i32).range(1..))]
    height: i32,
}

/// Prompt and read one line. Returns `None` at end of input.
fn read_command_line(input: &mut impl BufRead) -> Result<Option<String>> {
    print!("> ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn main() -> Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let grid = match cli.seed {
        Some(seed) => GridController::seeded(cli.rows, cli.cols, seed),
        None => GridController::new(cli.rows, cli.cols),
    }
    .context("invalid startup grid size")?;

    let mut mosaic = Mosaic::with_grid(grid, SurfaceSize::new(cli.width, cli.height), LogSink);
    print_grid(mosaic.grid(), &mut io::stdout().lock())?;
    println!("{HELP}");

    let mut input = io::stdin().lock();
    while let Some(line) = read_command_line(&mut input)? {
        let Some(command) = Command::parse(&line) else {
            if !line.trim().is_empty() {
                warn!("[Main] Unknown command: {}", line.trim());
                println!("Unknown command, type `help` for the list.");
            }
            continue;
        };

        if command == Command::Help {
            println!("{HELP}");
            continue;
        }

        match mosaic.dispatch(&command) {
            Ok(true) => print_grid(mosaic.grid(), &mut io::stdout().lock())?,
            Ok(false) => break,
            Err(e) => println!("{}", e.report()),
        }
    }
    Ok(())
}
