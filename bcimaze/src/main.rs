//! `bcimaze`: command-line front end for the maze libraries.

mod cli;
mod commands;

use anyhow::Result;
use bcimaze_level::MazeGen;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::PlayOptions;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut mapgen = MazeGen::new(commands::rng(cli.seed));

    match cli.command {
        Command::Generate {
            size,
            out_dir,
            count,
        } => {
            commands::generate(&mut mapgen, &size.gen_config(), &out_dir, count)?;
        }
        Command::List { dir } => commands::list(&dir)?,
        Command::Annotate { input, output } => commands::annotate(&input, &output)?,
        Command::Play {
            size,
            level_dir,
            level,
            controller,
            annotate,
            max_ticks,
        } => {
            let opts = PlayOptions {
                level_dir: level_dir.as_deref(),
                level,
                controller,
                annotate,
                max_ticks,
            };
            commands::play(&mut mapgen, &size.gen_config(), &opts)?;
        }
    }
    Ok(())
}

/// Log to stderr, `info` unless `RUST_LOG` says otherwise. Records from the
/// libraries' `log` calls are forwarded too.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
