use std::path::PathBuf;

use bcimaze_control::ControllerKind;
use bcimaze_level::GenConfig;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "BCI maze level tools")]
pub struct Cli {
    /// Seed for maze generation. Omit for a fresh random maze every run.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate random mazes and save them with their route painted in.
    Generate {
        #[command(flatten)]
        size: SizeArgs,
        /// Directory to write the mazes to.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Number of mazes to generate.
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// List the loadable levels of a directory.
    List {
        dir: PathBuf,
    },
    /// Paint the goal route into a maze file.
    Annotate {
        input: PathBuf,
        output: PathBuf,
    },
    /// Play a level headlessly and log the telemetry.
    Play {
        #[command(flatten)]
        size: SizeArgs,
        /// Load levels from this directory instead of generating one.
        #[arg(long)]
        level_dir: Option<PathBuf>,
        /// Level to play, by position in the directory listing.
        #[arg(long, default_value_t = 0)]
        level: usize,
        /// keyboard, auto-pilot, ai or erroneous-keyboard.
        #[arg(long, default_value = "ai")]
        controller: ControllerKind,
        /// Annotate the level before playing.
        #[arg(long)]
        annotate: bool,
        #[arg(long, default_value_t = 10_000)]
        max_ticks: u64,
    },
}

/// Maze size bounds, inclusive.
#[derive(Args, Debug, Clone, Copy)]
pub struct SizeArgs {
    #[arg(long, default_value_t = 9)]
    pub min_width: i32,
    #[arg(long, default_value_t = 21)]
    pub max_width: i32,
    #[arg(long, default_value_t = 9)]
    pub min_height: i32,
    #[arg(long, default_value_t = 21)]
    pub max_height: i32,
}

impl SizeArgs {
    pub fn gen_config(self) -> GenConfig {
        GenConfig::new(self.min_width, self.max_width, self.min_height, self.max_height)
    }
}
