//! Command-line argument parsing for seedmap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use seedmap_biome::LineEnding;

use crate::Config;

/// seedmap command-line arguments.
///
/// Global options override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "seedmap", about = "World seeds and biome color profiles")]
pub struct CliArgs {
    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory biome profiles are written to.
    #[arg(long, global = true)]
    pub profiles_dir: Option<PathBuf>,

    /// Line ending for saved profiles.
    #[arg(long, global = true, value_enum)]
    pub line_ending: Option<LineEndingArg>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Derive a world seed and print its label.
    ///
    /// Without INPUT (or with an empty one) a random seed is drawn.
    Seed {
        /// Seed text or number.
        #[arg(allow_hyphen_values = true)]
        input: Option<String>,

        /// Use a raw seed read from a saved world.
        #[arg(long, conflicts_with = "input", allow_negative_numbers = true)]
        save_game: Option<i64>,
    },

    /// Biome color profile operations.
    #[command(subcommand)]
    Profile(ProfileCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ProfileCommand {
    /// Write the default profile to disk.
    Export {
        /// Output file (defaults to `<profiles dir>/default.json`).
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Print the resolved color of every biome in the default profile.
    Colors,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEndingArg {
    Crlf,
    Lf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Crlf => LineEnding::Crlf,
            LineEndingArg::Lf => LineEnding::Lf,
        }
    }
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(ref dir) = args.profiles_dir {
            self.profiles.directory = dir.clone();
        }
        if let Some(line_ending) = args.line_ending {
            self.profiles.line_ending = line_ending.into();
        }
    }
}
