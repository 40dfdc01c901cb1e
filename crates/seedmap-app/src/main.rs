//! The `seedmap` binary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use seedmap_app::commands::{self, CommandError};
use seedmap_biome::{BiomeProfile, BiomeRegistry};
use seedmap_config::{CliArgs, Command, Config, ProfileCommand};

const APP_NAME: &str = "seedmap";

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    seedmap_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&args.command, &config, &config_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command, config: &Config, config_dir: &Path) -> Result<(), CommandError> {
    let mut stdout = std::io::stdout().lock();
    match command {
        Command::Seed { input, save_game } => {
            commands::seed(input.as_deref(), *save_game, &mut stdout)?;
        }
        Command::Profile(ProfileCommand::Export { path }) => {
            let written = commands::export_default_profile(
                path.as_deref(),
                &config.profiles_dir(config_dir),
                config.profiles.line_ending,
            )?;
            writeln!(stdout, "{}", written.display())?;
        }
        Command::Profile(ProfileCommand::Colors) => {
            commands::print_colors(
                BiomeProfile::default_profile(),
                BiomeRegistry::builtin(),
                &mut stdout,
            )?;
        }
    }
    Ok(())
}
