//! Configuration system for seedmap.
//!
//! Provides settings that persist to disk as RON files, with CLI overrides via
//! clap and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, Command, LineEndingArg, ProfileCommand};
pub use config::{Config, DebugConfig, ProfilesConfig};
pub use error::ConfigError;
