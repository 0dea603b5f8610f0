//! Shared plumbing for CLI commands: errors, exit codes, session setup.

use std::fmt;
use std::path::PathBuf;

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::Config;
use crate::services::{ColorThemer, FileStore, ThemerError};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: unknown id, invalid color, malformed import
    ValidationError = 1,
    /// File system or clipboard failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub kind: ExitCode,
    /// Message printed after `Error: `
    pub message: String,
}

impl CliError {
    /// Input was rejected.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Reading or writing failed.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ThemerError> for CliError {
    fn from(err: ThemerError) -> Self {
        match err {
            ThemerError::Generation(e) => Self::io(format!("Failed to generate palette: {e:#}")),
            other => Self::validation(other.to_string()),
        }
    }
}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Options accepted by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Palette data file (overrides the configured location)
    #[arg(long, global = true, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Seed for random base colors (for reproducible output)
    #[arg(long, global = true, value_name = "N", hide = true)]
    pub seed: Option<u64>,
}

/// Loaded configuration plus the palette session it describes.
pub struct Session {
    /// Effective configuration
    pub config: Config,
    /// Palette state backed by the data file
    pub themer: ColorThemer,
}

impl GlobalArgs {
    /// Loads the configuration and opens the palette data file.
    pub fn open(&self) -> CliResult<Session> {
        let config = load_config()?;
        let path = match &self.data_file {
            Some(path) => path.clone(),
            None => config
                .data_file_path()
                .map_err(|e| CliError::io(format!("Failed to resolve data file: {e}")))?,
        };

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let themer = ColorThemer::with_options(
            FileStore::new(path),
            rng,
            config.generation.curve_mode,
            config.generation.color_count,
        );

        Ok(Session { config, themer })
    }
}

/// Loads the configuration file, mapping failures to validation errors.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON output: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Writes `content` to `path`, creating parent directories.
pub fn write_output(path: &std::path::Path, content: &str) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| CliError::io(format!("Failed to create directory {}: {e}", parent.display())))?;
    }
    std::fs::write(path, content)
        .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))
}
