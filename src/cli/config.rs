//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::color::CurveMode;
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Palette data file location
    #[arg(long, value_name = "FILE")]
    data_path: Option<PathBuf>,

    /// Default number of shades for new palettes (1-20)
    #[arg(long, value_name = "N")]
    color_count: Option<usize>,

    /// Default spacing strategy
    #[arg(long, value_enum)]
    curve_mode: Option<CurveMode>,

    /// Print contrast ratios next to swatches
    #[arg(long, value_name = "BOOL")]
    show_contrast: Option<bool>,

    /// Swatch width in terminal columns (4-24)
    #[arg(long, value_name = "COLUMNS")]
    swatch_width: Option<u16>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    paths: PathsOutput,
    generation: GenerationOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    data_file: String,
}

#[derive(Serialize, Debug)]
struct GenerationOutput {
    color_count: usize,
    curve_mode: CurveMode,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    show_contrast: bool,
    swatch_width: u16,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let output = ConfigOutput::from_config(&config)?;

        if self.json {
            print_json(&output)
        } else {
            output_human_readable(&output);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    const fn is_empty(&self) -> bool {
        self.data_path.is_none()
            && self.color_count.is_none()
            && self.curve_mode.is_none()
            && self.show_contrast.is_none()
            && self.swatch_width.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --data-path, --color-count, --curve-mode, --show-contrast, or --swatch-width",
            ));
        }

        // Load current configuration
        let mut config = Config::load().unwrap_or_default();

        if let Some(path) = &self.data_path {
            config.paths.data_file = Some(path.clone());
        }
        if let Some(count) = self.color_count {
            config.generation.color_count = count;
        }
        if let Some(mode) = self.curve_mode {
            config.generation.curve_mode = mode;
        }
        if let Some(show) = self.show_contrast {
            config.ui.show_contrast = show;
        }
        if let Some(width) = self.swatch_width {
            config.ui.swatch_width = width;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

impl ConfigOutput {
    fn from_config(config: &Config) -> CliResult<Self> {
        let config_file = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve config file: {e}")))?;
        let data_file = config
            .data_file_path()
            .map_err(|e| CliError::io(format!("Failed to resolve data file: {e}")))?;

        Ok(Self {
            config_file: config_file.to_string_lossy().to_string(),
            paths: PathsOutput {
                data_file: data_file.to_string_lossy().to_string(),
            },
            generation: GenerationOutput {
                color_count: config.generation.color_count,
                curve_mode: config.generation.curve_mode,
            },
            ui: UiOutput {
                show_contrast: config.ui.show_contrast,
                swatch_width: config.ui.swatch_width,
            },
        })
    }
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("{APP_NAME} configuration file: {}", output.config_file);
    println!();
    println!("[paths]");
    println!("  data_file     = {}", output.paths.data_file);
    println!("[generation]");
    println!("  color_count   = {}", output.generation.color_count);
    println!("  curve_mode    = {}", output.generation.curve_mode);
    println!("[ui]");
    println!("  show_contrast = {}", output.ui.show_contrast);
    println!("  swatch_width  = {}", output.ui.swatch_width);
}
