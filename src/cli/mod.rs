//! CLI command handlers for Color Themer.
//!
//! Every command opens the palette data file, applies one operation and
//! exits. Read commands accept `--json` for scripting.

pub mod common;
pub mod config;
pub mod contrast;
pub mod export;
pub mod generate;
pub mod import;
pub mod palette;

use clap::{Parser, Subcommand};

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode, GlobalArgs};
pub use config::ConfigArgs;
pub use contrast::{ContrastArgs, ContrastReport};
pub use export::{ExportAllArgs, ExportArgs};
pub use generate::GenerateArgs;
pub use import::ImportArgs;
pub use palette::{AddArgs, ListArgs, MoveArgs, RemoveArgs, ResetArgs, ShowArgs, UpdateArgs};

/// Color Themer - generate, manage and export color palettes
#[derive(Parser, Debug)]
#[command(name = "color-themer", author, version, about, long_about = None)]
pub struct Cli {
    /// Options shared by every command
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all palettes
    List(ListArgs),
    /// Show one palette as terminal swatches
    Show(ShowArgs),
    /// Add a palette from a base color, or a random one
    Add(AddArgs),
    /// Remove a palette
    Remove(RemoveArgs),
    /// Move a palette to another position
    Move(MoveArgs),
    /// Change a palette's base color, size, name or bounds
    Update(UpdateArgs),
    /// Print the shades of a base color without saving them
    Generate(GenerateArgs),
    /// Export one palette as CSS, SCSS, JSON or Tailwind config
    Export(ExportArgs),
    /// Export every palette as an importable JSON file
    ExportAll(ExportAllArgs),
    /// Import palettes from a JSON file
    Import(ImportArgs),
    /// Check the WCAG contrast between two colors
    Contrast(ContrastArgs),
    /// Delete all palettes and preferences
    Reset(ResetArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Cli {
    /// Runs the selected command.
    pub fn execute(&self) -> CliResult<()> {
        let global = &self.global;
        match &self.command {
            Command::List(args) => args.execute(global),
            Command::Show(args) => args.execute(global),
            Command::Add(args) => args.execute(global),
            Command::Remove(args) => args.execute(global),
            Command::Move(args) => args.execute(global),
            Command::Update(args) => args.execute(global),
            Command::Generate(args) => args.execute(),
            Command::Export(args) => args.execute(global),
            Command::ExportAll(args) => args.execute(global),
            Command::Import(args) => args.execute(global),
            Command::Contrast(args) => args.execute(),
            Command::Reset(args) => args.execute(global),
            Command::Config(args) => args.execute(),
        }
    }
}
