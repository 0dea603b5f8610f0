//! Import command.

use std::path::PathBuf;

use clap::Args;

use crate::cli::common::{print_json, CliError, CliResult, GlobalArgs};
use crate::models::ImportData;
use crate::services::ImportMode;

/// Import palettes from an exported JSON file
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// File produced by `export-all` (or any file with a `colorSets` array)
    pub file: PathBuf,

    /// Merge with existing palettes or replace them
    #[arg(short, long, value_enum, default_value_t = ImportMode::Merge)]
    pub mode: ImportMode,

    /// Output the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let content = std::fs::read_to_string(&self.file)
            .map_err(|e| CliError::io(format!("Failed to read {}: {e}", self.file.display())))?;

        // Parse before opening the data file so a bad import never touches it
        let data = ImportData::parse(&content)
            .map_err(|e| CliError::validation(format!("Import failed: {e}")))?;

        let mut session = global.open()?;
        let summary = session
            .themer
            .process_import(data, self.mode)
            .map_err(|e| CliError::validation(format!("Import failed: {e}")))?;

        if self.json {
            return print_json(&summary);
        }
        println!("✓ {}", summary.message());
        Ok(())
    }
}
