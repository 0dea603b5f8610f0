//! Export commands: one palette as stylesheet text, or every palette as JSON.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use crate::cli::common::{write_output, CliError, CliResult, GlobalArgs};
use crate::models::{ColorFormat, ExportFormat, ImportData};

/// Export one palette as CSS, SCSS, JSON or Tailwind config
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Palette id
    pub id: u32,

    /// Output format (remembered for later exports)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Color value format (remembered for later exports)
    #[arg(long, value_enum)]
    pub color_format: Option<ColorFormat>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Copy the export to the system clipboard
    #[arg(long)]
    pub copy: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let mut session = global.open()?;
        let themer = &mut session.themer;

        if themer.color_set(self.id).is_none() {
            return Err(CliError::validation(format!("No color set with id {}", self.id)));
        }
        if let Some(format) = self.format {
            themer.set_export_format(format);
        }
        if let Some(color_format) = self.color_format {
            themer.set_color_format(color_format);
        }

        let content = themer
            .export_color_set(self.id)
            .map_err(|e| CliError::validation(format!("Failed to export palette: {e}")))?;

        if self.copy {
            copy_to_clipboard(&content)?;
            eprintln!("✓ Copied {} export to clipboard", themer.export_format());
        }

        match &self.output {
            Some(path) => {
                write_output(path, &content)?;
                println!("✓ Exported palette {} to: {}", self.id, path.display());
            }
            None if !self.copy => println!("{}", content.trim_end_matches('\n')),
            None => {}
        }
        Ok(())
    }
}

fn copy_to_clipboard(content: &str) -> CliResult<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| CliError::io(format!("Clipboard unavailable: {e}")))?;
    clipboard
        .set_text(content)
        .map_err(|e| CliError::io(format!("Failed to copy to clipboard: {e}")))
}

/// Export every palette in the import file format
#[derive(Debug, Clone, Args)]
pub struct ExportAllArgs {
    /// Output file, or a directory to receive `color-palettes-YYYY-MM-DD.json`
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl ExportAllArgs {
    /// Execute the export-all command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let session = global.open()?;
        let data = session.themer.export_all();
        let json = serde_json::to_string_pretty(&data)
            .map_err(|e| CliError::io(format!("Failed to serialize palettes: {e}")))?;

        let Some(output) = &self.output else {
            println!("{json}");
            return Ok(());
        };

        let path = if output.is_dir() {
            output.join(ImportData::default_file_name(Utc::now()))
        } else {
            output.clone()
        };
        write_output(&path, &json)?;
        println!(
            "✓ Exported {} palette(s) to: {}",
            data.color_sets.len(),
            path.display()
        );
        Ok(())
    }
}
