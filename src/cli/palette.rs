//! Palette collection commands: list, show, add, remove, move, update, reset.

use std::fmt::Write as _;

use clap::Args;
use crossterm::style::Stylize;
use serde::Serialize;

use crate::cli::common::{print_json, CliError, CliResult, GlobalArgs};
use crate::color::hex_to_rgb;
use crate::export::{swatches, Swatch, DARK_TEXT};
use crate::models::{ColorSet, ColorSetUpdate, RgbColor, MAX_COLOR_COUNT, MIN_COLOR_COUNT};
use crate::services::ThemerError;

/// List all palettes
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let session = global.open()?;
        let sets = session.themer.color_sets();

        if self.json {
            return print_json(&sets);
        }

        for (position, set) in sets.iter().enumerate() {
            println!(
                "{:>2}. [{}] {} {} ({} shades)",
                position + 1,
                set.id,
                set.display_name(),
                set.base_color,
                set.colors.len()
            );
        }
        Ok(())
    }
}

/// Show one palette as terminal swatches
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Palette id
    pub id: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowOutput<'a> {
    #[serde(flatten)]
    set: &'a ColorSet,
    display_name: String,
    swatches: Vec<Swatch>,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let session = global.open()?;
        let set = session
            .themer
            .color_set(self.id)
            .ok_or_else(|| CliError::validation(format!("No color set with id {}", self.id)))?;

        let swatches = swatches(set)
            .map_err(|e| CliError::validation(format!("Stored palette is invalid: {e}")))?;

        if self.json {
            return print_json(&ShowOutput {
                set,
                display_name: set.display_name(),
                swatches,
            });
        }

        let width = usize::from(session.config.ui.swatch_width);
        println!("{} ({})", set.display_name(), set.base_color);
        for swatch in &swatches {
            let background = hex_to_rgb(&swatch.hex)
                .map_err(|e| CliError::validation(format!("Stored palette is invalid: {e}")))?;
            let foreground = if swatch.text_color == DARK_TEXT {
                RgbColor::BLACK
            } else {
                RgbColor::WHITE
            };

            let cell = format!("{:^width$}", swatch.weight);
            let mut line = format!(
                "{} #{}",
                cell.with(foreground.to_terminal_color())
                    .on(background.to_terminal_color()),
                swatch.hex_label
            );
            if session.config.ui.show_contrast {
                let _ = write!(line, "  {:>7}", swatch.contrast_label);
            }
            if swatch.is_base {
                line.push_str("  base");
            }
            println!("{line}");
        }
        Ok(())
    }
}

/// Add a palette
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Base color (#RRGGBB or #RGB); random when omitted
    pub base_color: Option<String>,

    /// Number of shades (1-20)
    #[arg(short, long, value_name = "N")]
    pub count: Option<usize>,

    /// Display name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output the new palette as JSON
    #[arg(long)]
    pub json: bool,
}

impl AddArgs {
    /// Execute the add command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let mut session = global.open()?;
        let themer = &mut session.themer;

        let id = match &self.base_color {
            Some(base) => themer.add_color_set_with_base(base, self.count)?,
            None => {
                if let Some(count) = self.count {
                    if !(MIN_COLOR_COUNT..=MAX_COLOR_COUNT).contains(&count) {
                        return Err(ThemerError::InvalidColorCount(count).into());
                    }
                }
                let id = themer.add_color_set();
                if let Some(count) = self.count {
                    let update = ColorSetUpdate {
                        color_count: Some(count),
                        ..ColorSetUpdate::default()
                    };
                    themer.update_color_set(id, update)?;
                }
                id
            }
        };

        if let Some(name) = &self.name {
            let update = ColorSetUpdate {
                custom_name: Some(name.clone()),
                ..ColorSetUpdate::default()
            };
            themer.update_color_set(id, update)?;
        }

        let set = themer
            .color_set(id)
            .ok_or_else(|| CliError::io(format!("Palette {id} vanished after creation")))?;
        if self.json {
            return print_json(set);
        }

        println!("✓ Added palette {id}: {} ({})", set.display_name(), set.base_color);
        Ok(())
    }
}

/// Remove a palette
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    /// Palette id
    pub id: u32,
}

impl RemoveArgs {
    /// Execute the remove command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let mut session = global.open()?;
        if !session.themer.remove_color_set(self.id) {
            return Err(CliError::validation(format!("No color set with id {}", self.id)));
        }

        println!("✓ Removed palette {}", self.id);
        Ok(())
    }
}

/// Move a palette to another position
#[derive(Debug, Clone, Args)]
pub struct MoveArgs {
    /// Current position (1-based, as shown by `list`)
    pub from: usize,

    /// Target position (1-based)
    pub to: usize,
}

impl MoveArgs {
    /// Execute the move command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let mut session = global.open()?;
        let len = session.themer.color_sets().len();

        for position in [self.from, self.to] {
            if position == 0 || position > len {
                return Err(CliError::validation(format!(
                    "Position {position} is out of range (1-{len})"
                )));
            }
        }

        if session.themer.reorder_color_sets(self.from - 1, self.to - 1) {
            println!("✓ Moved palette from position {} to {}", self.from, self.to);
        } else {
            println!("Palette already at position {}", self.to);
        }
        Ok(())
    }
}

/// Change a palette's base color, size, name or bounds
#[derive(Debug, Clone, Args)]
pub struct UpdateArgs {
    /// Palette id
    pub id: u32,

    /// New base color (#RRGGBB or #RGB)
    #[arg(long, value_name = "HEX")]
    pub base: Option<String>,

    /// New number of shades (1-20)
    #[arg(short, long, value_name = "N")]
    pub count: Option<usize>,

    /// New display name (empty string clears it)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Contrast against white of the lightest shade (1-21)
    #[arg(long, value_name = "RATIO")]
    pub min_contrast: Option<f64>,

    /// Contrast against white of the darkest shade (1-21)
    #[arg(long, value_name = "RATIO")]
    pub max_contrast: Option<f64>,

    /// Lightness of the darkest shade (0-100)
    #[arg(long, value_name = "PERCENT")]
    pub min_lightness: Option<f64>,

    /// Lightness of the lightest shade (0-100)
    #[arg(long, value_name = "PERCENT")]
    pub max_lightness: Option<f64>,

    /// Saturation bias across shades (-100 to 100)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub saturation_curve: Option<i32>,
}

impl UpdateArgs {
    fn to_update(&self) -> ColorSetUpdate {
        ColorSetUpdate {
            base_color: self.base.clone(),
            color_count: self.count,
            custom_name: self.name.clone(),
            min_contrast: self.min_contrast,
            max_contrast: self.max_contrast,
            min_lightness: self.min_lightness,
            max_lightness: self.max_lightness,
            saturation_curve: self.saturation_curve,
        }
    }

    /// Execute the update command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        let update = self.to_update();
        if update.is_empty() {
            return Err(CliError::validation(
                "At least one option must be specified: --base, --count, --name, or a bound",
            ));
        }

        let mut session = global.open()?;
        let regenerates = update.triggers_regeneration();
        session.themer.update_color_set(self.id, update)?;

        if regenerates {
            println!("✓ Updated and regenerated palette {}", self.id);
        } else {
            println!("✓ Updated palette {}", self.id);
        }
        Ok(())
    }
}

/// Delete all palettes and preferences
#[derive(Debug, Clone, Args)]
pub struct ResetArgs {
    /// Confirm the reset
    #[arg(long)]
    pub yes: bool,
}

impl ResetArgs {
    /// Execute the reset command
    pub fn execute(&self, global: &GlobalArgs) -> CliResult<()> {
        if !self.yes {
            return Err(CliError::validation(
                "Reset deletes every palette. Re-run with --yes to confirm",
            ));
        }

        let mut session = global.open()?;
        session.themer.clear_all_data();
        println!("✓ Cleared all palettes");
        Ok(())
    }
}
