//! End-to-end tests for palette collection commands.

mod fixtures;
use fixtures::*;

#[test]
fn test_list_creates_default_palette() {
    let ws = Workspace::new();
    let sets = ws.run_json(&["list", "--json"]);
    let sets = sets.as_array().unwrap();

    assert_eq!(sets.len(), 1, "an empty collection should be seeded with one palette");
    assert_eq!(sets[0]["id"], 1);
    assert_eq!(sets[0]["colorCount"], 11);
    assert_eq!(sets[0]["colors"].as_array().unwrap().len(), 11);
    assert!(ws.data_file().exists(), "data file should be written");
}

#[test]
fn test_add_with_base_color() {
    let ws = Workspace::new();
    let set = ws.run_json(&["add", "#3B82F6", "--name", "Ocean", "--json"]);

    assert_eq!(set["id"], 2);
    assert_eq!(set["baseColor"], "#3B82F6");
    assert_eq!(set["customName"], "Ocean");
    assert_eq!(set["generatedName"], "Blue");
    assert_eq!(set["colors"][4], "#3B82F6");
    assert_eq!(ws.ids(), vec![1, 2]);
}

#[test]
fn test_add_expands_short_hex() {
    let ws = Workspace::new();
    let set = ws.run_json(&["add", "#f00", "--count", "5", "--json"]);
    assert_eq!(set["baseColor"], "#ff0000");
    assert_eq!(set["colors"].as_array().unwrap().len(), 5);
}

#[test]
fn test_add_rejects_invalid_color() {
    let ws = Workspace::new();
    let stderr = assert_exit_code(&ws.run(&["add", "#GGGGGG"]), 1);
    assert!(stderr.contains("Invalid hex color"), "stderr: {stderr}");
}

#[test]
fn test_add_rejects_out_of_range_count() {
    let ws = Workspace::new();
    assert_exit_code(&ws.run(&["add", "#3B82F6", "--count", "21"]), 1);
    assert_exit_code(&ws.run(&["add", "--count", "0"]), 1);
    assert_eq!(ws.ids(), vec![1]);
}

#[test]
fn test_remove_last_palette_keeps_collection_non_empty() {
    let ws = Workspace::new();
    assert_eq!(ws.ids(), vec![1]);

    ws.run_ok(&["remove", "1"]);
    assert_eq!(ws.ids(), vec![2]);
}

#[test]
fn test_remove_unknown_palette() {
    let ws = Workspace::new();
    let stderr = assert_exit_code(&ws.run(&["remove", "42"]), 1);
    assert!(stderr.contains("No color set with id 42"));
}

#[test]
fn test_move_palette() {
    let ws = Workspace::new();
    ws.run_ok(&["add", "#3B82F6"]);
    ws.run_ok(&["add", "#10B981"]);
    assert_eq!(ws.ids(), vec![1, 2, 3]);

    ws.run_ok(&["move", "3", "1"]);
    assert_eq!(ws.ids(), vec![3, 1, 2]);

    let stdout = ws.run_ok(&["move", "2", "2"]);
    assert!(stdout.contains("already"));
    assert_eq!(ws.ids(), vec![3, 1, 2]);

    assert_exit_code(&ws.run(&["move", "1", "9"]), 1);
    assert_exit_code(&ws.run(&["move", "0", "1"]), 1);
}

#[test]
fn test_update_regenerates_palette() {
    let ws = Workspace::new();
    ws.run_ok(&["update", "1", "--base", "#EF4444", "--count", "7"]);

    let sets = ws.run_json(&["list", "--json"]);
    let set = &sets[0];
    assert_eq!(set["baseColor"], "#EF4444");
    assert_eq!(set["generatedName"], "Red");
    assert_eq!(set["colors"].as_array().unwrap().len(), 7);
}

#[test]
fn test_update_bounds_and_curve() {
    let ws = Workspace::new();
    ws.run_ok(&["add", "#3B82F6"]);
    ws.run_ok(&[
        "update",
        "2",
        "--min-lightness",
        "20",
        "--max-lightness",
        "90",
        "--saturation-curve",
        "-30",
    ]);

    let set = ws.run_json(&["show", "2", "--json"]);
    assert_eq!(set["minLightness"], 20.0);
    assert_eq!(set["maxLightness"], 90.0);
    assert_eq!(set["saturationCurve"], -30);
    assert_eq!(set["colors"].as_array().unwrap().len(), 11);
}

#[test]
fn test_update_contrast_moves_lightness_bounds() {
    let ws = Workspace::new();
    ws.run_ok(&["add", "#3B82F6"]);
    let before = ws.run_json(&["show", "2", "--json"]);

    ws.run_ok(&["update", "2", "--min-contrast", "4"]);

    let set = ws.run_json(&["show", "2", "--json"]);
    assert_eq!(set["minContrast"], 4.0);
    assert_eq!(set["maxLightness"], 80.6);
    assert_ne!(set["colors"], before["colors"]);
}

#[test]
fn test_update_rejects_crossed_bounds() {
    let ws = Workspace::new();
    let before = ws.run_json(&["list", "--json"]);

    let stderr = assert_exit_code(
        &ws.run(&["update", "1", "--min-contrast", "9", "--max-contrast", "2"]),
        1,
    );
    assert!(stderr.contains("greater than"), "stderr: {stderr}");
    assert_eq!(ws.run_json(&["list", "--json"]), before);
}

#[test]
fn test_update_requires_an_option() {
    let ws = Workspace::new();
    assert_exit_code(&ws.run(&["update", "1"]), 1);
}

#[test]
fn test_show_json_swatches() {
    let ws = Workspace::new();
    ws.run_ok(&["add", "#3B82F6"]);

    let shown = ws.run_json(&["show", "2", "--json"]);
    assert_eq!(shown["displayName"], "Blue");
    let swatches = shown["swatches"].as_array().unwrap();
    assert_eq!(swatches.len(), 11);
    assert_eq!(swatches[0]["weight"], 50);
    assert_eq!(swatches[10]["weight"], 950);
    assert_eq!(swatches[4]["isBase"], true);
    assert_eq!(swatches[4]["contrastLabel"], "3.68:1");
    assert_eq!(swatches[0]["textColor"], "#000000");
    assert_eq!(swatches[10]["textColor"], "#FFFFFF");
}

#[test]
fn test_show_terminal_swatches() {
    let ws = Workspace::new();
    ws.run_ok(&["add", "#3B82F6"]);

    let stdout = ws.run_ok(&["show", "2"]);
    assert!(stdout.starts_with("Blue (#3B82F6)"));
    assert!(stdout.contains("#3B82F6"));
    assert!(stdout.contains("3.68:1"));
    assert!(stdout.contains("base"));
}

#[test]
fn test_reset_requires_confirmation() {
    let ws = Workspace::new();
    ws.run_ok(&["add", "#3B82F6"]);

    assert_exit_code(&ws.run(&["reset"]), 1);
    assert_eq!(ws.ids(), vec![1, 2]);

    ws.run_ok(&["reset", "--yes"]);
    assert_eq!(ws.ids(), vec![1]);
}

#[test]
fn test_corrupt_data_file_is_replaced() {
    let ws = Workspace::new();
    std::fs::write(ws.data_file(), "{ not json").unwrap();

    assert_eq!(ws.ids(), vec![1]);
    let content = std::fs::read_to_string(ws.data_file()).unwrap();
    assert!(content.contains("\"colorSets\""));
}

#[test]
fn test_generate_does_not_touch_data_file() {
    let ws = Workspace::new();
    let stdout = ws.run_ok(&["generate", "#3B82F6"]);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[4], "#3B82F6");
    assert!(!ws.data_file().exists());
}

#[test]
fn test_generate_json_and_contrast_mode() {
    let ws = Workspace::new();
    let out = ws.run_json(&["generate", "#3B82F6", "--mode", "contrast", "--count", "11", "--json"]);

    assert_eq!(out["mode"], "contrast");
    let shades = out["shades"].as_array().unwrap();
    assert_eq!(shades.len(), 11);
    assert_eq!(shades[1]["hex"], "#3B82F6");
    assert_eq!(shades[1]["weight"], 100);
}

#[test]
fn test_contrast_command() {
    let ws = Workspace::new();
    let report = ws.run_json(&["contrast", "#3B82F6", "--json"]);
    assert_eq!(report["background"], "#FFFFFF");
    assert_eq!(report["label"], "3.68:1");
    assert_eq!(report["aa"], false);
    assert_eq!(report["aaLarge"], true);

    let stdout = ws.run_ok(&["contrast", "#000", "#fff"]);
    assert!(stdout.contains("21:1"));
}
