/*
config.rs

Copyright 2025 Hervé Quatremain

This file is part of Jumpgrid.

Jumpgrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Jumpgrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Jumpgrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generator settings.
//!
//! The settings are grouped in three sections: [`GenerationConfig`], [`RenderingConfig`], and
//! [`OutputConfig`]. All the fields have defaults, so a configuration file only needs to list
//! the values to change:
//!
//! ```json
//! {
//!     "generation": { "path_length": 8 },
//!     "output": { "format": "json", "filename": "puzzle.json" }
//! }
//! ```

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Format of the generated file.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// SVG image of the puzzle.
    #[default]
    Svg,

    /// JSON document with the grid and its solution.
    Json,
}

impl OutputFormat {
    /// File extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
        }
    }
}

/// Puzzle generation settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of lines when not given on the command line.
    pub default_rows: usize,

    /// Number of cells per line when not given on the command line.
    pub default_columns: usize,

    /// Number of jumps the winning path makes before heading for the goal. This is not a hard
    /// limit: the path can be shorter or longer.
    pub path_length: usize,

    /// Largest number of lines or columns.
    pub max_grid_size: usize,

    /// Number of times the winning path is carved again after a dead end.
    pub max_attempts: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_rows: 4,
            default_columns: 4,
            path_length: 6,
            max_grid_size: 100,
            max_attempts: 200,
        }
    }
}

/// SVG rendering settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderingConfig {
    pub cell_size: u32,
    pub stroke_width: u32,
    pub stroke_color: String,
    pub font_size: u32,
    pub font_family: String,

    /// Mark the start cell of the winning path. Gives the solution away.
    pub show_start: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            cell_size: 50,
            stroke_width: 2,
            stroke_color: "black".to_string(),
            font_size: 24,
            font_family: "sans-serif".to_string(),
            show_start: false,
        }
    }
}

/// Output file settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub filename: String,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename: "complete.svg".to_string(),
            format: OutputFormat::Svg,
        }
    }
}

/// All the settings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub generation: GenerationConfig,
    pub rendering: RenderingConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Read the settings from a JSON file. Missing values get their default.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        debug!("Configuration file: {path:?}");
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_sensible() {
        let config: Config = Config::default();
        assert!(config.generation.default_rows >= 3);
        assert!(config.generation.default_columns >= 3);
        assert!(config.generation.path_length > 0);
        assert!(config.generation.max_grid_size > config.generation.default_rows);
        assert!(config.generation.max_attempts > 0);
        assert!(config.rendering.cell_size > 0);
        assert!(config.rendering.stroke_width > 0);
        assert!(config.rendering.font_size > 0);
        assert!(!config.rendering.stroke_color.is_empty());
        assert!(!config.rendering.font_family.is_empty());
        assert!(!config.output.filename.is_empty());
        assert_eq!(config.output.format, OutputFormat::Svg);
    }

    #[test]
    fn empty_document_gives_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_overrides() {
        let config: Config = serde_json::from_str(
            r#"{
                "generation": { "path_length": 10 },
                "rendering": { "cell_size": 100, "stroke_color": "blue" },
                "output": { "format": "json" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.generation.path_length, 10);
        assert_eq!(config.generation.max_grid_size, 100);
        assert_eq!(config.rendering.cell_size, 100);
        assert_eq!(config.rendering.stroke_color, "blue");
        assert_eq!(config.rendering.font_family, "sans-serif");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.filename, "complete.svg");
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("jumpgrid-config-{}.json", std::process::id()));
        let mut file: File = File::create(&path).unwrap();
        file.write_all(br#"{"generation": {"default_rows": 7}}"#).unwrap();
        drop(file);

        let config: Config = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.generation.default_rows, 7);
        assert_eq!(config.generation.default_columns, 4);

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{"output": {"format": "png"}}"#).is_err());
    }
}
