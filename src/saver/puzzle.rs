/*
puzzle.rs

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

//! Save and restore generated puzzles.
//!
//! A puzzle is saved either as an SVG image, ready to print, or as a JSON document. The JSON
//! document is a serialization of the [`Puzzle`] object with [`serde`], plus the generation
//! date and the random seed. It can be read back to draw the puzzle again.

use chrono::Local;
use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{OutputFormat, RenderingConfig};
use crate::draw;
use crate::generator::puzzle::Puzzle;

/// Saved puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PuzzleDocument {
    /// Generation date, in RFC 3339 format.
    pub generated: String,

    /// Seed of the random number generator, when one was given.
    pub seed: Option<u64>,

    #[serde(flatten)]
    pub puzzle: Puzzle,
}

impl PuzzleDocument {
    /// Create a [`PuzzleDocument`] object dated now.
    pub fn new(puzzle: Puzzle, seed: Option<u64>) -> Self {
        Self {
            generated: Local::now().to_rfc3339(),
            seed,
            puzzle,
        }
    }
}

/// Object to save and restore puzzles.
pub struct SaverPuzzle {
    /// Path to the file.
    save_file: PathBuf,
}

impl SaverPuzzle {
    /// Create a [`SaverPuzzle`] object for the given file.
    pub fn new(save_file: &Path) -> Self {
        debug!("Puzzle file: {save_file:?}");
        SaverPuzzle {
            save_file: save_file.to_path_buf(),
        }
    }

    /// Path to the file.
    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Save the puzzle in the requested format.
    pub fn save(
        &self,
        document: &PuzzleDocument,
        format: OutputFormat,
        rendering: &RenderingConfig,
    ) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        match format {
            OutputFormat::Svg => {
                writer.write_all(draw::svg_grid(&document.puzzle.grid, rendering).as_bytes())?
            }
            OutputFormat::Json => serde_json::to_writer_pretty(&mut writer, document)?,
        }
        writer.flush()?;
        Ok(())
    }

    /// Read a puzzle saved in JSON format.
    ///
    /// # Errors
    ///
    /// The method returns an error if the file cannot be read, if it is not a puzzle document,
    /// or if the grid dimensions do not match its cells.
    pub fn load(&self) -> Result<PuzzleDocument, Box<dyn Error>> {
        let file: File = File::open(&self.save_file)?;
        let reader: BufReader<File> = BufReader::new(file);
        let document: PuzzleDocument = serde_json::from_reader(reader)?;
        document.puzzle.grid.validate()?;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use crate::generator::puzzle::Generator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::env;
    use std::fs;

    fn temp_file(name: &str) -> PathBuf {
        env::temp_dir().join(format!("jumpgrid-{}-{name}", std::process::id()))
    }

    fn puzzle() -> Puzzle {
        let mut g: Generator = Generator::new(5, 6, &GenerationConfig::default()).unwrap();
        g.generate(&mut StdRng::seed_from_u64(12)).unwrap()
    }

    #[test]
    fn json_round_trip() {
        let path: PathBuf = temp_file("puzzle.json");
        let saver: SaverPuzzle = SaverPuzzle::new(&path);
        let document: PuzzleDocument = PuzzleDocument::new(puzzle(), Some(12));

        saver
            .save(&document, OutputFormat::Json, &RenderingConfig::default())
            .unwrap();
        let back: PuzzleDocument = saver.load().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(back, document);
        assert!(back.puzzle.is_solvable());
    }

    #[test]
    fn svg_file() {
        let path: PathBuf = temp_file("puzzle.svg");
        let saver: SaverPuzzle = SaverPuzzle::new(&path);
        let document: PuzzleDocument = PuzzleDocument::new(puzzle(), None);

        saver
            .save(&document, OutputFormat::Svg, &RenderingConfig::default())
            .unwrap();
        let svg: String = fs::read_to_string(&path).unwrap();
        // An SVG file is not a puzzle document
        let res = saver.load();
        fs::remove_file(&path).unwrap();

        assert!(res.is_err());
        assert!(svg.starts_with("<svg viewBox=\"0 0 300 250\""));
        assert_eq!(svg.matches("class=\"goal\"").count(), 1);
    }

    #[test]
    fn inconsistent_grid_is_rejected() {
        let path: PathBuf = temp_file("broken.json");
        let document: PuzzleDocument = PuzzleDocument::new(puzzle(), None);
        let mut value: serde_json::Value = serde_json::to_value(&document).unwrap();
        value["grid"]["rows"] = serde_json::Value::from(9);
        fs::write(&path, value.to_string()).unwrap();

        let res = SaverPuzzle::new(&path).load();
        assert!(res.is_err());

        // Dimensions whose product wraps around must not pass the check
        value["grid"]["rows"] = serde_json::Value::from(1u64 << 32);
        value["grid"]["columns"] = serde_json::Value::from((1u64 << 32) + 1);
        fs::write(&path, value.to_string()).unwrap();
        let res = SaverPuzzle::new(&path).load();
        fs::remove_file(&path).unwrap();
        assert!(res.unwrap_err().to_string().contains("too many cells"));
    }
}
