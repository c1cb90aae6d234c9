/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a 6x8 puzzle in the default `complete.svg` file:
//!
//! ```
//! $ jumpgrid 6 8
//! complete.svg
//! ```
//!
//! Generate three reproducible puzzles as JSON documents, and print some statistics:
//!
//! ```
//! $ jumpgrid 10 10 --seed 42 --count 3 --format json --output maze.json --summary
//! maze-1.json
//! maze-2.json
//! maze-3.json
//!
//!         total time = 0.0012s
//!       average time = 0.0004s
//!           max time = 0.0006s
//!   average attempts = 1
//! ...
//! ```
//!
//! Draw a saved JSON puzzle again, this time with the start cell marked:
//!
//! ```
//! $ jumpgrid --render maze-1.json --show-start --output solution.svg
//! solution.svg
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::path::{Path, PathBuf};

use jumpgrid::config::{COPYRIGHT_NOTICE, Config, OutputFormat};
use jumpgrid::generator::puzzle::{GenerationError, Generator, Puzzle};
use jumpgrid::saver::puzzle::{PuzzleDocument, SaverPuzzle};

/// Generate number maze puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of lines in the grid
    rows: Option<usize>,

    /// Number of cells per line
    columns: Option<usize>,

    /// Seed for the random number generator, for reproducible puzzles
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(value_enum, short, long)]
    format: Option<OutputFormat>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print some statistics after generating the puzzles
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Draw a puzzle saved in JSON format as an SVG image, instead of generating a new one
    #[arg(long, conflicts_with_all = ["rows", "columns", "count", "seed"])]
    render: Option<PathBuf>,

    /// Mark the start cell of the winning path in SVG images
    #[arg(long, default_value_t = false)]
    show_start: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut config: Config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Cannot read the configuration file {}: {e}", path.display());
                return 1;
            }
        },
        None => Config::default(),
    };
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.show_start {
        config.rendering.show_start = true;
    }

    //
    // Draw a saved puzzle
    //
    if let Some(source) = &args.render {
        let document: PuzzleDocument = match SaverPuzzle::new(source).load() {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Cannot read the puzzle file {}: {e}", source.display());
                return 1;
            }
        };
        let output: PathBuf = output_file(&args, &config, OutputFormat::Svg, None);
        return save(&output, &document, OutputFormat::Svg, &config);
    }

    //
    // Generate new puzzles
    //
    let rows: usize = args.rows.unwrap_or(config.generation.default_rows);
    let columns: usize = args.columns.unwrap_or(config.generation.default_columns);
    let mut generator: Generator = match Generator::new(rows, columns, &config.generation) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let mut rng: StdRng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut errors: usize = 0;
    let mut iterations: usize = 0;
    let mut attempts: usize = 0;
    let mut ret: u8 = 0;
    for i in 0..args.count {
        debug!("Puzzle {i}");

        let puzzle: Puzzle = match generator.generate(&mut rng) {
            Ok(p) => p,
            Err(GenerationError::NoPath { attempts: a }) => {
                // The walk kept getting stuck, the generator gave up
                errors += 1;
                attempts += a;
                debug!("ERROR generating puzzle {i}");
                continue;
            }
            Err(e) => panic!("{e}"),
        };
        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        iterations += generator.iteration;
        attempts += puzzle.attempts;

        // Verify that the puzzle can be solved by following the winning path
        if !puzzle.is_solvable() {
            eprintln!(
                "Winning path does not lead to the goal: {:?}\n{}",
                puzzle.winning_path.get(),
                puzzle.grid
            );
            panic!("Bug: unsolvable puzzle");
        }

        // Verify that no cell is left blank
        if puzzle.grid.num_blanks() != 0 {
            eprintln!("Blank cells left:\n{}", puzzle.grid);
            panic!("Bug: incomplete puzzle");
        }

        let index: Option<usize> = if args.count > 1 { Some(i + 1) } else { None };
        let output: PathBuf = output_file(&args, &config, config.output.format, index);
        let document: PuzzleDocument = PuzzleDocument::new(puzzle, args.seed);
        if save(&output, &document, config.output.format, &config) != 0 {
            ret = 1;
        }
    }

    // Print some stats
    if args.summary {
        let count: usize = args.count.max(1);
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
  average attempts = {}
average iterations = {}
            errors = {}",
            total,
            total / count as f32,
            max,
            attempts / count,
            iterations / count,
            errors
        );
    }

    if errors > 0 { 1 } else { ret }
}

/// Compute the name of the output file.
///
/// Without `--output`, the configured file name is used with the extension of the format.
/// When several puzzles are generated, the puzzle number is appended to the file stem.
fn output_file(
    args: &Args,
    config: &Config,
    format: OutputFormat,
    index: Option<usize>,
) -> PathBuf {
    let base: PathBuf = match &args.output {
        Some(o) => o.clone(),
        None => Path::new(&config.output.filename).with_extension(format.extension()),
    };
    match index {
        None => base,
        Some(i) => {
            let stem: String = base
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let name: String = match base.extension() {
                Some(ext) => format!("{stem}-{i}.{}", ext.to_string_lossy()),
                None => format!("{stem}-{i}"),
            };
            base.with_file_name(name)
        }
    }
}

/// Save the document and print the file name. Return the exit code.
fn save(output: &Path, document: &PuzzleDocument, format: OutputFormat, config: &Config) -> u8 {
    let saver: SaverPuzzle = SaverPuzzle::new(output);
    match saver.save(document, format, &config.rendering) {
        Ok(()) => {
            println!("{}", saver.path().display());
            0
        }
        Err(e) => {
            eprintln!("Cannot write {}: {e}", output.display());
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names() {
        let config: Config = Config::default();

        let args: Args = Args::parse_from(["jumpgrid", "5", "5"]);
        assert_eq!(
            output_file(&args, &config, OutputFormat::Svg, None),
            PathBuf::from("complete.svg")
        );
        assert_eq!(
            output_file(&args, &config, OutputFormat::Json, Some(2)),
            PathBuf::from("complete-2.json")
        );

        let args: Args = Args::parse_from(["jumpgrid", "-o", "out/maze.svg", "-c", "3"]);
        assert_eq!(
            output_file(&args, &config, OutputFormat::Svg, Some(3)),
            PathBuf::from("out/maze-3.svg")
        );
    }

    #[test]
    fn argument_parsing() {
        let args: Args =
            Args::parse_from(["jumpgrid", "6", "8", "--seed", "42", "-f", "json", "--summary"]);
        assert_eq!(args.rows, Some(6));
        assert_eq!(args.columns, Some(8));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(args.summary);
        assert_eq!(args.count, 1);

        // Rendering a saved puzzle does not generate a new one
        assert!(Args::try_parse_from(["jumpgrid", "--render", "a.json", "--seed", "1"]).is_err());
        assert!(Args::try_parse_from(["jumpgrid", "--render", "a.json", "--show-start"]).is_ok());
    }
}
