/*
draw.rs

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

//! Draw puzzles as SVG images.
//!
//! Each cell is drawn as a square. The goal gets a red circle, the cells with a direction get an
//! arrow and their number of steps. Blank cells should not exist in a finished puzzle, but they
//! are drawn as a black circle so that partial grids can be inspected.

use log::debug;
use std::fmt::Write;

use crate::config::RenderingConfig;
use crate::generator::coordinates::Coordinate;
use crate::generator::direction::Direction;
use crate::generator::grid::{Cell, Grid};
use crate::generator::puzzle::START_DECORATOR;

/// Render the grid as an SVG document.
pub fn svg_grid(grid: &Grid, config: &RenderingConfig) -> String {
    let size: u32 = config.cell_size;
    let mut svg: String = String::new();

    debug!("Drawing {}x{} grid, cell size {size}", grid.rows, grid.columns);

    // Writing into a String cannot fail
    let _ = write!(
        svg,
        "<svg viewBox=\"0 0 {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
        grid.columns as u32 * size,
        grid.rows as u32 * size
    );
    svg.push_str("\n<defs><link rel=\"stylesheet\" href=\"grid.css\" /></defs>");

    let mut line: usize = 0;
    for (coordinate, cell) in grid.cells() {
        if coordinate.col != line {
            svg.push('\n');
            line = coordinate.col;
        }
        draw_cell(&mut svg, coordinate, cell, config);
    }
    svg.push_str("\n\n</svg>\n");
    svg
}

/// Draw one cell.
fn draw_cell(svg: &mut String, coordinate: Coordinate, cell: &Cell, config: &RenderingConfig) {
    let size: f64 = config.cell_size as f64;
    let x: f64 = coordinate.row as f64 * size;
    let y: f64 = coordinate.col as f64 * size;
    let center_x: f64 = x + size / 2.0;
    let center_y: f64 = y + size / 2.0;

    let _ = write!(
        svg,
        "\n<rect x=\"{x}\" y=\"{y}\" width=\"{size}\" height=\"{size}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"white\" />",
        config.stroke_color, config.stroke_width
    );

    if cell.is_goal() {
        let _ = write!(
            svg,
            "\n<circle cx=\"{center_x}\" cy=\"{center_y}\" r=\"{}\" stroke-width=\"3\" stroke=\"red\" fill=\"none\" class=\"goal\" />",
            size / 5.0
        );
    } else if cell.is_blank() {
        let _ = write!(
            svg,
            "\n<circle cx=\"{center_x}\" cy=\"{center_y}\" r=\"{}\" stroke-width=\"2\" stroke=\"black\" fill=\"none\" class=\"blank\" />",
            size / 5.0
        );
    } else {
        svg.push_str(&svg_arrow(size, cell.direction, x, y));
        let _ = write!(
            svg,
            "\n<text x=\"{center_x}\" y=\"{center_y}\" font-size=\"{}\" font-family=\"{}\" text-anchor=\"middle\" alignment-baseline=\"central\" stroke=\"black\" fill=\"black\">{}</text>",
            config.font_size, config.font_family, cell.number
        );
    }

    if config.show_start && cell.has_decorator(START_DECORATOR) {
        let _ = write!(
            svg,
            "\n<rect x=\"{}\" y=\"{}\" width=\"5\" height=\"5\" stroke=\"{}\" stroke-width=\"{}\" fill=\"red\" class=\"start\" />",
            x + 5.0,
            y + 5.0,
            config.stroke_color,
            config.stroke_width
        );
    }
}

/// Triangle pointing in the given direction, inside the cell at (`x`, `y`).
fn svg_arrow(size: f64, direction: Direction, x: f64, y: f64) -> String {
    let arrow: f64 = size / 4.0;
    let center_x: f64 = x + size / 2.0;
    let center_y: f64 = y + size / 2.0;
    let near_x: f64 = x + arrow;
    let far_x: f64 = x + size - arrow;
    let near_y: f64 = y + arrow;
    let far_y: f64 = y + size - arrow;

    let points: String = match direction {
        Direction::Up => format!("{center_x},{near_y} {near_x},{far_y} {far_x},{far_y}"),
        Direction::Down => format!("{center_x},{far_y} {near_x},{near_y} {far_x},{near_y}"),
        Direction::Left => format!("{near_x},{center_y} {far_x},{near_y} {far_x},{far_y}"),
        Direction::Right => format!("{far_x},{center_y} {near_x},{near_y} {near_x},{far_y}"),
        Direction::None => return String::new(),
    };
    format!(
        "\n<polygon points=\"{points}\" class=\"arrow\" fill=\"lightgrey\" stroke=\"darkslategrey\" stroke-width=\"2\" />"
    )
}
