//! Text coordinates ("D4" style) for the GTP front end.
//!
//! Columns are letters A-Z skipping 'I' (Go convention to avoid confusion
//! with 'J'), left to right. Rows are numbered from 1 at the bottom edge, so
//! row 0 of a [`Point`] is the highest number.

use anyhow::{Context, Result, bail};

use crate::board::Point;
use crate::constants::{COLUMN_LETTERS, MAX_SIZE};

/// Parse a vertex such as `D4` or `q16` on a `size`x`size` board.
pub fn parse_coord(s: &str, size: usize) -> Result<Point> {
    if size > MAX_SIZE {
        bail!("board size {size} has no text coordinates (max {MAX_SIZE})");
    }

    let s = s.trim();
    let mut chars = s.chars();
    let Some(letter) = chars.next() else {
        bail!("empty coordinate");
    };
    let letter = letter.to_ascii_uppercase();
    let col = COLUMN_LETTERS
        .iter()
        .position(|&b| b as char == letter)
        .with_context(|| format!("invalid column in {s:?}"))?;

    let number: usize = chars
        .as_str()
        .parse()
        .with_context(|| format!("invalid row in {s:?}"))?;

    if col >= size || number == 0 || number > size {
        bail!("{s:?} is off the {size}x{size} board");
    }

    Ok(Point::new(size - number, col))
}

/// Format `pt` as a vertex such as `D4`.
///
/// # Panics
/// Panics if `pt` is off a `size`x`size` board or `size` exceeds
/// [`MAX_SIZE`].
pub fn str_coord(pt: Point, size: usize) -> String {
    assert!(
        size <= MAX_SIZE && pt.row < size && pt.col < size,
        "point ({}, {}) has no coordinate on a {size}x{size} board",
        pt.row,
        pt.col
    );
    let c = COLUMN_LETTERS[pt.col] as char;
    format!("{c}{}", size - pt.row)
}
