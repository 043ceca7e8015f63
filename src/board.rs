//! Board representation, adjacency and group search.
//!
//! The board is a flat row-major buffer of `Option<Stone>`, indexed by
//! `row * size + col`. Rules (captures, suicide, turn order) live in
//! [`crate::game`]; this module only answers questions about the grid.

use std::fmt;

use crate::constants::{COLUMN_LETTERS, DELTA, EMPTY, STONE_BLACK, STONE_WHITE};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// The other color.
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "black"),
            Stone::White => write!(f, "white"),
        }
    }
}

/// A zero-based board coordinate. Row 0 is the top row as printed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Connected stones of one color, each point listed once in discovery order.
pub type Group = Vec<Point>;

/// An NxN grid of cells, each empty or holding one stone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Stone>>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pt` lies on the board.
    pub fn contains(&self, pt: Point) -> bool {
        pt.row < self.size && pt.col < self.size
    }

    fn idx(&self, pt: Point) -> usize {
        assert!(
            self.contains(pt),
            "point ({}, {}) is outside the {}x{} board",
            pt.row,
            pt.col,
            self.size,
            self.size
        );
        pt.row * self.size + pt.col
    }

    /// The cell at `pt`.
    ///
    /// # Panics
    /// Panics if `pt` is off the board.
    pub fn get(&self, pt: Point) -> Option<Stone> {
        self.cells[self.idx(pt)]
    }

    pub(crate) fn set(&mut self, pt: Point, cell: Option<Stone>) {
        let i = self.idx(pt);
        self.cells[i] = cell;
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Iterate over every point, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Point::new(row, col)))
    }

    /// Iterate over the empty points, row by row.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(move |&pt| self.get(pt).is_none())
    }

    /// Orthogonal neighbors of `pt` that are on the board, in the order
    /// up, down, left, right.
    pub fn adjacent(&self, pt: Point) -> impl Iterator<Item = Point> + '_ {
        let size = self.size;
        DELTA.iter().filter_map(move |&(dr, dc)| {
            let r = pt.row.checked_add_signed(dr)?;
            let c = pt.col.checked_add_signed(dc)?;
            (r < size && c < size).then(|| Point::new(r, c))
        })
    }

    /// Collect the group of `color` stones connected to `start`.
    ///
    /// Returns an empty group if `start` does not hold `color`.
    pub fn find_group(&self, start: Point, color: Stone) -> Group {
        let mut group = Vec::new();
        if self.get(start) != Some(color) {
            return group;
        }

        let mut stack = vec![start];
        let mut visited = vec![false; self.cells.len()];
        visited[self.idx(start)] = true;

        while let Some(pt) = stack.pop() {
            group.push(pt);
            for n in self.adjacent(pt) {
                let ni = self.idx(n);
                if !visited[ni] && self.cells[ni] == Some(color) {
                    visited[ni] = true;
                    stack.push(n);
                }
            }
        }
        group
    }

    /// Count the distinct empty points adjacent to any stone of `group`.
    pub fn count_liberties(&self, group: &[Point]) -> usize {
        let mut liberty_visited = vec![false; self.cells.len()];
        let mut libs = 0;
        for &pt in group {
            for n in self.adjacent(pt) {
                let ni = self.idx(n);
                if self.cells[ni].is_none() && !liberty_visited[ni] {
                    liberty_visited[ni] = true;
                    libs += 1;
                }
            }
        }
        libs
    }

    /// Partition every stone on the board into its group.
    pub fn groups(&self) -> Vec<(Stone, Group)> {
        let mut seen = vec![false; self.cells.len()];
        let mut out = Vec::new();
        for pt in self.points() {
            let i = self.idx(pt);
            if seen[i] {
                continue;
            }
            if let Some(color) = self.cells[i] {
                let group = self.find_group(pt, color);
                for &member in &group {
                    seen[self.idx(member)] = true;
                }
                out.push((color, group));
            }
        }
        out
    }

    /// Number of stones of `color` on the board.
    pub fn count(&self, color: Stone) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// Copy of the grid as `size` rows of `size` cells.
    pub fn rows(&self) -> Vec<Vec<Option<Stone>>> {
        self.cells.chunks(self.size).map(<[_]>::to_vec).collect()
    }
}

impl fmt::Display for Board {
    /// Renders the grid with GTP-style labels: columns A.. (no I) along the
    /// top, row numbers counting up from the bottom edge.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labelled = self.size <= COLUMN_LETTERS.len();
        if labelled {
            write!(f, "   ")?;
            for &letter in &COLUMN_LETTERS[..self.size] {
                write!(f, "{} ", letter as char)?;
            }
            writeln!(f)?;
        }
        for row in 0..self.size {
            if labelled {
                write!(f, "{:>2} ", self.size - row)?;
            }
            for col in 0..self.size {
                let ch = match self.get(Point::new(row, col)) {
                    Some(Stone::Black) => STONE_BLACK,
                    Some(Stone::White) => STONE_WHITE,
                    None => EMPTY,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
