//! Rules engine: move legality, captures and turn order.
//!
//! A [`Game`] owns one [`Board`] and the color to move. [`Game::try_play`]
//! is the only state transition:
//! - occupied points are rejected without touching the board
//! - opponent groups left without liberties are captured first
//! - only then is the placed stone checked for suicide, so a move that
//!   captures is never suicide
//! - the turn passes to the other color only when the move stands
//!
//! There is no ko rule and no pass.

use std::fmt;

use tracing::debug;

use crate::board::{Board, Point, Stone};
use crate::constants::DEFAULT_SIZE;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Point is not empty
    Occupied,
    /// Move would leave its group without liberties and captures nothing
    Suicide,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Occupied => write!(f, "illegal move: occupied"),
            MoveError::Suicide => write!(f, "illegal move: suicide"),
        }
    }
}

impl std::error::Error for MoveError {}

/// A game in progress: the board, the color to move and capture tallies.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_play: Stone,
    /// Stones captured by Black and by White, in that order.
    captures: [usize; 2],
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl Game {
    /// Start a game on an empty `size`x`size` board with Black to move.
    ///
    /// # Panics
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            to_play: Stone::Black,
            captures: [0; 2],
        }
    }

    /// Clear the board, zero the tallies and give the move back to Black.
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_play = Stone::Black;
        self.captures = [0; 2];
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the grid, `size` rows of `size` cells.
    pub fn snapshot(&self) -> Vec<Vec<Option<Stone>>> {
        self.board.rows()
    }

    pub fn current_player(&self) -> Stone {
        self.to_play
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Total number of stones `color` has captured.
    pub fn captures(&self, color: Stone) -> usize {
        self.captures[tally_index(color)]
    }

    /// Play a stone for the current player at `pt`.
    ///
    /// Returns `true` if the move stood.
    pub fn play(&mut self, pt: impl Into<Point>) -> bool {
        self.try_play(pt).is_ok()
    }

    /// Play a stone for the current player at `pt`.
    ///
    /// On success returns the number of opponent stones captured. On error
    /// the board and the color to move are unchanged.
    ///
    /// # Panics
    /// Panics if `pt` is off the board.
    pub fn try_play(&mut self, pt: impl Into<Point>) -> Result<usize, MoveError> {
        let pt = pt.into();
        let color = self.to_play;

        if self.board.get(pt).is_some() {
            debug!(row = pt.row, col = pt.col, %color, "rejected: occupied");
            return Err(MoveError::Occupied);
        }

        self.board.set(pt, Some(color));
        let captured = self.remove_dead_neighbors(pt, color.opponent());

        if captured == 0 {
            let group = self.board.find_group(pt, color);
            if self.board.count_liberties(&group) == 0 {
                self.board.set(pt, None); // undo suicidal move
                debug!(row = pt.row, col = pt.col, %color, "rejected: suicide");
                return Err(MoveError::Suicide);
            }
        }

        self.captures[tally_index(color)] += captured;
        self.to_play = color.opponent();
        Ok(captured)
    }

    /// Remove every `opponent` group next to `pt` that has no liberties left.
    /// Returns the number of stones removed.
    fn remove_dead_neighbors(&mut self, pt: Point, opponent: Stone) -> usize {
        let mut captured = 0;
        let neighbors: Vec<Point> = self.board.adjacent(pt).collect();
        for n in neighbors {
            // A group reachable from two sides is already gone on the second visit.
            if self.board.get(n) != Some(opponent) {
                continue;
            }
            let group = self.board.find_group(n, opponent);
            if self.board.count_liberties(&group) == 0 {
                for &stone in &group {
                    self.board.set(stone, None);
                }
                debug!(
                    row = pt.row,
                    col = pt.col,
                    stones = group.len(),
                    "captured group"
                );
                captured += group.len();
            }
        }
        captured
    }
}

fn tally_index(color: Stone) -> usize {
    match color {
        Stone::Black => 0,
        Stone::White => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::default();
        assert_eq!(game.size(), 19);
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.captures(Stone::Black), 0);
        assert_eq!(game.board().empty_points().count(), 361);
    }

    #[test]
    #[should_panic]
    fn test_zero_size_panics() {
        Game::new(0);
    }

    #[test]
    fn test_play_alternates() {
        let mut game = Game::new(9);
        assert_eq!(game.try_play((4, 4)), Ok(0));
        assert_eq!(game.current_player(), Stone::White);
        assert!(game.play((3, 3)));
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.board().get(Point::new(4, 4)), Some(Stone::Black));
        assert_eq!(game.board().get(Point::new(3, 3)), Some(Stone::White));
    }

    #[test]
    fn test_occupied_rejected() {
        let mut game = Game::new(9);
        game.play((4, 4));
        let before = game.snapshot();
        assert_eq!(game.try_play((4, 4)), Err(MoveError::Occupied));
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.current_player(), Stone::White);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_off_board_panics() {
        Game::new(9).play((0, 9));
    }

    #[test]
    fn test_corner_suicide() {
        // B (1,0), W (8,8), B (0,1): White at (0,0) has no liberties.
        let mut game = Game::new(9);
        assert!(game.play((1, 0)));
        assert!(game.play((8, 8)));
        assert!(game.play((0, 1)));
        let before = game.snapshot();
        assert_eq!(game.try_play((0, 0)), Err(MoveError::Suicide));
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.current_player(), Stone::White);
    }

    #[test]
    fn test_capture_counts() {
        // White stone at (0,0) captured by Black at (0,1) after (1,0).
        let mut game = Game::new(9);
        assert!(game.play((1, 0)));
        assert!(game.play((0, 0)));
        assert_eq!(game.try_play((0, 1)), Ok(1));
        assert_eq!(game.board().get(Point::new(0, 0)), None);
        assert_eq!(game.captures(Stone::Black), 1);
        assert_eq!(game.captures(Stone::White), 0);
    }

    #[test]
    fn test_capture_beats_suicide() {
        // Black fills the last liberty of a White stone while itself having
        // none: the capture gives it one back.
        //
        //   . X O .
        //   X O . O
        //   . X O .
        let mut game = Game::new(5);
        for (b, w) in [((0, 1), (0, 2)), ((1, 0), (1, 1)), ((2, 1), (2, 2))] {
            assert!(game.play(b));
            assert!(game.play(w));
        }
        assert!(game.play((4, 4)));
        assert!(game.play((1, 3)));
        assert_eq!(game.try_play((1, 2)), Ok(1));
        assert_eq!(game.board().get(Point::new(1, 1)), None);
        assert_eq!(game.board().get(Point::new(1, 2)), Some(Stone::Black));
        assert_eq!(game.current_player(), Stone::White);
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new(9);
        game.play((1, 0));
        game.play((0, 0));
        game.play((0, 1));
        game.reset();
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.captures(Stone::Black), 0);
        assert!(game.snapshot().iter().flatten().all(Option::is_none));
        assert_eq!(game.size(), 9);
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::Occupied.to_string(), "illegal move: occupied");
        assert_eq!(MoveError::Suicide.to_string(), "illegal move: suicide");
    }
}
