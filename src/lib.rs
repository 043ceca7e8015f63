//! Goban: a rules engine for the game of Go.
//!
//! This crate keeps the authoritative state of one Go game: stone placement,
//! capture of groups left without liberties, refusal of suicide, and strict
//! alternation of turns. Scoring, ko, handicap and move history are not
//! part of it.
//!
//! ## Modules
//!
//! - [`constants`] - Board size limits and text rendering symbols
//! - [`board`] - Grid representation, adjacency, group and liberty search
//! - [`game`] - Move legality, captures and turn order
//! - [`coord`] - Text coordinates such as `D4`
//! - [`gtp`] - Go Text Protocol front end
//! - [`playout`] - Random legal move sequences
//!
//! ## Example
//!
//! ```
//! use goban::board::{Point, Stone};
//! use goban::game::Game;
//!
//! // Create a new 19x19 game
//! let mut game = Game::default();
//!
//! // Black plays the corner
//! assert!(game.play(Point::new(0, 0)));
//! assert_eq!(game.board().get(Point::new(0, 0)), Some(Stone::Black));
//! assert_eq!(game.current_player(), Stone::White);
//!
//! // The point is taken now
//! assert!(!game.play((0, 0)));
//! ```

pub mod board;
pub mod constants;
pub mod coord;
pub mod game;
pub mod gtp;
pub mod playout;
