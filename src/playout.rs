//! Random playouts (random legal move sequences).
//!
//! Used by the CLI demo and to exercise the rules engine with long,
//! unpredictable games. Moves are uniformly random among legal points; no
//! attempt is made to play well.

use tracing::debug;

use crate::board::Point;
use crate::game::Game;

/// Play up to `max_moves` random legal moves on `game`.
///
/// Stops early when no empty point is legal for the player to move (the
/// engine has no pass). Returns the number of moves played.
pub fn random_playout(game: &mut Game, max_moves: usize, rng: &mut fastrand::Rng) -> usize {
    let mut played = 0;
    while played < max_moves {
        match choose_random_move(game, rng) {
            Some(_) => played += 1,
            None => {
                debug!(played, player = %game.current_player(), "no legal move left");
                break;
            }
        }
    }
    played
}

/// Play one random legal move for the current player.
///
/// Tries the empty points in random order and keeps the first one the engine
/// accepts. Returns that point, or `None` if every empty point was refused.
pub fn choose_random_move(game: &mut Game, rng: &mut fastrand::Rng) -> Option<Point> {
    let mut candidates: Vec<Point> = game.board().empty_points().collect();
    rng.shuffle(&mut candidates);
    candidates.into_iter().find(|&pt| game.play(pt))
}
