//! Constants for board dimensions and the text front end.
//!
//! The board size is chosen at runtime (see [`crate::game::Game::new`]).
//! These values only bound what the text coordinate system and the GTP
//! front end accept.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN). Standard Go sizes are 9, 13, or 19.
pub const DEFAULT_SIZE: usize = 19;

/// Largest board addressable with GTP vertices (letters A-Z without I).
pub const MAX_SIZE: usize = 25;

/// Column letters used by text coordinates. 'I' is skipped by Go convention.
pub const COLUMN_LETTERS: &[u8; MAX_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Orthogonal neighbor offsets as (row, col) deltas.
/// Order: up, down, left, right
pub const DELTA: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// =============================================================================
// Text Rendering
// =============================================================================

/// Black stone.
pub const STONE_BLACK: char = 'X';

/// White stone.
pub const STONE_WHITE: char = 'O';

/// Empty point.
pub const EMPTY: char = '.';

// =============================================================================
// Engine Identity
// =============================================================================

/// Name reported to GTP clients.
pub const ENGINE_NAME: &str = "goban";

/// GTP protocol version implemented.
pub const GTP_PROTOCOL_VERSION: &str = "2";
