//! Board geometry and game rule constants.
//!
//! The board is always the standard 6x7 grid. Row 0 is the bottom row and
//! row indices grow upward, so a token dropped into an empty column lands
//! at row 0.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of rows on the board.
pub const ROWS: usize = 6;

/// Number of columns on the board.
pub const COLS: usize = 7;

/// Total number of cells; a game can never last longer than this.
pub const CELLS: usize = ROWS * COLS;

// =============================================================================
// Rules
// =============================================================================

/// Number of contiguous tokens needed to win.
pub const CONNECT: usize = 4;

/// Earliest move number on which a win is possible.
///
/// The first player needs `CONNECT` tokens, placed on moves 1, 3, 5 and 7.
pub const MIN_WINNING_MOVE: usize = 2 * CONNECT - 1;

// =============================================================================
// Glyphs
// =============================================================================

/// Glyph for the first player's tokens.
pub const GLYPH_A: char = '●';

/// Glyph for the second player's tokens.
pub const GLYPH_B: char = '○';

/// Glyph for an empty cell.
pub const GLYPH_EMPTY: char = ' ';
