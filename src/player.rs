use std::fmt;

use crate::constants::{GLYPH_A, GLYPH_B};

/// One of the two symbolic tokens. `A` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// The opponent.
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Glyph used when rendering this player's tokens.
    pub fn glyph(self) -> char {
        match self {
            Player::A => GLYPH_A,
            Player::B => GLYPH_B,
        }
    }

    /// Zero-based seat index, handy for indexing per-player arrays.
    pub fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
