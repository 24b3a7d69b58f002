//! Four-in-a-row detection.
//!
//! Every check re-scans the whole board, so the result depends only on the
//! board contents and is the same no matter when it is asked.

use crate::board::{Board, Position};
use crate::constants::{COLS, CONNECT, ROWS};
use crate::player::Player;

/// A scan direction, as a `(row, column)` step from the origin cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Increasing column.
    Horizontal,
    /// Increasing row.
    Vertical,
    /// Increasing row and column.
    DiagonalUpRight,
    /// Increasing row, decreasing column.
    DiagonalUpLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUpRight,
        Direction::DiagonalUpLeft,
    ];

    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalUpRight => (1, 1),
            Direction::DiagonalUpLeft => (1, -1),
        }
    }
}

/// A winning alignment: its owner, its direction and its cells starting
/// from the origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub player: Player,
    pub direction: Direction,
    pub cells: [Position; CONNECT],
}

/// Step `steps` times from `origin` in `direction`, or `None` when that
/// leaves the grid.
fn offset(origin: Position, direction: Direction, steps: usize) -> Option<Position> {
    let (dr, dc) = direction.delta();
    let row = origin.row.checked_add_signed(dr * steps as isize)?;
    let column = origin.column.checked_add_signed(dc * steps as isize)?;
    (row < ROWS && column < COLS).then_some(Position::new(row, column))
}

/// The line of `CONNECT` cells starting at `origin`, if it is in bounds and
/// every cell holds the origin's token.
fn line_from(board: &Board, origin: Position, direction: Direction) -> Option<Line> {
    let player = board.cell_at(origin.row, origin.column).player()?;
    let mut cells = [origin; CONNECT];
    for (step, slot) in cells.iter_mut().enumerate().skip(1) {
        let pos = offset(origin, direction, step)?;
        if board.cell_at(pos.row, pos.column).player() != Some(player) {
            return None;
        }
        *slot = pos;
    }
    Some(Line {
        player,
        direction,
        cells,
    })
}

/// First alignment found, scanning origins bottom row first, left to right,
/// and directions in `Direction::ALL` order.
pub fn find_four(board: &Board) -> Option<Line> {
    for row in 0..ROWS {
        for column in 0..COLS {
            if board.cell_at(row, column).is_empty() {
                continue;
            }
            let origin = Position::new(row, column);
            for direction in Direction::ALL {
                if let Some(line) = line_from(board, origin, direction) {
                    return Some(line);
                }
            }
        }
    }
    None
}

pub fn has_four_in_a_row(board: &Board) -> bool {
    find_four(board).is_some()
}
