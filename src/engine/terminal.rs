//! Terminal-state detection: is there any legal move left?

use crate::core::grid::{Position, GRID_SIZE};
use crate::core::store::{OccupancyMatrix, TileStore};

/// Check whether no legal move remains.
///
/// True only if every cell is occupied and no two orthogonally adjacent
/// tiles share a value. The per-move merge lock is deliberately ignored:
/// by the time this runs the move is complete, so a locked pair still
/// represents a legal next move. Any empty cell, or any equal-valued
/// neighbor pair, means the game continues.
#[must_use]
pub fn is_stuck(matrix: &OccupancyMatrix, tiles: &TileStore) -> bool {
    for pos in Position::all() {
        let Some(id) = matrix.get(pos) else {
            return false;
        };
        let value = tiles.tile_unchecked(id).value;

        // Checking right and down covers every adjacent pair once.
        if pos.col + 1 < GRID_SIZE {
            let right = Position::new(pos.row, pos.col + 1);
            if let Some(neighbor) = matrix.get(right) {
                if tiles.tile_unchecked(neighbor).value == value {
                    return false;
                }
            }
        }
        if pos.row + 1 < GRID_SIZE {
            let down = Position::new(pos.row + 1, pos.col);
            if let Some(neighbor) = matrix.get(down) {
                if tiles.tile_unchecked(neighbor).value == value {
                    return false;
                }
            }
        }
    }
    true
}
