//! The slide/merge traversal — the move engine.
//!
//! Each move resolves the four lines of its axis independently with a
//! recursive boundary search. The recursion is seeded at the near edge
//! and descends toward the far edge; the base case past the boundary
//! returns the last in-bounds index, and decisions are made while
//! unwinding, so cells closest to the target edge resolve first. That
//! ordering is what the merge tie-break depends on: a chain of equal
//! tiles merges pairwise starting nearest the direction of travel.
//!
//! Each call returns the *resolved boundary* for its caller — the index
//! of the nearest occupied cell toward the far edge, or the far edge
//! itself when the rest of the line is empty. The caller's tile then
//! either slides to that boundary (empty), merges into it (equal value,
//! lock clear), or stacks one short of it.

use smallvec::SmallVec;

use crate::core::grid::{Axis, Direction, Position, GRID_SIZE};
use crate::core::rng::GameRng;
use crate::core::store::{OccupancyMatrix, TileStore};
use crate::core::tile::TileId;

use super::spawn::spawn_tiles;

/// What one slide pass did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Points scored: the sum of every merged tile's doubled value.
    pub score_delta: u32,
    /// Whether any tile ended the pass on a different cell.
    pub changed: bool,
}

/// Result of a complete move: slide plus spawn.
#[derive(Clone, Debug)]
pub struct MoveResult {
    /// The tile collection after the move.
    pub tiles: TileStore,
    /// Points scored by merges in this move.
    pub score_delta: u32,
    /// Whether the move had any effect. Callers should run `is_stuck`
    /// on the new state whenever this is true.
    pub changed: bool,
    /// The advanced id counter, to thread into the next move.
    pub next_id: u32,
}

/// One slide-and-merge pass over the whole board.
///
/// Projects the store onto an occupancy matrix, resolves every line of
/// the move's axis, and reports the score delta plus whether any tile
/// moved. Mutates tile positions, values, and lifecycle flags in place;
/// never spawns.
pub fn slide(direction: Direction, tiles: &mut TileStore) -> MoveOutcome {
    let mut matrix = tiles.to_matrix();
    let before: SmallVec<[(TileId, Position); GRID_SIZE * GRID_SIZE]> =
        tiles.live().map(|t| (t.id, t.pos)).collect();

    let traversal = direction.traversal();
    let mut score_delta = 0;
    for line in 0..GRID_SIZE {
        resolve_cell(
            direction.axis(),
            line,
            traversal.start as isize,
            traversal.step,
            &mut matrix,
            tiles,
            &mut score_delta,
        );
    }

    let changed = before
        .iter()
        .any(|&(id, pos)| tiles.tile_unchecked(id).pos != pos);
    MoveOutcome {
        score_delta,
        changed,
    }
}

/// A complete move: filtered copy → slide → spawn (only if changed).
///
/// The input store is untouched; the returned store is the next state.
/// `next_id` is the monotonic tile-id counter, advanced by any spawns.
pub fn apply_move(
    direction: Direction,
    tiles: &TileStore,
    next_id: u32,
    spawn_count: usize,
    rng: &mut GameRng,
) -> MoveResult {
    let mut next = tiles.filtered();
    let outcome = slide(direction, &mut next);
    let next_id = if outcome.changed {
        spawn_tiles(spawn_count, &mut next, next_id, rng)
    } else {
        next_id
    };
    MoveResult {
        tiles: next,
        score_delta: outcome.score_delta,
        changed: outcome.changed,
        next_id,
    }
}

fn index_in_bounds(idx: isize) -> bool {
    (0..GRID_SIZE as isize).contains(&idx)
}

/// Cell address for offset `idx` along `line` of the given axis.
fn cell(axis: Axis, line: usize, idx: isize) -> Position {
    let idx = idx as usize;
    match axis {
        Axis::Horizontal => Position::new(line, idx),
        Axis::Vertical => Position::new(idx, line),
    }
}

fn move_tile(
    matrix: &mut OccupancyMatrix,
    tiles: &mut TileStore,
    id: TileId,
    from: Position,
    to: Position,
) {
    matrix.clear(from);
    matrix.set(to, id);
    tiles.tile_unchecked_mut(id).pos = to;
}

/// Resolve the line suffix starting at `idx`, returning the resolved
/// boundary for the caller.
fn resolve_cell(
    axis: Axis,
    line: usize,
    idx: isize,
    step: isize,
    matrix: &mut OccupancyMatrix,
    tiles: &mut TileStore,
    score: &mut u32,
) -> isize {
    if !index_in_bounds(idx) {
        // Past the far edge; the last in-bounds cell is one step back.
        return idx - step;
    }

    let boundary = resolve_cell(axis, line, idx + step, step, matrix, tiles, score);
    let here = cell(axis, line, idx);
    let Some(id) = matrix.get(here) else {
        // Empty cell: nothing to move, pass the boundary through.
        return boundary;
    };
    let target = cell(axis, line, boundary);

    match matrix.get(target) {
        // Clear run to the edge: slide all the way.
        None => {
            move_tile(matrix, tiles, id, here, target);
            boundary
        }
        // The far-edge cell resolved against itself: it stays put.
        Some(other) if other == id => idx,
        Some(other) => {
            let value = tiles.tile_unchecked(id).value;
            let (obstruction_value, obstruction_locked) = {
                let t = tiles.tile_unchecked(other);
                (t.value, t.merged)
            };

            if obstruction_value == value && !obstruction_locked {
                // Merge: the tile nearer the edge absorbs; the source is
                // left on the absorber's cell, marked for removal.
                let doubled = value * 2;
                {
                    let absorber = tiles.tile_unchecked_mut(other);
                    absorber.value = doubled;
                    absorber.merged = true;
                }
                let source = tiles.tile_unchecked_mut(id);
                source.pos = target;
                source.removed = true;
                matrix.clear(here);
                *score += doubled;
                boundary
            } else {
                // Stack one short of the obstruction.
                let dest = boundary - step;
                if dest != idx {
                    move_tile(matrix, tiles, id, here, cell(axis, line, dest));
                }
                dest
            }
        }
    }
}
