//! Spawn placement: new tiles on empty cells.

use crate::core::grid::Position;
use crate::core::rng::GameRng;
use crate::core::store::TileStore;
use crate::core::tile::{Tile, TileId};

/// The chance for a spawned tile to have a value of 4 instead of 2.
pub const FOUR_TILE_PROBABILITY: f64 = 0.1;

/// Spawn up to `count` tiles on empty cells.
///
/// Each spawn draws a cell uniformly from the remaining empty cells, then
/// a value (4 with `FOUR_TILE_PROBABILITY`, else 2), and inserts a tile
/// with the next monotonic id. Stops early when the board fills up, so a
/// batch never places two tiles on one cell and never fails outright.
///
/// Returns the advanced id counter; thread it into the next spawn so ids
/// never collide across moves.
pub fn spawn_tiles(count: usize, tiles: &mut TileStore, next_id: u32, rng: &mut GameRng) -> u32 {
    let mut empty = tiles.empty_positions();
    let mut next_id = next_id;

    for _ in 0..count {
        if empty.is_empty() {
            break;
        }
        let slot = rng.gen_range_usize(0..empty.len());
        let pos: Position = empty.remove(slot);
        let value = if rng.gen_bool(FOUR_TILE_PROBABILITY) { 4 } else { 2 };

        tiles.insert(Tile::new(TileId::new(next_id), value, pos));
        next_id += 1;
    }

    next_id
}

/// Start a fresh game: an empty store seeded with `initial_spawn` tiles.
///
/// Returns the store and the id counter to thread into the first move.
pub fn new_game(initial_spawn: usize, rng: &mut GameRng) -> (TileStore, u32) {
    let mut tiles = TileStore::new();
    let next_id = spawn_tiles(initial_spawn, &mut tiles, 0, rng);
    (tiles, next_id)
}
