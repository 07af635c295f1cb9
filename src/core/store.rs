//! Tile store and the occupancy-matrix projection.
//!
//! The `TileStore` owns every live and merged-away tile, keyed by
//! `TileId`. It is the single source of truth for tile state; the
//! `OccupancyMatrix` is a per-move projection of it, derived at the start
//! of a pass and discarded afterwards.
//!
//! ## Lifecycle
//!
//! A move operates on `filtered()` — a copy with merged-away tiles
//! dropped and every per-move merge lock reset. Spawning inserts fresh
//! tiles; merging marks the absorbed tile `removed` in place.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::{Position, GRID_SIZE};
use super::tile::{Tile, TileId};

/// N×N snapshot mapping each cell to the live tile occupying it.
///
/// `None` is the empty sentinel. Always derived from a `TileStore` via
/// `to_matrix`; never stored across moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccupancyMatrix {
    cells: [[Option<TileId>; GRID_SIZE]; GRID_SIZE],
}

impl OccupancyMatrix {
    /// The tile occupying `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<TileId> {
        self.cells[pos.row][pos.col]
    }

    /// Mark `pos` as occupied by `id`.
    pub fn set(&mut self, pos: Position, id: TileId) {
        self.cells[pos.row][pos.col] = Some(id);
    }

    /// Mark `pos` as empty.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = None;
    }
}

/// The collection of tiles in play, keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TileStore {
    tiles: FxHashMap<TileId, Tile>,
}

impl TileStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tiles, including merged-away ones not yet filtered out.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check whether the store holds no tiles at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Add a tile.
    ///
    /// Panics if the id is already present: ids are never reused while the
    /// store references them.
    pub fn insert(&mut self, tile: Tile) {
        if self.tiles.contains_key(&tile.id) {
            panic!("{} already exists in store", tile.id);
        }
        self.tiles.insert(tile.id, tile);
    }

    /// Get a tile by id.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Get a mutable tile by id.
    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(&id)
    }

    /// Get a tile the caller knows is present, panicking otherwise.
    ///
    /// Engine paths use this for ids read back out of an occupancy
    /// matrix: a matrix id with no backing tile is a violated invariant.
    #[must_use]
    pub fn tile_unchecked(&self, id: TileId) -> &Tile {
        self.tiles
            .get(&id)
            .unwrap_or_else(|| panic!("{} is not in the store", id))
    }

    /// Mutable variant of `tile_unchecked`.
    pub fn tile_unchecked_mut(&mut self, id: TileId) -> &mut Tile {
        self.tiles
            .get_mut(&id)
            .unwrap_or_else(|| panic!("{} is not in the store", id))
    }

    /// Iterate all tiles, including merged-away ones.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Iterate tiles not marked for removal.
    pub fn live(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values().filter(|t| !t.removed)
    }

    /// Copy the store for the next move.
    ///
    /// Drops every tile marked `removed` and resets the per-move merge
    /// lock on the rest. The input is untouched.
    #[must_use]
    pub fn filtered(&self) -> TileStore {
        let tiles = self
            .live()
            .map(|tile| {
                let mut tile = *tile;
                tile.merged = false;
                (tile.id, tile)
            })
            .collect();
        Self { tiles }
    }

    /// Project live tiles onto an occupancy matrix.
    ///
    /// Panics if two live tiles share a position — that can only happen
    /// through an engine defect, never through input.
    #[must_use]
    pub fn to_matrix(&self) -> OccupancyMatrix {
        let mut matrix = OccupancyMatrix::default();
        for tile in self.live() {
            if let Some(other) = matrix.get(tile.pos) {
                panic!("{} and {} both occupy {}", other, tile.id, tile.pos);
            }
            matrix.set(tile.pos, tile.id);
        }
        matrix
    }

    /// Cells with no live tile, in row-major order.
    #[must_use]
    pub fn empty_positions(&self) -> SmallVec<[Position; GRID_SIZE * GRID_SIZE]> {
        let matrix = self.to_matrix();
        Position::all().filter(|&pos| matrix.get(pos).is_none()).collect()
    }
}
