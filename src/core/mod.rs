//! Core engine types: grid geometry, tiles, the tile store, RNG.
//!
//! These are the fundamental building blocks the move/spawn/terminal
//! algorithms operate on. Nothing here decides game rules; that lives in
//! `engine`.

pub mod grid;
pub mod rng;
pub mod store;
pub mod tile;

pub use grid::{Axis, Direction, Position, Traversal, GRID_SIZE};
pub use rng::{GameRng, GameRngState};
pub use store::{OccupancyMatrix, TileStore};
pub use tile::{Tile, TileId};
