//! Tile identity and the tile record.
//!
//! Every tile gets a `TileId` that is unique for the tile's whole
//! lifetime and never reused while the store references it. Ids come from
//! a monotonic counter the caller threads through spawning.
//!
//! A merged-away tile is not removed immediately: it is marked `removed`
//! and left sitting on the absorbing tile's cell until the next filtered
//! copy drops it. Display layers rely on that overlap to animate the
//! merge.

use serde::{Deserialize, Serialize};

use super::grid::Position;

/// Unique identifier for a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A numbered tile occupying one grid cell.
///
/// `value` is a power of two ≥ 2 and only ever doubles, via exactly one
/// merge per move (`merged` is the per-move lock that prevents a tile from
/// absorbing twice before the lock is reset by the next filtered copy).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Unique entity ID for this tile.
    pub id: TileId,

    /// Current value: 2, 4, 8, ...
    pub value: u32,

    /// Current cell.
    pub pos: Position,

    /// Absorbed another tile this move. Reset on the next filtered copy.
    pub merged: bool,

    /// Merged away; dropped from the store on the next filtered copy.
    pub removed: bool,
}

impl Tile {
    /// Create a fresh tile with both lifecycle flags clear.
    #[must_use]
    pub const fn new(id: TileId, value: u32, pos: Position) -> Self {
        Self {
            id,
            value,
            pos,
            merged: false,
            removed: false,
        }
    }
}
