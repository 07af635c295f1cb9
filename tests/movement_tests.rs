//! Slide/merge traversal tests.
//!
//! These exercise the move engine one pass at a time on hand-built
//! boards: boundary travel, merges, stacks, merge-lock behavior, and the
//! chain tie-break that favors the direction of travel.

use rust_2048::{slide, Direction, MoveOutcome, Position, Tile, TileId, TileStore};

fn store_of(tiles: &[(u32, u32, usize, usize)]) -> TileStore {
    let mut store = TileStore::new();
    for &(id, value, row, col) in tiles {
        store.insert(Tile::new(TileId::new(id), value, Position::new(row, col)));
    }
    store
}

fn pos_of(store: &TileStore, id: u32) -> Position {
    store.get(TileId(id)).unwrap().pos
}

/// One tile per row on the diagonal; every direction should pack them
/// against the matching edge.
fn diagonal() -> TileStore {
    store_of(&[(1, 2, 0, 0), (2, 2, 1, 1), (3, 2, 2, 2), (4, 2, 3, 3)])
}

#[test]
fn moves_all_tiles_to_the_right_bound() {
    let mut tiles = diagonal();
    let outcome = slide(Direction::Right, &mut tiles);

    assert!(outcome.changed);
    assert_eq!(pos_of(&tiles, 1), Position::new(0, 3));
    assert_eq!(pos_of(&tiles, 2), Position::new(1, 3));
    assert_eq!(pos_of(&tiles, 3), Position::new(2, 3));
    assert_eq!(pos_of(&tiles, 4), Position::new(3, 3));
}

#[test]
fn moves_all_tiles_to_the_left_bound() {
    let mut tiles = diagonal();
    slide(Direction::Left, &mut tiles);

    assert_eq!(pos_of(&tiles, 1), Position::new(0, 0));
    assert_eq!(pos_of(&tiles, 2), Position::new(1, 0));
    assert_eq!(pos_of(&tiles, 3), Position::new(2, 0));
    assert_eq!(pos_of(&tiles, 4), Position::new(3, 0));
}

#[test]
fn moves_all_tiles_to_the_bottom_bound() {
    let mut tiles = diagonal();
    slide(Direction::Down, &mut tiles);

    assert_eq!(pos_of(&tiles, 1), Position::new(3, 0));
    assert_eq!(pos_of(&tiles, 2), Position::new(3, 1));
    assert_eq!(pos_of(&tiles, 3), Position::new(3, 2));
    assert_eq!(pos_of(&tiles, 4), Position::new(3, 3));
}

#[test]
fn moves_all_tiles_to_the_top_bound() {
    let mut tiles = diagonal();
    slide(Direction::Up, &mut tiles);

    assert_eq!(pos_of(&tiles, 1), Position::new(0, 0));
    assert_eq!(pos_of(&tiles, 2), Position::new(0, 1));
    assert_eq!(pos_of(&tiles, 3), Position::new(0, 2));
    assert_eq!(pos_of(&tiles, 4), Position::new(0, 3));
}

#[test]
fn simple_merge_right() {
    let mut tiles = store_of(&[(1, 2, 0, 3), (2, 2, 0, 2)]);
    let outcome = slide(Direction::Right, &mut tiles);

    assert_eq!(
        outcome,
        MoveOutcome {
            score_delta: 4,
            changed: true
        }
    );

    let absorber = tiles.get(TileId(1)).unwrap();
    assert_eq!(absorber.value, 4);
    assert_eq!(absorber.pos, Position::new(0, 3));
    assert!(absorber.merged);

    // The absorbed tile parks on the absorber's cell until filtered out.
    let source = tiles.get(TileId(2)).unwrap();
    assert_eq!(source.value, 2);
    assert_eq!(source.pos, Position::new(0, 3));
    assert!(source.removed);
}

#[test]
fn simple_merge_left() {
    let mut tiles = store_of(&[(1, 2, 0, 1), (2, 2, 0, 0)]);
    let outcome = slide(Direction::Left, &mut tiles);

    assert_eq!(outcome.score_delta, 4);

    let absorber = tiles.get(TileId(2)).unwrap();
    assert_eq!(absorber.value, 4);
    assert_eq!(absorber.pos, Position::new(0, 0));
    assert!(absorber.merged);

    let source = tiles.get(TileId(1)).unwrap();
    assert_eq!(source.pos, Position::new(0, 0));
    assert!(source.removed);
}

#[test]
fn simple_merge_up() {
    let mut tiles = store_of(&[(1, 2, 0, 1), (2, 2, 1, 1)]);
    let outcome = slide(Direction::Up, &mut tiles);

    assert_eq!(outcome.score_delta, 4);

    let absorber = tiles.get(TileId(1)).unwrap();
    assert_eq!(absorber.value, 4);
    assert_eq!(absorber.pos, Position::new(0, 1));
    assert!(absorber.merged);

    let source = tiles.get(TileId(2)).unwrap();
    assert_eq!(source.pos, Position::new(0, 1));
    assert!(source.removed);
}

#[test]
fn simple_merge_down() {
    let mut tiles = store_of(&[(1, 2, 2, 1), (2, 2, 3, 1)]);
    let outcome = slide(Direction::Down, &mut tiles);

    assert_eq!(outcome.score_delta, 4);

    let absorber = tiles.get(TileId(2)).unwrap();
    assert_eq!(absorber.value, 4);
    assert_eq!(absorber.pos, Position::new(3, 1));
    assert!(absorber.merged);

    let source = tiles.get(TileId(1)).unwrap();
    assert_eq!(source.pos, Position::new(3, 1));
    assert!(source.removed);
}

#[test]
fn unequal_tiles_stack_moving_right() {
    let mut tiles = store_of(&[(1, 4, 0, 3), (2, 2, 0, 0)]);
    let outcome = slide(Direction::Right, &mut tiles);

    assert_eq!(outcome.score_delta, 0);
    assert!(outcome.changed);

    let stacked = tiles.get(TileId(2)).unwrap();
    assert_eq!(stacked.pos, Position::new(0, 2));
    assert!(!stacked.merged);
    assert!(!stacked.removed);
}

#[test]
fn unequal_tiles_stack_moving_left() {
    let mut tiles = store_of(&[(1, 2, 0, 3), (2, 4, 0, 0)]);
    slide(Direction::Left, &mut tiles);

    let stacked = tiles.get(TileId(1)).unwrap();
    assert_eq!(stacked.pos, Position::new(0, 1));
    assert!(!stacked.merged);
    assert!(!stacked.removed);
}

#[test]
fn unequal_tiles_stack_moving_up() {
    let mut tiles = store_of(&[(1, 4, 0, 0), (2, 2, 3, 0)]);
    slide(Direction::Up, &mut tiles);

    let stacked = tiles.get(TileId(2)).unwrap();
    assert_eq!(stacked.pos, Position::new(1, 0));
    assert!(!stacked.merged);
    assert!(!stacked.removed);
}

#[test]
fn unequal_tiles_stack_moving_down() {
    let mut tiles = store_of(&[(1, 4, 0, 0), (2, 2, 3, 0)]);
    slide(Direction::Down, &mut tiles);

    let stacked = tiles.get(TileId(1)).unwrap();
    assert_eq!(stacked.pos, Position::new(2, 0));
    assert!(!stacked.merged);
    assert!(!stacked.removed);
}

#[test]
fn merges_after_target_travels_right() {
    // The right tile reaches the edge first; the left one catches up and
    // merges into it there.
    let mut tiles = store_of(&[(1, 2, 0, 2), (2, 2, 0, 0)]);
    let outcome = slide(Direction::Right, &mut tiles);

    assert_eq!(outcome.score_delta, 4);
    assert_eq!(pos_of(&tiles, 1), Position::new(0, 3));
    assert_eq!(pos_of(&tiles, 2), Position::new(0, 3));
    assert!(tiles.get(TileId(1)).unwrap().merged);
    assert!(tiles.get(TileId(2)).unwrap().removed);
}

#[test]
fn merges_after_target_travels_left() {
    let mut tiles = store_of(&[(1, 2, 0, 3), (2, 2, 0, 1)]);
    slide(Direction::Left, &mut tiles);

    assert_eq!(pos_of(&tiles, 2), Position::new(0, 0));
    assert_eq!(pos_of(&tiles, 1), Position::new(0, 0));
    assert!(tiles.get(TileId(2)).unwrap().merged);
    assert!(tiles.get(TileId(1)).unwrap().removed);
}

#[test]
fn merges_after_target_travels_down() {
    let mut tiles = store_of(&[(1, 2, 2, 0), (2, 2, 0, 0)]);
    slide(Direction::Down, &mut tiles);

    assert_eq!(pos_of(&tiles, 1), Position::new(3, 0));
    assert_eq!(pos_of(&tiles, 2), Position::new(3, 0));
    assert!(tiles.get(TileId(1)).unwrap().merged);
    assert!(tiles.get(TileId(2)).unwrap().removed);
}

#[test]
fn merges_after_target_travels_up() {
    let mut tiles = store_of(&[(1, 2, 3, 0), (2, 2, 1, 0)]);
    slide(Direction::Up, &mut tiles);

    assert_eq!(pos_of(&tiles, 2), Position::new(0, 0));
    assert_eq!(pos_of(&tiles, 1), Position::new(0, 0));
    assert!(tiles.get(TileId(2)).unwrap().merged);
    assert!(tiles.get(TileId(1)).unwrap().removed);
}

#[test]
fn merged_tile_cannot_absorb_again() {
    // [4 _ 2 2] right: the pair merges into a fresh 4 at the edge; the
    // original 4 must stack beside it, not chain into an 8.
    let mut tiles = store_of(&[(1, 4, 0, 0), (2, 2, 0, 2), (3, 2, 0, 3)]);
    let outcome = slide(Direction::Right, &mut tiles);

    assert_eq!(outcome.score_delta, 4);

    let fresh = tiles.get(TileId(3)).unwrap();
    assert_eq!(fresh.value, 4);
    assert_eq!(fresh.pos, Position::new(0, 3));
    assert!(fresh.merged);

    assert!(tiles.get(TileId(2)).unwrap().removed);
    assert_eq!(pos_of(&tiles, 2), Position::new(0, 3));

    let blocked = tiles.get(TileId(1)).unwrap();
    assert_eq!(blocked.value, 4);
    assert_eq!(blocked.pos, Position::new(0, 2));
    assert!(!blocked.merged);
    assert!(!blocked.removed);
}

#[test]
fn merges_behind_a_stacked_obstruction() {
    // Column [2 2 4 _] down: the 4 slides to the bottom, the pair merges
    // behind it.
    let mut tiles = store_of(&[(1, 2, 0, 0), (2, 2, 1, 0), (3, 4, 2, 0)]);
    let outcome = slide(Direction::Down, &mut tiles);

    assert_eq!(outcome.score_delta, 4);

    assert_eq!(pos_of(&tiles, 3), Position::new(3, 0));
    assert!(!tiles.get(TileId(3)).unwrap().merged);

    let absorber = tiles.get(TileId(2)).unwrap();
    assert_eq!(absorber.value, 4);
    assert_eq!(absorber.pos, Position::new(2, 0));
    assert!(absorber.merged);

    assert!(tiles.get(TileId(1)).unwrap().removed);
    assert_eq!(pos_of(&tiles, 1), Position::new(2, 0));
}

#[test]
fn packed_column_of_distinct_values_does_not_move() {
    let mut tiles = store_of(&[(1, 2, 0, 0), (2, 4, 1, 0), (3, 8, 2, 0), (4, 16, 3, 0)]);
    let before = tiles.clone();

    let outcome = slide(Direction::Up, &mut tiles);

    assert_eq!(
        outcome,
        MoveOutcome {
            score_delta: 0,
            changed: false
        }
    );
    assert_eq!(tiles, before);
}

#[test]
fn chain_merge_favours_the_direction_of_travel() {
    // Column [2 2 2 4] down: the two 2s nearest the bottom merge; the
    // topmost 2 only follows.
    let mut tiles = store_of(&[(1, 2, 0, 0), (2, 2, 1, 0), (3, 2, 2, 0), (4, 4, 3, 0)]);
    let outcome = slide(Direction::Down, &mut tiles);

    assert_eq!(outcome.score_delta, 4);

    assert_eq!(pos_of(&tiles, 4), Position::new(3, 0));

    let absorber = tiles.get(TileId(3)).unwrap();
    assert_eq!(absorber.value, 4);
    assert_eq!(absorber.pos, Position::new(2, 0));
    assert!(absorber.merged);

    assert!(tiles.get(TileId(2)).unwrap().removed);
    assert_eq!(pos_of(&tiles, 2), Position::new(2, 0));

    let follower = tiles.get(TileId(1)).unwrap();
    assert_eq!(follower.value, 2);
    assert_eq!(follower.pos, Position::new(1, 0));
    assert!(!follower.merged);
}

#[test]
fn two_pairs_merge_in_one_line() {
    // [2 2 2 2] right becomes [_ _ 4 4]: each half merges once.
    let mut tiles = store_of(&[(1, 2, 0, 0), (2, 2, 0, 1), (3, 2, 0, 2), (4, 2, 0, 3)]);
    let outcome = slide(Direction::Right, &mut tiles);

    assert_eq!(outcome.score_delta, 8);

    let right = tiles.get(TileId(4)).unwrap();
    assert_eq!((right.value, right.pos), (4, Position::new(0, 3)));
    assert!(right.merged);
    assert!(tiles.get(TileId(3)).unwrap().removed);
    assert_eq!(pos_of(&tiles, 3), Position::new(0, 3));

    let left = tiles.get(TileId(2)).unwrap();
    assert_eq!((left.value, left.pos), (4, Position::new(0, 2)));
    assert!(left.merged);
    assert!(tiles.get(TileId(1)).unwrap().removed);
    assert_eq!(pos_of(&tiles, 1), Position::new(0, 2));
}

#[test]
fn single_tile_saturates_to_every_edge() {
    for row in 0..4 {
        for col in 0..4 {
            for direction in Direction::all() {
                let mut tiles = store_of(&[(1, 2, row, col)]);
                slide(direction, &mut tiles);

                let expected = match direction {
                    Direction::Up => Position::new(0, col),
                    Direction::Down => Position::new(3, col),
                    Direction::Left => Position::new(row, 0),
                    Direction::Right => Position::new(row, 3),
                };
                assert_eq!(
                    pos_of(&tiles, 1),
                    expected,
                    "tile at ({row}, {col}) sliding {direction}"
                );
            }
        }
    }
}

#[test]
fn no_op_move_leaves_the_store_untouched() {
    // Everything packed against the left edge, no vertical or horizontal
    // equal neighbors among the packed cells.
    let mut tiles = store_of(&[(1, 2, 0, 0), (2, 4, 1, 0), (3, 2, 2, 0), (4, 4, 3, 0)]);
    let before = tiles.clone();

    let outcome = slide(Direction::Left, &mut tiles);

    assert!(!outcome.changed);
    assert_eq!(outcome.score_delta, 0);
    assert_eq!(tiles, before);
}

#[test]
fn merge_conserves_total_value() {
    let mut tiles = store_of(&[(1, 2, 0, 0), (2, 2, 0, 1), (3, 4, 1, 0), (4, 4, 1, 3)]);
    let before: u32 = tiles.live().map(|t| t.value).sum();

    slide(Direction::Right, &mut tiles);

    let after: u32 = tiles.live().map(|t| t.value).sum();
    assert_eq!(before, after);
}
