//! Brick grid
//!
//! Bricks are stored column-major (all rows of column 0, then column 1, ...).
//! That order is also the hit-test order, so ties always resolve the same way.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A destructible brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner, assigned by `BrickGrid::layout`
    pub pos: Vec2,
    /// Hits the brick started with (1-3)
    pub strength: u8,
    /// Hits still needed; the brick is gone at 0
    pub remaining_hits: u8,
}

impl Brick {
    pub fn new(strength: u8) -> Self {
        Self {
            pos: Vec2::ZERO,
            strength,
            remaining_hits: strength,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.remaining_hits > 0
    }
}

/// Grid coordinates of a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrickRef {
    pub column: usize,
    pub row: usize,
}

/// Geometry used to place bricks on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub offset_left: f32,
    pub offset_top: f32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub padding_x: f32,
    pub padding_y: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            offset_left: BRICK_OFFSET_LEFT,
            offset_top: BRICK_OFFSET_TOP,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            padding_x: BRICK_PADDING,
            padding_y: BRICK_PADDING,
        }
    }
}

/// 2D arrangement of bricks plus the total hits left to clear it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    columns: usize,
    bricks: Vec<Brick>,
    total_remaining_hits: u32,
    /// Brick size from the last layout pass (hit-test extent)
    brick_size: Vec2,
}

impl BrickGrid {
    /// Build a fresh grid; brick (c, r) gets `strength_pattern[r % len]`
    ///
    /// An empty pattern yields an empty grid (nothing to hit, already cleared).
    pub fn initialize(row_count: usize, column_count: usize, strength_pattern: &[u8]) -> Self {
        let (rows, columns) = if strength_pattern.is_empty() {
            (0, 0)
        } else {
            (row_count, column_count)
        };

        let mut bricks = Vec::with_capacity(rows * columns);
        let mut total_remaining_hits = 0u32;
        for _c in 0..columns {
            for r in 0..rows {
                let strength = strength_pattern[r % strength_pattern.len()];
                bricks.push(Brick::new(strength));
                total_remaining_hits += strength as u32;
            }
        }

        Self {
            rows,
            columns,
            bricks,
            total_remaining_hits,
            brick_size: Vec2::new(crate::consts::BRICK_WIDTH, crate::consts::BRICK_HEIGHT),
        }
    }

    #[inline]
    fn index(&self, at: BrickRef) -> Option<usize> {
        (at.column < self.columns && at.row < self.rows).then(|| at.column * self.rows + at.row)
    }

    #[inline]
    fn brick_ref(&self, index: usize) -> BrickRef {
        BrickRef {
            column: index / self.rows,
            row: index % self.rows,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, at: BrickRef) -> Option<&Brick> {
        self.index(at).map(|i| &self.bricks[i])
    }

    pub fn brick_size(&self) -> Vec2 {
        self.brick_size
    }

    pub fn total_remaining_hits(&self) -> u32 {
        self.total_remaining_hits
    }

    /// All bricks in column-major order with their grid coordinates
    pub fn iter(&self) -> impl Iterator<Item = (BrickRef, &Brick)> {
        self.bricks
            .iter()
            .enumerate()
            .map(|(i, b)| (self.brick_ref(i), b))
    }

    /// Active bricks only, column-major
    pub fn active(&self) -> impl Iterator<Item = (BrickRef, &Brick)> {
        self.iter().filter(|(_, b)| b.is_active())
    }

    /// Place every active brick on a regular grid. Idempotent.
    pub fn layout(&mut self, layout: &GridLayout) {
        self.brick_size = Vec2::new(layout.brick_width, layout.brick_height);
        let rows = self.rows;
        for (i, brick) in self.bricks.iter_mut().enumerate() {
            if !brick.is_active() {
                continue;
            }
            let (c, r) = (i / rows, i % rows);
            brick.pos = Vec2::new(
                c as f32 * (layout.brick_width + layout.padding_x) + layout.offset_left,
                r as f32 * (layout.brick_height + layout.padding_y) + layout.offset_top,
            );
        }
    }

    /// First active brick whose rectangle strictly contains `point`
    ///
    /// Only the ball's center is tested; `_radius` is accepted so callers can
    /// pass the ball as-is, but it does not widen the test.
    pub fn hit_test(&self, point: Vec2, _radius: f32) -> Option<BrickRef> {
        let size = self.brick_size;
        self.bricks
            .iter()
            .position(|b| {
                b.is_active()
                    && point.x > b.pos.x
                    && point.x < b.pos.x + size.x
                    && point.y > b.pos.y
                    && point.y < b.pos.y + size.y
            })
            .map(|i| self.brick_ref(i))
    }

    /// Take one hit off a brick and off the grid total
    ///
    /// Returns the brick's remaining hits, or `None` if the reference is out
    /// of range or the brick is already gone (nothing changes in that case).
    pub fn apply_hit(&mut self, at: BrickRef) -> Option<u8> {
        let i = self.index(at)?;
        let brick = &mut self.bricks[i];
        if !brick.is_active() {
            return None;
        }
        brick.remaining_hits -= 1;
        self.total_remaining_hits -= 1;
        Some(brick.remaining_hits)
    }

    /// Win condition
    pub fn is_cleared(&self) -> bool {
        self.total_remaining_hits == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Difficulty;
    use proptest::prelude::*;

    fn laid_out(rows: usize, cols: usize, pattern: &[u8]) -> BrickGrid {
        let mut grid = BrickGrid::initialize(rows, cols, pattern);
        grid.layout(&GridLayout::default());
        grid
    }

    #[test]
    fn test_initialize_totals_match_presets() {
        for d in Difficulty::ALL {
            let p = d.preset();
            let grid = BrickGrid::initialize(p.row_count, p.column_count, p.strength_pattern);
            let per_column: u32 = (0..p.row_count)
                .map(|r| p.strength_pattern[r % p.strength_pattern.len()] as u32)
                .sum();
            assert_eq!(grid.total_remaining_hits(), per_column * p.column_count as u32);
            assert_eq!(grid.iter().count(), p.row_count * p.column_count);
        }
    }

    #[test]
    fn test_column_major_order() {
        let grid = BrickGrid::initialize(2, 3, &[1, 2]);
        let refs: Vec<(usize, usize)> = grid.iter().map(|(at, _)| (at.column, at.row)).collect();
        assert_eq!(refs, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
        let strengths: Vec<u8> = grid.iter().map(|(_, b)| b.strength).collect();
        assert_eq!(strengths, vec![1, 2, 1, 2, 1, 2]);
    }

    #[test]
    fn test_layout_positions() {
        let grid = laid_out(3, 7, &[1]);
        let b = grid.get(BrickRef { column: 2, row: 1 }).unwrap();
        assert_eq!(b.pos, Vec2::new(2.0 * 115.0 + 50.0, 45.0 + 50.0));
        let origin = grid.get(BrickRef { column: 0, row: 0 }).unwrap();
        assert_eq!(origin.pos, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_hit_test_is_strict() {
        let grid = laid_out(1, 1, &[1]);
        // Inside
        assert_eq!(grid.hit_test(Vec2::new(100.0, 60.0), 12.0), Some(BrickRef { column: 0, row: 0 }));
        // On the edge does not count
        assert_eq!(grid.hit_test(Vec2::new(50.0, 60.0), 12.0), None);
        assert_eq!(grid.hit_test(Vec2::new(150.0, 60.0), 12.0), None);
        assert_eq!(grid.hit_test(Vec2::new(100.0, 80.0), 12.0), None);
        // Overlapping by radius but center outside: no hit
        assert_eq!(grid.hit_test(Vec2::new(100.0, 85.0), 12.0), None);
    }

    #[test]
    fn test_hit_test_first_match_column_major() {
        // Hand-place two bricks on the same spot: column 0 must win
        let mut grid = laid_out(1, 2, &[1]);
        grid.bricks[1].pos = grid.bricks[0].pos;
        assert_eq!(grid.hit_test(Vec2::new(100.0, 60.0), 0.0), Some(BrickRef { column: 0, row: 0 }));
    }

    #[test]
    fn test_apply_hit_deactivates() {
        let mut grid = laid_out(2, 1, &[2, 1]);
        let top = BrickRef { column: 0, row: 0 };
        assert_eq!(grid.total_remaining_hits(), 3);

        assert_eq!(grid.apply_hit(top), Some(1));
        assert!(grid.get(top).unwrap().is_active());
        assert_eq!(grid.apply_hit(top), Some(0));
        assert!(!grid.get(top).unwrap().is_active());
        assert_eq!(grid.total_remaining_hits(), 1);

        // Dead bricks are never hit again
        assert_eq!(grid.apply_hit(top), None);
        assert_eq!(grid.total_remaining_hits(), 1);
        assert_eq!(grid.hit_test(Vec2::new(100.0, 60.0), 0.0), None);

        assert_eq!(grid.apply_hit(BrickRef { column: 5, row: 0 }), None);
    }

    #[test]
    fn test_cleared_exactly_at_zero() {
        let mut grid = laid_out(3, 7, &[1]);
        let refs: Vec<BrickRef> = grid.iter().map(|(at, _)| at).collect();
        assert_eq!(refs.len(), 21);
        for (n, at) in refs.iter().enumerate() {
            assert!(!grid.is_cleared(), "cleared early after {} hits", n);
            grid.apply_hit(*at);
        }
        assert!(grid.is_cleared());
        assert_eq!(grid.active().count(), 0);
    }

    #[test]
    fn test_empty_pattern_is_empty_grid() {
        let grid = BrickGrid::initialize(4, 4, &[]);
        assert_eq!(grid.iter().count(), 0);
        assert!(grid.is_cleared());
    }

    proptest! {
        #[test]
        fn prop_hits_drain_total_by_one(
            rows in 1usize..7,
            cols in 1usize..11,
            pattern in prop::collection::vec(1u8..=3, 1..4),
            picks in prop::collection::vec((0usize..11, 0usize..7), 0..200),
        ) {
            let mut grid = BrickGrid::initialize(rows, cols, &pattern);
            let strength_sum: u32 = grid.iter().map(|(_, b)| b.strength as u32).sum();
            prop_assert_eq!(grid.total_remaining_hits(), strength_sum);

            for (c, r) in picks {
                let before = grid.total_remaining_hits();
                let hit = grid.apply_hit(BrickRef { column: c, row: r });
                let after = grid.total_remaining_hits();
                if hit.is_some() {
                    prop_assert_eq!(after, before - 1);
                } else {
                    prop_assert_eq!(after, before);
                }
                let sum: u32 = grid.iter().map(|(_, b)| b.remaining_hits as u32).sum();
                prop_assert_eq!(after, sum);
                prop_assert_eq!(grid.is_cleared(), after == 0);
                for (_, b) in grid.iter() {
                    prop_assert!(b.remaining_hits <= b.strength);
                }
            }
        }

        #[test]
        fn prop_layout_idempotent(
            rows in 1usize..7,
            cols in 1usize..11,
            offset in 0.0f32..100.0,
            padding in 0.0f32..30.0,
        ) {
            let layout = GridLayout {
                offset_left: offset,
                offset_top: offset,
                padding_x: padding,
                padding_y: padding,
                ..GridLayout::default()
            };
            let mut grid = BrickGrid::initialize(rows, cols, &[1, 2]);
            grid.layout(&layout);
            let first: Vec<Vec2> = grid.iter().map(|(_, b)| b.pos).collect();
            grid.layout(&layout);
            let second: Vec<Vec2> = grid.iter().map(|(_, b)| b.pos).collect();
            prop_assert_eq!(first, second);
        }
    }
}
