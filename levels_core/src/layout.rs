//! Path Layout
//!
//! Zigzag positions for levels on the visual path. The standard table holds
//! 20 positions; levels past the end of the table reuse the last position.

use crate::types::Position;
use std::sync::OnceLock;

/// Size of the shared position table
pub const PATH_POOL_SIZE: usize = 20;

/// Horizontal position by `index mod 4`: center, left, right, center
const ZIGZAG_X: [u32; 4] = [50, 30, 70, 50];

/// Vertical offset of the first position
const Y_OFFSET: f64 = 10.0;

/// Compute `total` path positions
pub fn positions(total: usize) -> Vec<Position> {
    if total == 0 {
        return Vec::new();
    }

    let y_step = 100.0 / total as f64;
    (0..total)
        .map(|i| Position {
            x: ZIGZAG_X[i % ZIGZAG_X.len()],
            y: (i as f64 * y_step + Y_OFFSET) as u32,
        })
        .collect()
}

/// Precomputed, read-only position table
#[derive(Debug, Clone)]
pub struct PathLayout {
    table: Vec<Position>,
}

impl PathLayout {
    pub fn new(total: usize) -> Self {
        Self {
            table: positions(total),
        }
    }

    /// The shared 20-entry table
    pub fn standard() -> &'static PathLayout {
        static STANDARD: OnceLock<PathLayout> = OnceLock::new();
        STANDARD.get_or_init(|| PathLayout::new(PATH_POOL_SIZE))
    }

    /// Position of a 1-based level number, clamped to the last table entry
    pub fn position_for(&self, number: u32) -> Position {
        let last = self.table.len().saturating_sub(1);
        let index = (number.saturating_sub(1) as usize).min(last);
        self.table
            .get(index)
            .copied()
            .unwrap_or(Position { x: ZIGZAG_X[0], y: Y_OFFSET as u32 })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let table = positions(PATH_POOL_SIZE);
        assert_eq!(table.len(), 20);
        assert_eq!(table[0], Position { x: 50, y: 10 });
        assert_eq!(table[1], Position { x: 30, y: 15 });
        assert_eq!(table[2], Position { x: 70, y: 20 });
        assert_eq!(table[3], Position { x: 50, y: 25 });
        assert_eq!(table[19], Position { x: 50, y: 105 });
    }

    #[test]
    fn test_y_truncates() {
        // 100 / 3 = 33.33..
        let table = positions(3);
        assert_eq!(table[1].y, 43);
        assert_eq!(table[2].y, 76);
    }

    #[test]
    fn test_lookup_clamps_past_pool() {
        let layout = PathLayout::standard();
        let last = layout.position_for(20);
        assert_eq!(layout.position_for(21), last);
        assert_eq!(layout.position_for(57), last);
        assert_eq!(layout.position_for(1), Position { x: 50, y: 10 });
    }
}
