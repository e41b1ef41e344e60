use crate::grid::{Cursor, Grid};

pub const MEMORY_WIDTH: usize = 32;
pub const MEMORY_HEIGHT: usize = 16;

/// The data grid and the memory pointer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemorySpace {
    pub grid: Grid<i32, MEMORY_WIDTH, MEMORY_HEIGHT>,
    pub mp: Cursor,
}

impl MemorySpace {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn current(&self) -> i32 {
        self.grid.get(self.mp.x, self.mp.y)
    }

    #[inline(always)]
    pub fn current_mut(&mut self) -> &mut i32 {
        self.grid.get_mut(self.mp.x, self.mp.y)
    }

    /// Move the memory pointer by a raw delta.
    ///
    /// Vertical deltas are reversed while the orientation flag is clear and
    /// taken as given once it is set, the opposite of code space. A fresh
    /// pointer told to go down therefore goes up and folds over the top edge.
    pub fn shift(&mut self, dx: i32, dy: i32) {
        let sign = if self.mp.flipped { 1 } else { -1 };
        self.mp.shift::<MEMORY_WIDTH, MEMORY_HEIGHT>(dx, dy * sign);
    }

    pub fn clear(&mut self) {
        self.grid.fill(0);
        self.mp = Cursor::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: usize, y: usize, flipped: bool) -> Cursor {
        Cursor { x, y, flipped }
    }

    #[test]
    fn test_cells_start_at_zero() {
        let mem = MemorySpace::new();
        assert!(mem.grid.rows().all(|row| row.iter().all(|&v| v == 0)));
    }

    #[test]
    fn test_horizontal_shift() {
        let mut mem = MemorySpace::new();
        mem.shift(-1, 0);
        assert_eq!((mem.mp.x, mem.mp.y), (MEMORY_WIDTH - 1, 0));
        mem.shift(1, 0);
        assert_eq!((mem.mp.x, mem.mp.y), (0, 0));
    }

    #[test]
    fn test_down_from_origin_folds_over_top() {
        let mut mem = MemorySpace::new();
        mem.shift(0, 1);
        assert_eq!(mem.mp, at(16, 0, true));
        // Flipped: down now really goes down.
        mem.shift(0, 1);
        assert_eq!(mem.mp, at(16, 1, true));
    }

    #[test]
    fn test_up_from_origin_moves_down() {
        let mut mem = MemorySpace::new();
        mem.shift(0, -1);
        assert_eq!(mem.mp, at(0, 1, false));
    }

    #[test]
    fn test_bottom_edge_folds() {
        let mut mem = MemorySpace::new();
        mem.mp = at(30, MEMORY_HEIGHT - 1, false);
        mem.shift(0, -1);
        assert_eq!(mem.mp, at(14, MEMORY_HEIGHT - 1, true));
    }

    #[test]
    fn test_current_mut_and_clear() {
        let mut mem = MemorySpace::new();
        mem.shift(1, 0);
        *mem.current_mut() += 5;
        assert_eq!(mem.current(), 5);
        mem.clear();
        assert_eq!(mem.current(), 0);
        assert_eq!(mem.mp, Cursor::default());
    }
}
