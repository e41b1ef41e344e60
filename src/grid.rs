/// A fixed `W`x`H` grid stored row-major, indexed by `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T, const W: usize, const H: usize> {
    cells: [[T; W]; H],
}

impl<T: Copy + Default, const W: usize, const H: usize> Grid<T, W, H> {
    pub fn new() -> Self {
        Self {
            cells: [[T::default(); W]; H],
        }
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.cells[y][x]
    }

    #[inline(always)]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        &mut self.cells[y][x]
    }

    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, val: T) {
        self.cells[y][x] = val;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T; W]> {
        self.cells.iter()
    }

    pub fn fill(&mut self, val: T) {
        for row in self.cells.iter_mut() {
            row.fill(val);
        }
    }
}

impl<T: Copy + Default, const W: usize, const H: usize> Default for Grid<T, W, H> {
    fn default() -> Self {
        Self::new()
    }
}

/// A pointer into a grid: position plus the orientation flag.
///
/// Horizontal movement wraps around. Vertical movement off either edge
/// clamps back onto that edge, jumps half the width across, and toggles
/// `flipped`. What `flipped` does to the next vertical step is up to the
/// owning space, see `CodeSpace::advance` and `MemorySpace::shift`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
    pub flipped: bool,
}

impl Cursor {
    /// Move by `(dx, dy)`. `dy` must already carry the owner's sign convention.
    pub fn shift<const W: usize, const H: usize>(&mut self, dx: i32, dy: i32) {
        let w = W as i32;
        let h = H as i32;
        let mut x = (self.x as i32 + dx).rem_euclid(w);
        let mut y = self.y as i32 + dy;
        if y < 0 {
            x = (x + w / 2) % w;
            y = 0;
            self.flipped = !self.flipped;
        } else if y > h - 1 {
            x = (x + w / 2) % w;
            y = h - 1;
            self.flipped = !self.flipped;
        }
        self.x = x as usize;
        self.y = y as usize;
    }

    /// Place the cursor at coordinates restored from the value stack.
    /// The flag is untouched.
    pub fn jump<const W: usize, const H: usize>(&mut self, x: i32, y: i32) {
        self.x = x.rem_euclid(W as i32) as usize;
        self.y = y.clamp(0, H as i32 - 1) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: usize = 32;
    const H: usize = 16;

    fn at(x: usize, y: usize, flipped: bool) -> Cursor {
        Cursor { x, y, flipped }
    }

    #[test]
    fn test_grid_set_get() {
        let mut grid: Grid<i32, W, H> = Grid::new();
        grid.set(31, 15, 9);
        *grid.get_mut(0, 1) += 4;
        assert_eq!(grid.get(31, 15), 9);
        assert_eq!(grid.get(0, 1), 4);
        assert_eq!(grid.get(1, 0), 0);
        assert_eq!(grid.rows().count(), H);
    }

    #[test]
    fn test_grid_fill() {
        let mut grid: Grid<i32, 4, 2> = Grid::new();
        grid.set(1, 1, 3);
        grid.fill(0);
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_horizontal_wrap_east() {
        let mut c = at(31, 5, false);
        c.shift::<W, H>(1, 0);
        assert_eq!(c, at(0, 5, false));
    }

    #[test]
    fn test_horizontal_wrap_west() {
        let mut c = at(0, 5, true);
        c.shift::<W, H>(-1, 0);
        assert_eq!(c, at(31, 5, true));
    }

    #[test]
    fn test_top_edge_folds_over() {
        let mut c = at(3, 0, false);
        c.shift::<W, H>(0, -1);
        assert_eq!(c, at(19, 0, true));
    }

    #[test]
    fn test_bottom_edge_folds_over() {
        let mut c = at(20, 15, true);
        c.shift::<W, H>(0, 1);
        assert_eq!(c, at(4, 15, false));
    }

    #[test]
    fn test_interior_vertical_step() {
        let mut c = at(7, 7, false);
        c.shift::<W, H>(0, 1);
        assert_eq!(c, at(7, 8, false));
        c.shift::<W, H>(0, -1);
        assert_eq!(c, at(7, 7, false));
    }

    #[test]
    fn test_jump_keeps_flag() {
        let mut c = at(1, 1, true);
        c.jump::<W, H>(12, 9);
        assert_eq!(c, at(12, 9, true));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cursor_stays_on_grid(
            start_x in 0usize..32,
            start_y in 0usize..16,
            moves in prop::collection::vec((-1i32..=1, -1i32..=1), 0..512)
        ) {
            let mut c = Cursor { x: start_x, y: start_y, flipped: false };
            for (dx, dy) in moves {
                c.shift::<32, 16>(dx, dy);
                prop_assert!(c.x < 32);
                prop_assert!(c.y < 16);
            }
        }

        #[test]
        fn vertical_crossing_offsets_half_width(
            x in 0usize..32,
            flipped in any::<bool>()
        ) {
            let mut up = Cursor { x, y: 0, flipped };
            up.shift::<32, 16>(0, -1);
            let across = (x + 16) % 32;
            prop_assert_eq!(up, Cursor { x: across, y: 0, flipped: !flipped });

            let mut down = Cursor { x, y: 15, flipped };
            down.shift::<32, 16>(0, 1);
            prop_assert_eq!(down, Cursor { x: across, y: 15, flipped: !flipped });
        }

        #[test]
        fn horizontal_steps_never_toggle(
            y in 0usize..16,
            moves in prop::collection::vec(prop_oneof![Just(-1i32), Just(1i32)], 0..256)
        ) {
            let mut c = Cursor { x: 0, y, flipped: false };
            for dx in moves {
                c.shift::<32, 16>(dx, 0);
                prop_assert_eq!(c.y, y);
                prop_assert!(!c.flipped);
            }
        }
    }
}
