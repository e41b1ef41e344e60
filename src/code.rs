use std::fmt;

use crate::grid::{Cursor, Grid};
use crate::opcode::{Direction, Opcode};

pub const CODE_WIDTH: usize = 32;
pub const CODE_HEIGHT: usize = 16;

/// The program grid and the instruction pointer walking it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeSpace {
    pub grid: Grid<Opcode, CODE_WIDTH, CODE_HEIGHT>,
    pub ip: Cursor,
    pub facing: Direction,
}

impl CodeSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a code space from source bytes.
    ///
    /// Row `y` takes the first `CODE_WIDTH` bytes of line `y`. Extra columns
    /// and lines past `CODE_HEIGHT` are dropped, and cells no line reaches
    /// stay blank.
    pub fn from_source(source: &[u8]) -> Self {
        let mut space = Self::new();
        for (y, line) in source.split(|&b| b == b'\n').take(CODE_HEIGHT).enumerate() {
            for (x, &byte) in line.iter().take(CODE_WIDTH).enumerate() {
                space.grid.set(x, y, Opcode::decode(byte));
            }
        }
        space
    }

    /// The opcode under the instruction pointer.
    #[inline(always)]
    pub fn current(&self) -> Opcode {
        self.grid.get(self.ip.x, self.ip.y)
    }

    #[inline(always)]
    pub fn set_current(&mut self, op: Opcode) {
        self.grid.set(self.ip.x, self.ip.y, op);
    }

    /// Step the instruction pointer one cell along its facing.
    ///
    /// A vertical step goes the way it says while the orientation flag is
    /// clear and the opposite way once it is set. Memory space uses the
    /// reverse convention.
    pub fn advance(&mut self) {
        let (dx, dy) = self.facing.delta();
        let sign = if self.ip.flipped { -1 } else { 1 };
        self.ip.shift::<CODE_WIDTH, CODE_HEIGHT>(dx, dy * sign);
    }

    /// Put the pointer back at its start: origin, facing east, flag clear.
    pub fn rewind(&mut self) {
        self.ip = Cursor::default();
        self.facing = Direction::East;
    }
}

impl fmt::Display for CodeSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            let line: String = row
                .iter()
                .map(|op| {
                    let g = op.glyph();
                    if g.is_ascii_graphic() { g as char } else { ' ' }
                })
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
