/// Facing of the instruction pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    East,
    West,
    North,
    South,
}

use Direction::{East, North, South, West};

// Permutation tables, indexed in East, West, North, South order.
const CLOCKWISE: [Direction; 4] = [South, North, East, West];
const COUNTER_CLOCKWISE: [Direction; 4] = [North, South, West, East];
const BACKSLASH: [Direction; 4] = [South, North, West, East];
const SLASH: [Direction; 4] = [North, South, East, West];

impl Direction {
    #[inline(always)]
    fn index(self) -> usize {
        match self {
            East => 0,
            West => 1,
            North => 2,
            South => 3,
        }
    }

    /// Unit step before any orientation flag is applied.
    pub fn delta(self) -> (i32, i32) {
        match self {
            East => (1, 0),
            West => (-1, 0),
            North => (0, -1),
            South => (0, 1),
        }
    }

    pub fn clockwise(self) -> Self {
        CLOCKWISE[self.index()]
    }

    pub fn counter_clockwise(self) -> Self {
        COUNTER_CLOCKWISE[self.index()]
    }

    /// Deflection by a `\` mirror.
    pub fn backslash(self) -> Self {
        BACKSLASH[self.index()]
    }

    /// Deflection by a `/` mirror.
    pub fn slash(self) -> Self {
        SLASH[self.index()]
    }
}

/// A decoded code cell.
///
/// Source bytes are lower-cased before decoding, so `C` and `c` are the same
/// opcode. Anything without a meaning is kept as `Nop` with its byte so the
/// grid can be printed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// `<`, `>`, `^`, `v`: face this way and move the memory pointer with it.
    Go(Direction),
    Increment,
    Decrement,
    /// `o`
    RotateClockwise,
    /// `e`
    RotateCounterClockwise,
    /// `c`, becomes `z` once executed.
    FlipClockwise,
    /// `z`, becomes `c` once executed.
    FlipCounterClockwise,
    /// `\`, becomes `/` once executed.
    Backslash,
    /// `/`, becomes `\` once executed.
    Slash,
    /// `?`
    SkipIfNotPositive,
    /// `!`
    SkipIfPositive,
    /// `*`
    SkipCell,
    /// `(`
    Save,
    /// `)`
    Restore,
    /// `]`
    RestoreIfPositive,
    /// `x`
    Discard,
    /// `.`
    PutChar,
    /// `:`
    PutInt,
    /// `,`
    GetInt,
    /// `@`
    Halt,
    Nop(u8),
}

impl Opcode {
    pub fn decode(byte: u8) -> Self {
        match byte.to_ascii_lowercase() {
            b'<' => Opcode::Go(West),
            b'>' => Opcode::Go(East),
            b'^' => Opcode::Go(North),
            b'v' => Opcode::Go(South),
            b'+' => Opcode::Increment,
            b'-' => Opcode::Decrement,
            b'o' => Opcode::RotateClockwise,
            b'e' => Opcode::RotateCounterClockwise,
            b'c' => Opcode::FlipClockwise,
            b'z' => Opcode::FlipCounterClockwise,
            b'\\' => Opcode::Backslash,
            b'/' => Opcode::Slash,
            b'?' => Opcode::SkipIfNotPositive,
            b'!' => Opcode::SkipIfPositive,
            b'*' => Opcode::SkipCell,
            b'(' => Opcode::Save,
            b')' => Opcode::Restore,
            b']' => Opcode::RestoreIfPositive,
            b'x' => Opcode::Discard,
            b'.' => Opcode::PutChar,
            b':' => Opcode::PutInt,
            b',' => Opcode::GetInt,
            b'@' => Opcode::Halt,
            other => Opcode::Nop(other),
        }
    }

    /// The byte this cell holds, as it would be written in source.
    pub fn glyph(self) -> u8 {
        match self {
            Opcode::Go(West) => b'<',
            Opcode::Go(East) => b'>',
            Opcode::Go(North) => b'^',
            Opcode::Go(South) => b'v',
            Opcode::Increment => b'+',
            Opcode::Decrement => b'-',
            Opcode::RotateClockwise => b'o',
            Opcode::RotateCounterClockwise => b'e',
            Opcode::FlipClockwise => b'c',
            Opcode::FlipCounterClockwise => b'z',
            Opcode::Backslash => b'\\',
            Opcode::Slash => b'/',
            Opcode::SkipIfNotPositive => b'?',
            Opcode::SkipIfPositive => b'!',
            Opcode::SkipCell => b'*',
            Opcode::Save => b'(',
            Opcode::Restore => b')',
            Opcode::RestoreIfPositive => b']',
            Opcode::Discard => b'x',
            Opcode::PutChar => b'.',
            Opcode::PutInt => b':',
            Opcode::GetInt => b',',
            Opcode::Halt => b'@',
            Opcode::Nop(byte) => byte,
        }
    }

    /// The opcode a self-rewriting cell turns into after it runs.
    pub fn rewritten(self) -> Option<Self> {
        match self {
            Opcode::FlipClockwise => Some(Opcode::FlipCounterClockwise),
            Opcode::FlipCounterClockwise => Some(Opcode::FlipClockwise),
            Opcode::Backslash => Some(Opcode::Slash),
            Opcode::Slash => Some(Opcode::Backslash),
            _ => None,
        }
    }
}

impl Default for Opcode {
    fn default() -> Self {
        Opcode::Nop(b' ')
    }
}
