use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::code::{CODE_HEIGHT, CODE_WIDTH, CodeSpace};
use crate::console;
use crate::error::Result;
use crate::memory::MemorySpace;
use crate::opcode::{Direction, Opcode};
use crate::stack::{DEFAULT_STACK_CAPACITY, ValueStack};

/// Tunables for one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of values on the paren stack.
    pub stack_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            stack_capacity: DEFAULT_STACK_CAPACITY,
        }
    }
}

/// All state of one running Surface program.
///
/// Each tick either dispatches the opcode under the instruction pointer or,
/// while skips are pending, burns one skip instead. Either way the pointer
/// then advances, except after `@`.
#[derive(Debug, Clone)]
pub struct Engine {
    code: CodeSpace,
    loaded: CodeSpace,
    memory: MemorySpace,
    stack: ValueStack,
    skips: usize,
    halted: bool,
}

impl Engine {
    pub fn new(code: CodeSpace) -> Self {
        Self::with_config(code, EngineConfig::default())
    }

    pub fn with_config(code: CodeSpace, config: EngineConfig) -> Self {
        Self {
            loaded: code.clone(),
            code,
            memory: MemorySpace::new(),
            stack: ValueStack::with_capacity(config.stack_capacity),
            skips: 0,
            halted: false,
        }
    }

    pub fn code(&self) -> &CodeSpace {
        &self.code
    }

    pub fn memory(&self) -> &MemorySpace {
        &self.memory
    }

    pub fn stack(&self) -> &ValueStack {
        &self.stack
    }

    pub fn skips(&self) -> usize {
        self.skips
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Return to the state right after loading, including any cells the
    /// program rewrote.
    pub fn reset(&mut self) {
        self.code = self.loaded.clone();
        self.code.rewind();
        self.memory.clear();
        self.stack.clear();
        self.skips = 0;
        self.halted = false;
    }

    /// Tick until `@` runs. The output is flushed on the way out, also when
    /// the run ends in a stack overflow.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        while !self.halted {
            if let Err(e) = self.tick(input, output) {
                output.flush()?;
                return Err(e);
            }
        }
        output.flush()?;
        debug!(x = self.code.ip.x, y = self.code.ip.y, "halted");
        Ok(())
    }

    /// Execute a single tick. Does nothing once halted.
    pub fn tick<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        if self.halted {
            return Ok(());
        }
        if self.skips == 0 {
            let op = self.code.current();
            trace!(
                x = self.code.ip.x,
                y = self.code.ip.y,
                facing = ?self.code.facing,
                op = %char::from(op.glyph()),
                "dispatch"
            );
            self.dispatch(op, input, output)?;
            if self.halted {
                return Ok(());
            }
        } else {
            self.skips -= 1;
        }
        self.code.advance();
        Ok(())
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        op: Opcode,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        match op {
            Opcode::Go(dir) => {
                self.code.facing = dir;
                let (dx, dy) = dir.delta();
                self.memory.shift(dx, dy);
            }
            Opcode::Increment => {
                let cell = self.memory.current_mut();
                *cell = cell.wrapping_add(1);
            }
            Opcode::Decrement => {
                let cell = self.memory.current_mut();
                *cell = cell.wrapping_sub(1);
            }
            Opcode::RotateClockwise => self.turn(Direction::clockwise),
            Opcode::RotateCounterClockwise => self.turn(Direction::counter_clockwise),
            Opcode::FlipClockwise => self.turn_and_rewrite(op, Direction::clockwise),
            Opcode::FlipCounterClockwise => {
                self.turn_and_rewrite(op, Direction::counter_clockwise)
            }
            Opcode::Backslash => self.turn_and_rewrite(op, Direction::backslash),
            Opcode::Slash => self.turn_and_rewrite(op, Direction::slash),
            Opcode::SkipIfNotPositive => {
                if self.memory.current() < 1 {
                    self.skips = 1;
                }
            }
            Opcode::SkipIfPositive => {
                if self.memory.current() > 0 {
                    self.skips = 1;
                }
            }
            Opcode::SkipCell => {
                self.skips = usize::try_from(self.memory.current()).unwrap_or(0);
            }
            Opcode::Save => {
                self.stack.push(self.code.ip.x as i32)?;
                self.stack.push(self.code.ip.y as i32)?;
            }
            Opcode::Restore => self.restore()?,
            Opcode::RestoreIfPositive => {
                if self.memory.current() > 0 {
                    self.restore()?;
                }
            }
            Opcode::Discard => {
                self.stack.pop();
                self.stack.pop();
            }
            Opcode::PutChar => console::put_char(output, self.memory.current())?,
            Opcode::PutInt => console::put_int(output, self.memory.current())?,
            Opcode::GetInt => {
                output.flush()?;
                if let Some(value) = console::read_int(input)? {
                    *self.memory.current_mut() = value;
                }
            }
            Opcode::Halt => self.halted = true,
            Opcode::Nop(_) => {}
        }
        Ok(())
    }

    fn turn(&mut self, rule: fn(Direction) -> Direction) {
        self.code.facing = rule(self.code.facing);
    }

    fn turn_and_rewrite(&mut self, op: Opcode, rule: fn(Direction) -> Direction) {
        self.turn(rule);
        if let Some(next) = op.rewritten() {
            self.code.set_current(next);
        }
    }

    /// Jump to the saved position on top of the stack and save it again.
    fn restore(&mut self) -> Result<()> {
        let y = self.stack.pop();
        let x = self.stack.pop();
        self.code.ip.jump::<CODE_WIDTH, CODE_HEIGHT>(x, y);
        self.stack.push(x)?;
        self.stack.push(y)?;
        Ok(())
    }
}
