pub mod code;
pub mod console;
pub mod engine;
pub mod error;
pub mod grid;
pub mod loader;
pub mod memory;
pub mod opcode;
pub mod stack;

use std::io::{BufRead, Write};
use std::path::Path;

pub use engine::{Engine, EngineConfig};
pub use error::{Error, Result};

/// Load the program at `path` and run it to completion on the given console.
pub fn run_file<R: BufRead, W: Write>(
    path: &Path,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let code = loader::load(path)?;
    Engine::new(code).run(input, output)
}
