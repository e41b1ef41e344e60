use std::path::Path;

use tracing::debug;

use crate::code::CodeSpace;
use crate::error::{Error, Result};

/// Read a program from disk into a fresh code space.
pub fn load(path: &Path) -> Result<CodeSpace> {
    let source = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let code = CodeSpace::from_source(&source);
    debug!(
        path = %path.display(),
        bytes = source.len(),
        "loaded program:\n{code}"
    );
    Ok(code)
}
