//! Existence checking and whole-file reads.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::DemoError;

/// Check that `path` exists, read it, and report whether it has any content.
/// A missing document is fatal by policy; the hint line prints first so the
/// transcript still tells the reader what to do.
pub fn read_file(path: &Path, out: &mut dyn Write) -> Result<(), DemoError> {
    match fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            writeln!(out, "Please Create a '{}'", path.display())?;
            return Err(DemoError::MissingFile(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    }

    let content = fs::read(path)?;
    writeln!(out, "{}", !content.is_empty())?;
    Ok(())
}
