//! File I/O at the component boundary. All reads happen before the engine
//! runs; all writes happen after it returns.

use crate::core::EngineError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn read_catalog_file(path: &Path) -> Result<String, EngineError> {
    fs::read_to_string(path)
        .map_err(|e| EngineError::CatalogInvalid(format!("cannot read {}: {e}", path.display())))
}

pub fn read_context_file(path: &Path) -> Result<String, EngineError> {
    fs::read_to_string(path)
        .map_err(|e| EngineError::ContextInvalid(format!("cannot read {}: {e}", path.display())))
}

/// Write rendered output to the given file, or stdout when none is given.
pub fn write_output(content: &str, output_file: Option<&PathBuf>) -> Result<(), EngineError> {
    match output_file {
        Some(path) => {
            let mut file = fs::File::create(path).map_err(|e| {
                EngineError::Internal(format!("cannot create {}: {e}", path.display()))
            })?;
            file.write_all(content.as_bytes())
                .and_then(|_| file.write_all(b"\n"))
                .map_err(|e| EngineError::Internal(format!("cannot write {}: {e}", path.display())))
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
