pub mod error;
pub mod format;
pub mod relation;
pub mod sampler;
pub mod schema;
pub mod setscript;
pub mod symbols;

pub use error::GenError;

use std::{fs, io, path::Path};

pub fn fmt_open_err(e: impl ToString, path: &Path) -> String {
    format!("Unable to open {}: {}", path_str(path), e.to_string())
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().unwrap_or("<unknown path>")
}

/// Creates the directory an output file will be written into.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

/// Deletes a file, returning whether there was one to delete.
pub fn remove_if_present(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
