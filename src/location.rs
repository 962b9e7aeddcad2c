use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Returns the canonical directory containing `program`.
///
/// `program` may be relative (interpreted against the current directory) or a
/// symlink; both are resolved by canonicalizing before taking the parent.
///
/// # Errors
/// Returns an error if `program` does not exist, cannot be read, or has no parent.
pub fn resolve_program_dir(program: &Path) -> io::Result<PathBuf> {
    let canonical = fs::canonicalize(program)?;
    canonical
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} has no parent directory", canonical.display()),
            )
        })
}

/// Canonicalizes an explicitly configured repository directory.
///
/// # Errors
/// Returns an error if `dir` does not exist or is not a directory.
pub fn resolve_repo_dir(dir: &Path) -> io::Result<PathBuf> {
    let canonical = fs::canonicalize(dir)?;
    if !canonical.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a directory", canonical.display()),
        ));
    }
    Ok(canonical)
}
