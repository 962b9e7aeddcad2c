//! Argument construction and the process-spawn seam.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use log::debug;

/// Subcommand of the external tool that runs hooks straight from a repository.
pub const TRY_REPO: &str = "try-repo";
/// Hook id passed to `try-repo`.
pub const HOOK_ID: &str = "nitpick";

/// Builds `try-repo --verbose --all-files <dir> nitpick` followed by `extra`, unchanged.
pub fn try_repo_args<I, S>(dir: &Path, extra: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = vec![
        TRY_REPO.into(),
        "--verbose".into(),
        "--all-files".into(),
        dir.as_os_str().to_owned(),
        HOOK_ID.into(),
    ];
    args.extend(extra.into_iter().map(Into::into));
    args
}

/// Starts one child process and blocks until it exits.
pub trait Spawner {
    /// Runs `program` with `args`, inheriting stdio, and returns its exit code.
    ///
    /// # Errors
    /// Returns the spawn error if the program cannot be started.
    fn spawn_and_wait(&self, program: &OsStr, args: &[OsString]) -> io::Result<u8>;
}

/// Spawns real processes through `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn spawn_and_wait(&self, program: &OsStr, args: &[OsString]) -> io::Result<u8> {
        debug!("spawning {} {:?}", program.to_string_lossy(), args);
        // stdin/stdout/stderr are inherited by default with `status()`
        let status = Command::new(program).args(args).status()?;
        Ok(exit_code_of(status))
    }
}

/// Maps a child's exit status to the code this process should exit with.
///
/// Normal exits keep their low 8 bits. On Unix a signal-killed child maps to
/// `128 + signal`, matching what a shell reports.
#[must_use]
pub fn exit_code_of(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return (code & 0xff) as u8;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return (128 + (signal & 0x7f)) as u8;
        }
    }
    1
}
