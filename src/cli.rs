use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::Settings;
use crate::error::Error;
use crate::launcher::{Spawner, SystemSpawner, try_repo_args};
use crate::location::{resolve_program_dir, resolve_repo_dir};

/// How this process was started: its own path plus the arguments to forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Captures the running executable and every argument after `argv[0]`.
    ///
    /// # Errors
    /// Returns an error if the platform cannot report the executable path.
    pub fn from_env() -> Result<Self> {
        let program = std::env::current_exe().context("locate running executable")?;
        Ok(Self {
            program,
            args: std::env::args_os().skip(1).collect(),
        })
    }
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if the hook directory cannot be resolved or `pre-commit`
/// cannot be started. A failing child is not an error; its code is returned.
pub fn run() -> Result<u8> {
    let invocation = Invocation::from_env()?;
    let settings = Settings::from_env();
    Ok(run_with(&invocation, &settings, &SystemSpawner)?)
}

/// Resolve, build arguments, spawn, wait, and hand back the child's exit code.
///
/// # Errors
/// [`Error::Resolve`] if the directory cannot be determined (nothing is spawned),
/// [`Error::Spawn`] if the executable cannot be started.
pub fn run_with<S: Spawner + ?Sized>(
    invocation: &Invocation,
    settings: &Settings,
    spawner: &S,
) -> Result<u8, Error> {
    let dir = match &settings.repo {
        Some(repo) => resolve_repo_dir(repo).map_err(|source| Error::Resolve {
            path: repo.clone(),
            source,
        })?,
        None => resolve_program_dir(&invocation.program).map_err(|source| Error::Resolve {
            path: invocation.program.clone(),
            source,
        })?,
    };
    debug!("hook repository: {}", dir.display());

    let args = try_repo_args(&dir, invocation.args.iter().cloned());
    let code = spawner
        .spawn_and_wait(&settings.pre_commit, &args)
        .map_err(|source| Error::Spawn {
            program: settings.pre_commit_display(),
            source,
        })?;
    info!("{} exited with {code}", settings.pre_commit_display());
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::ffi::OsStr;
    use std::fs;
    use std::io;

    /// Records each call and answers with a fixed result.
    struct FakeSpawner {
        calls: RefCell<Vec<(OsString, Vec<OsString>)>>,
        result: fn() -> io::Result<u8>,
    }

    impl FakeSpawner {
        fn exiting(result: fn() -> io::Result<u8>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                result,
            }
        }
    }

    impl Spawner for FakeSpawner {
        fn spawn_and_wait(&self, program: &OsStr, args: &[OsString]) -> io::Result<u8> {
            self.calls
                .borrow_mut()
                .push((program.to_owned(), args.to_vec()));
            (self.result)()
        }
    }

    fn program_in(dir: &std::path::Path) -> PathBuf {
        let program = dir.join("run.sh");
        fs::write(&program, "#!/bin/sh\n").unwrap();
        program
    }

    #[test]
    fn forwards_directory_and_args() {
        let dir = tempfile::tempdir().unwrap();
        let invocation = Invocation {
            program: program_in(dir.path()),
            args: vec!["--foo".into(), "bar".into()],
        };
        let spawner = FakeSpawner::exiting(|| Ok(0));

        let code = run_with(&invocation, &Settings::default(), &spawner).unwrap();
        assert_eq!(code, 0);

        let calls = spawner.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (program, args) = &calls[0];
        assert_eq!(program, "pre-commit");
        let canonical = fs::canonicalize(dir.path()).unwrap();
        let expected: Vec<OsString> = vec![
            "try-repo".into(),
            "--verbose".into(),
            "--all-files".into(),
            canonical.into_os_string(),
            "nitpick".into(),
            "--foo".into(),
            "bar".into(),
        ];
        assert_eq!(args, &expected);
    }

    #[test]
    fn child_exit_code_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        let invocation = Invocation {
            program: program_in(dir.path()),
            args: Vec::new(),
        };
        let spawner = FakeSpawner::exiting(|| Ok(42));
        assert_eq!(
            run_with(&invocation, &Settings::default(), &spawner).unwrap(),
            42
        );
    }

    #[test]
    fn resolution_failure_never_spawns() {
        let dir = tempfile::tempdir().unwrap();
        let invocation = Invocation {
            program: dir.path().join("gone"),
            args: vec!["x".into()],
        };
        let spawner = FakeSpawner::exiting(|| Ok(0));

        let err = run_with(&invocation, &Settings::default(), &spawner).unwrap_err();
        assert!(matches!(err, Error::Resolve { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(spawner.calls.borrow().is_empty());
    }

    #[test]
    fn spawn_failure_is_reported_once() {
        let dir = tempfile::tempdir().unwrap();
        let invocation = Invocation {
            program: program_in(dir.path()),
            args: Vec::new(),
        };
        let spawner = FakeSpawner::exiting(|| Err(io::Error::from(io::ErrorKind::NotFound)));

        let err = run_with(&invocation, &Settings::default(), &spawner).unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
        assert_eq!(err.exit_code(), 127);
        assert_eq!(spawner.calls.borrow().len(), 1);
    }

    #[test]
    fn settings_override_program_and_repo() {
        let repo = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let invocation = Invocation {
            program: program_in(elsewhere.path()),
            args: Vec::new(),
        };
        let settings = Settings {
            pre_commit: "/opt/pre-commit".into(),
            repo: Some(repo.path().to_path_buf()),
        };
        let spawner = FakeSpawner::exiting(|| Ok(0));

        run_with(&invocation, &settings, &spawner).unwrap();
        let calls = spawner.calls.borrow();
        assert_eq!(calls[0].0, "/opt/pre-commit");
        assert_eq!(
            calls[0].1[3],
            fs::canonicalize(repo.path()).unwrap().into_os_string()
        );
    }

    #[test]
    fn bad_repo_override_never_spawns() {
        let dir = tempfile::tempdir().unwrap();
        let invocation = Invocation {
            program: program_in(dir.path()),
            args: Vec::new(),
        };
        let settings = Settings {
            repo: Some(dir.path().join("run.sh")),
            ..Settings::default()
        };
        let spawner = FakeSpawner::exiting(|| Ok(0));

        let err = run_with(&invocation, &settings, &spawner).unwrap_err();
        assert!(matches!(err, Error::Resolve { .. }));
        assert!(spawner.calls.borrow().is_empty());
    }
}
