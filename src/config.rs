use std::ffi::OsString;
use std::path::PathBuf;

/// Executable launched when nothing overrides it.
pub const DEFAULT_PRE_COMMIT: &str = "pre-commit";

pub const ENV_PRE_COMMIT: &str = "NITPICK_TRY_PRE_COMMIT";
pub const ENV_REPO: &str = "NITPICK_TRY_REPO";
pub const ENV_LOG: &str = "NITPICK_TRY_LOG";

/// Runtime settings. Every command-line argument is passthrough, so these only come
/// from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Program name or path used in place of `pre-commit`.
    pub pre_commit: OsString,
    /// Directory handed to `try-repo` instead of the program's own directory.
    pub repo: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pre_commit: OsString::from(DEFAULT_PRE_COMMIT),
            repo: None,
        }
    }
}

impl Settings {
    /// Reads settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Reads settings through `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut settings = Self::default();
        if let Some(program) = get(ENV_PRE_COMMIT) {
            settings.pre_commit = program;
        }
        settings.repo = get(ENV_REPO).map(PathBuf::from);
        settings
    }

    /// Display form of the configured executable, for diagnostics.
    #[must_use]
    pub fn pre_commit_display(&self) -> String {
        self.pre_commit.to_string_lossy().into_owned()
    }
}
