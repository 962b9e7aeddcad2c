//! Diagnostics go to stderr through `env_logger`, filtered by `NITPICK_TRY_LOG`.

use env_logger::{Builder, Env};

use crate::config::ENV_LOG;

/// Level used when `NITPICK_TRY_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global logger. Safe to call more than once; later calls are no-ops.
pub fn init() {
    let env = Env::new().filter_or(ENV_LOG, DEFAULT_FILTER);
    let _ = Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
