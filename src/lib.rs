//! Run the `nitpick` hook from the repository this program lives in.
//!
//! The whole job is `pre-commit try-repo --verbose --all-files <dir> nitpick [ARGS...]`,
//! where `<dir>` is the canonical directory containing the program and `ARGS` are
//! forwarded verbatim.

pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod location;
pub mod logging;
