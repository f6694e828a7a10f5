//! Sources of raw commit history
//!
//! The engine only consumes history text in the format described in
//! [`crate::history`]. This module provides the ways of obtaining it:
//!
//! - [repository::Git2History]: walks the repository with the `git2` crate
//! - [command::CommandHistory]: asks the `git` binary through a [CommandRunner]
//! - [mock::MockHistory]: returns canned text, for tests
//!
//! Code should depend on the [HistorySource] trait rather than on a
//! concrete source.
//!
//! ```rust
//! # use git_release::git::HistorySource;
//! # use git_release::history::parse_history;
//! # fn example<S: HistorySource>(source: &S) -> Result<(), Box<dyn std::error::Error>> {
//! let commits = parse_history(&source.raw_log()?)?;
//! println!("{} commits", commits.len());
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod mock;
pub mod repository;

pub use command::{CommandHistory, SystemCommandRunner};
pub use mock::{MockCommandRunner, MockHistory};
pub use repository::Git2History;

use crate::error::Result;

/// Something that can produce the full, newest-first commit history
///
/// Implementations must be `Send`. `git2` repositories are not `Sync`, so
/// sources are not required to be shared between threads.
pub trait HistorySource: Send {
    /// Raw history text, one record per commit, newest first
    fn raw_log(&self) -> Result<String>;
}

/// Runs an external program and captures its standard output
///
/// A non-zero exit status must be reported as
/// [crate::error::ReleaseError::Command].
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}
