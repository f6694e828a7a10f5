//! Next-version and changelog engine for conventional-commit histories.
//!
//! Raw `git log` text flows through [`history::parse_history`], is cut to
//! the pending commits by [`boundary::select_pending`], classified and
//! versioned by [`analyzer::build_release`], and finally rendered by
//! [`changelog::render`].

pub mod analyzer;
pub mod boundary;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod conventional;
pub mod domain;
pub mod error;
pub mod git;
pub mod history;
pub mod release_link;
pub mod ui;

pub use analyzer::{build_release, compute_next_version, ClassifiedCommits, ReleaseData};
pub use boundary::{select_pending, ReleaseWindow};
pub use domain::{CommitRecord, SemverImpact, Version, VersionBump};
pub use error::{ReleaseError, Result};
