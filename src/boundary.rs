//! Release window selection
//!
//! The window is the newest-first prefix of the history that has not been
//! released yet. It ends right before the boundary commit: either the first
//! commit matching an explicit hash prefix, or the first commit carrying a
//! version tag.

use std::fmt;

use serde::{Serialize, Serializer};

use tracing::{debug, info};

use crate::domain::{CommitRecord, Version};

/// Boundary value that forces the whole history into the window.
///
/// It is not valid hex, so it never matches a hash.
pub const ALL_COMMITS: &str = "all";

/// How the end of the release window was determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryMatch {
    /// An explicit hash prefix matched the commit at this index
    Hash { index: usize },
    /// The commit at this index carries a version tag
    Tag { index: usize },
    /// Nothing matched; the window is the whole history
    None,
}

impl BoundaryMatch {
    /// Index of the boundary commit, if one was found
    pub fn index(&self) -> Option<usize> {
        match self {
            BoundaryMatch::Hash { index } | BoundaryMatch::Tag { index } => Some(*index),
            BoundaryMatch::None => None,
        }
    }
}

/// The pending commits of a history, borrowed from it
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWindow<'a> {
    pub commits: &'a [CommitRecord],
    pub boundary: BoundaryMatch,
}

impl<'a> ReleaseWindow<'a> {
    /// Whether a boundary commit was found
    pub fn has_boundary(&self) -> bool {
        self.boundary != BoundaryMatch::None
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Select the pending commits.
///
/// With `boundary`, the window ends before the first commit whose hash
/// starts with it (case-insensitive). Without it, the window ends before the
/// first tagged commit. If nothing matches, the whole history is pending.
/// An empty or whitespace-only boundary is treated as absent.
pub fn select_pending<'a>(commits: &'a [CommitRecord], boundary: Option<&str>) -> ReleaseWindow<'a> {
    let boundary = boundary.map(str::trim).filter(|b| !b.is_empty());

    let matched = match boundary {
        Some(prefix) => commits
            .iter()
            .position(|c| c.hash_starts_with(prefix))
            .map(|index| BoundaryMatch::Hash { index }),
        None => commits
            .iter()
            .position(CommitRecord::is_tagged)
            .map(|index| BoundaryMatch::Tag { index }),
    };

    let boundary_match = matched.unwrap_or(BoundaryMatch::None);
    let window = ReleaseWindow {
        commits: &commits[..boundary_match.index().unwrap_or(commits.len())],
        boundary: boundary_match,
    };

    match &window.boundary {
        BoundaryMatch::None => info!(
            boundary = boundary.unwrap_or("<tags>"),
            pending = window.commits.len(),
            "no release boundary found, using entire history"
        ),
        found => debug!(?found, pending = window.commits.len(), "selected release window"),
    }

    window
}

/// First version tag at or below the window's boundary commit.
///
/// Looks at the boundary commit and everything older, returning the first
/// version found. `None` when no released commit is tagged.
pub fn latest_released_version(commits: &[CommitRecord], window: &ReleaseWindow<'_>) -> Option<Version> {
    commits
        .iter()
        .skip(window.commits.len())
        .find_map(|c| c.versions.first().cloned())
}

/// Warnings that occur when selecting the release window.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The boundary commit is the newest commit
    NoNewCommits { boundary_hash: String },
    /// An explicit boundary matched no commit
    BoundaryNotFound { boundary: String },
    /// No commit carries a version tag
    NoReleaseTags,
    /// The previous version supplied by the caller is not semver
    UnparsablePreviousVersion { input: String },
}

/// Serialized as its display text
impl Serialize for BoundaryWarning {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits { boundary_hash } => {
                let short_hash = if boundary_hash.len() > 7 {
                    &boundary_hash[..7]
                } else {
                    boundary_hash.as_str()
                };
                write!(f, "No new commits since {}", short_hash)
            }
            BoundaryWarning::BoundaryNotFound { boundary } => {
                write!(
                    f,
                    "No commit matches '{}', including the entire history",
                    boundary
                )
            }
            BoundaryWarning::NoReleaseTags => {
                write!(f, "No version tags found, including the entire history")
            }
            BoundaryWarning::UnparsablePreviousVersion { input } => {
                write!(
                    f,
                    "Cannot parse previous version '{}', treating project as unreleased",
                    input
                )
            }
        }
    }
}
