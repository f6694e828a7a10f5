use serde::Serialize;
use tracing::info;

use super::version_analyzer::{compute_next_version, ClassifiedCommits};
use crate::boundary::ReleaseWindow;
use crate::domain::{CommitRecord, Version};
use crate::error::{ReleaseError, Result};

/// Everything known about the upcoming release
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseData {
    /// Previously published version, `None` if nothing was ever published
    pub prev_version: Option<Version>,
    pub next_version: Version,
    /// Pending commits, newest first
    pub commits: Vec<CommitRecord>,
    #[serde(flatten)]
    pub classified: ClassifiedCommits,
}

impl ReleaseData {
    /// Previous version for display, `[new]` when unreleased
    pub fn prev_version_human(&self) -> String {
        self.prev_version
            .clone()
            .unwrap_or_else(Version::unreleased)
            .to_human_string()
    }

    /// Whether the release contains no commits
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}

/// Compute the release for a selected window.
///
/// An empty window is only accepted when a boundary commit was found; with
/// neither pending commits nor a boundary there is nothing to anchor a release
/// to and [`ReleaseError::AmbiguousReleaseWindow`] is returned.
pub fn build_release(prev: Option<&Version>, window: &ReleaseWindow<'_>) -> Result<ReleaseData> {
    if window.is_empty() && !window.has_boundary() {
        return Err(ReleaseError::AmbiguousReleaseWindow);
    }

    let (next_version, classified) = compute_next_version(prev, window.commits)?;
    info!(
        prev = %prev.map_or_else(|| Version::unreleased().to_human_string(), Version::to_human_string),
        next = %next_version,
        commits = window.commits.len(),
        "release computed"
    );

    Ok(ReleaseData {
        prev_version: prev.cloned(),
        next_version,
        commits: window.commits.to_vec(),
        classified,
    })
}
