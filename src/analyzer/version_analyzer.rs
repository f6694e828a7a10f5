use serde::Serialize;
use tracing::debug;

use crate::domain::{CommitRecord, SemverImpact, Version, VersionBump};
use crate::error::{ReleaseError, Result};

/// Prefix given to non-conventional commit messages in the patch bucket
pub const UNKNOWN_PREFIX: &str = "unknown: ";

/// Pending commits split by their own semver impact, order preserved
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassifiedCommits {
    pub majors: Vec<CommitRecord>,
    pub minors: Vec<CommitRecord>,
    pub patches: Vec<CommitRecord>,
}

impl ClassifiedCommits {
    /// Place each commit in exactly one bucket.
    ///
    /// Unknown-impact commits land in `patches` with their message prefixed
    /// by `unknown: `.
    pub fn from_commits(commits: &[CommitRecord]) -> Self {
        let mut classified = ClassifiedCommits::default();

        for commit in commits {
            match commit.semver_impact {
                SemverImpact::Major => classified.majors.push(commit.clone()),
                SemverImpact::Minor => classified.minors.push(commit.clone()),
                SemverImpact::Patch => classified.patches.push(commit.clone()),
                SemverImpact::Unknown => classified.patches.push(CommitRecord {
                    message: format!("{}{}", UNKNOWN_PREFIX, commit.message),
                    ..commit.clone()
                }),
            }
        }

        classified
    }

    pub fn is_empty(&self) -> bool {
        self.majors.is_empty() && self.minors.is_empty() && self.patches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.majors.len() + self.minors.len() + self.patches.len()
    }
}

/// Strongest bump implied by the commits; patch when nothing stronger shows up
pub fn aggregate_bump(commits: &[CommitRecord]) -> VersionBump {
    let mut bump = VersionBump::Patch;

    for commit in commits {
        match commit.semver_impact {
            // Nothing outranks major
            SemverImpact::Major => return VersionBump::Major,
            SemverImpact::Minor => bump = VersionBump::Minor,
            SemverImpact::Patch | SemverImpact::Unknown => {}
        }
    }

    bump
}

/// Apply the next-version rules to the previous release.
///
/// In priority order:
/// 1. `prev.major >= 1` and `prev` before `prev.major.0.0` gives `prev.major.0.0`
/// 2. `prev` before `0.1.0` gives `prev.major.1.0`
/// 3. otherwise `bump` is applied
///
/// Rules 1 and 2 override the bump, including a major one. Fails with
/// [`ReleaseError::VersionOverflow`] when the bumped component is `u64::MAX`.
pub fn next_version(prev: &Version, bump: VersionBump) -> Result<Version> {
    let major_line = Version::new(prev.major, 0, 0);
    let first_minor = Version::new(0, 1, 0);

    if prev.major >= 1 && prev.is_before(&major_line) {
        Ok(major_line)
    } else if prev.is_before(&first_minor) {
        Ok(Version::new(prev.major, 1, 0))
    } else {
        prev.bump(bump).ok_or_else(|| ReleaseError::VersionOverflow {
            version: prev.clone(),
            bump,
        })
    }
}

/// Compute the next version and bucket the pending commits.
///
/// `None` means nothing has been published; it is treated as `0.0.0-new`.
pub fn compute_next_version(
    prev: Option<&Version>,
    pending: &[CommitRecord],
) -> Result<(Version, ClassifiedCommits)> {
    let prev = prev.cloned().unwrap_or_else(Version::unreleased);
    let bump = aggregate_bump(pending);
    let next = next_version(&prev, bump)?;

    debug!(
        prev = %prev,
        next = %next,
        bump = %bump,
        pending = pending.len(),
        "computed next version"
    );

    Ok((next, ClassifiedCommits::from_commits(pending)))
}
