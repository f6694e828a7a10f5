//! Main workflow orchestration logic
//!
//! Ties the pipeline together: raw history → commit records → release
//! window → release data → changelog. Kept apart from `main.rs` so the
//! workflow can be driven programmatically (and tested) without clap or a
//! real repository.

use serde::Serialize;
use tracing::warn;

use crate::analyzer::{build_release, ReleaseData};
use crate::boundary::{
    latest_released_version, select_pending, BoundaryMatch, BoundaryWarning, ReleaseWindow,
    ALL_COMMITS,
};
use crate::changelog::ChangelogRenderer;
use crate::config::Config;
use crate::domain::{CommitRecord, Version};
use crate::error::Result;
use crate::git::HistorySource;
use crate::history::parse_history;
use crate::release_link::link_for_release;

/// Arguments for the release workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Commit-hash prefix of the last released commit, or `all`
    pub boundary: Option<String>,

    /// Previously published version; inferred from tags when absent
    pub previous_version: Option<String>,
}

/// Result of a successful release workflow, also the `--json` output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowResult {
    pub release: ReleaseData,

    /// Rendered changelog, empty when nothing is pending
    pub changelog: String,

    /// Release-creation link, when a repository URL is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_link: Option<String>,

    /// Non-fatal issues found along the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Main release workflow
///
/// 1. Read and parse the history
/// 2. Select the pending window
/// 3. Resolve the previously published version
/// 4. Compute the next version and buckets
/// 5. Render the changelog and the release link
pub fn run_release_workflow<S: HistorySource + ?Sized>(
    source: &S,
    args: &ReleaseWorkflowArgs,
    config: &Config,
) -> Result<WorkflowResult> {
    let commits = parse_history(&source.raw_log()?)?;
    let window = select_pending(&commits, args.boundary.as_deref());

    let mut warnings = window_warnings(&commits, &window, args.boundary.as_deref());
    let previous = resolve_previous_version(
        args.previous_version.as_deref(),
        &commits,
        &window,
        &mut warnings,
    );

    for warning in &warnings {
        warn!(%warning, "release boundary warning");
    }

    let release = build_release(previous.as_ref(), &window)?;
    let changelog = ChangelogRenderer::new(config.changelog.clone()).render(&release.classified);
    let release_link = link_for_release(&config.release, &release, &changelog)?;

    Ok(WorkflowResult {
        release,
        changelog,
        release_link,
        warnings,
    })
}

fn window_warnings(
    commits: &[CommitRecord],
    window: &ReleaseWindow<'_>,
    boundary: Option<&str>,
) -> Vec<BoundaryWarning> {
    let boundary = boundary.map(str::trim).filter(|b| !b.is_empty());

    let warning = match (window.boundary, boundary) {
        // `all` is meant to match nothing
        (BoundaryMatch::None, Some(ALL_COMMITS)) => None,
        (BoundaryMatch::None, Some(b)) => Some(BoundaryWarning::BoundaryNotFound {
            boundary: b.to_string(),
        }),
        (BoundaryMatch::None, None) if !commits.is_empty() => Some(BoundaryWarning::NoReleaseTags),
        (BoundaryMatch::None, None) => None,
        (found, _) if window.is_empty() => found
            .index()
            .and_then(|index| commits.get(index))
            .map(|commit| BoundaryWarning::NoNewCommits {
                boundary_hash: commit.hash.clone(),
            }),
        _ => None,
    };

    warning.into_iter().collect()
}

/// Explicit version if given, else the newest released tag.
///
/// An explicit value that is not semver yields `None` (unreleased) plus a
/// warning rather than an error.
fn resolve_previous_version(
    explicit: Option<&str>,
    commits: &[CommitRecord],
    window: &ReleaseWindow<'_>,
    warnings: &mut Vec<BoundaryWarning>,
) -> Option<Version> {
    match explicit.map(str::trim) {
        Some(text) => {
            let parsed = Version::try_parse(text);
            if parsed.is_none() {
                warnings.push(BoundaryWarning::UnparsablePreviousVersion {
                    input: text.to_string(),
                });
            }
            parsed
        }
        None => latest_released_version(commits, window),
    }
}
