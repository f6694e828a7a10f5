//! Formatting functions for UI output.
//!
//! `format_*` functions are pure and testable; `display_*` functions print.

use console::style;

use crate::analyzer::ReleaseData;
use crate::boundary::BoundaryWarning;
use crate::domain::CommitRecord;

/// Maximum number of pending commits listed in the summary
const MAX_LISTED_COMMITS: usize = 10;

/// Maximum subject length shown per commit line
const MAX_SUBJECT_CHARS: usize = 60;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// `prev → next (N commits)`
pub fn format_version_change(release: &ReleaseData) -> String {
    format!(
        "{} → {} ({} commit{})",
        release.prev_version_human(),
        release.next_version.to_human_string(),
        release.commits.len(),
        if release.commits.len() == 1 { "" } else { "s" }
    )
}

/// `N. <short hash> <subject>` with the subject cut at 60 characters
pub fn format_commit_line(index: usize, commit: &CommitRecord) -> String {
    let subject: String = commit.message.chars().take(MAX_SUBJECT_CHARS).collect();
    format!("{:>3}. {} {}", index + 1, commit.short_hash(), subject)
}

/// Display the version change.
pub fn display_release_summary(release: &ReleaseData) {
    println!(
        "\n{} {}",
        style("Next release:").bold(),
        style(format_version_change(release)).green()
    );
}

/// Display up to 10 pending commits, then the count of remaining ones.
pub fn display_pending_commits(commits: &[CommitRecord]) {
    println!("{}", style(format!("Pending commits ({}):", commits.len())).underlined());

    for (i, commit) in commits.iter().take(MAX_LISTED_COMMITS).enumerate() {
        println!("{}", format_commit_line(i, commit));
    }

    if commits.len() > MAX_LISTED_COMMITS {
        println!("  ... and {} more commits", commits.len() - MAX_LISTED_COMMITS);
    }
}

/// Display the rendered changelog under a heading.
pub fn display_changelog(changelog: &str) {
    println!("\n{}", style("Changelog:").bold());
    if changelog.is_empty() {
        println!("  (no changes)");
    } else {
        print!("{}", changelog);
    }
}

/// Display the release-creation link.
pub fn display_release_link(link: &str) {
    println!("\n{} {}", style("Create release:").bold(), style(link).cyan());
}
