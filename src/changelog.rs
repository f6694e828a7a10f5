//! Changelog rendering
//!
//! Produces plain text suitable for a release body: one section per
//! non-empty bucket, major first.

use std::fmt::Write;

use crate::analyzer::ClassifiedCommits;
use crate::config::ChangelogConfig;
use crate::domain::CommitRecord;

/// Renders classified commits using configurable section headings
pub struct ChangelogRenderer {
    config: ChangelogConfig,
}

impl ChangelogRenderer {
    pub fn new(config: ChangelogConfig) -> Self {
        ChangelogRenderer { config }
    }

    /// Render the changelog.
    ///
    /// Sections are separated by a blank line and the result ends with a
    /// single newline. A message equal to the bullet directly above it is
    /// skipped. All-empty input renders as an empty string.
    pub fn render(&self, classified: &ClassifiedCommits) -> String {
        let sections = [
            (&self.config.major_heading, &classified.majors),
            (&self.config.minor_heading, &classified.minors),
            (&self.config.patch_heading, &classified.patches),
        ];

        sections
            .iter()
            .filter(|(_, commits)| !commits.is_empty())
            .map(|(heading, commits)| render_section(heading, commits))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ChangelogRenderer {
    fn default() -> Self {
        Self::new(ChangelogConfig::default())
    }
}

/// Render with the default headings
pub fn render(classified: &ClassifiedCommits) -> String {
    ChangelogRenderer::default().render(classified)
}

fn render_section(heading: &str, commits: &[CommitRecord]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", heading);

    let mut previous: Option<&str> = None;
    for commit in commits {
        let message = commit.message.as_str();
        if previous != Some(message) {
            let _ = writeln!(output, "- {}", message);
        }
        previous = Some(message);
    }

    output
}
