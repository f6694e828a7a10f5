//! Conventional commit classification
//!
//! All matching rules live here so they can be tested apart from history
//! parsing. Classification looks at the subject line and the footer only.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::SemverImpact;

/// Footer marker that flags a breaking change.
pub const BREAKING_CHANGE_MARKER: &str = "BREAKING CHANGE: ";

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static BREAKING_SUBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+(\([^)]*\))?!:").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static FEATURE_SUBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^feat(\([^)]*\))?!?:").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static CONVENTIONAL_SUBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+(\([^)]*\))?!?:").unwrap());

/// Classify a commit by its subject line and footer.
///
/// Rules are checked strongest first:
/// - `type(scope)!:` subject or a `BREAKING CHANGE: ` footer is major
/// - `feat(scope):` is minor
/// - any other `type(scope):` is patch
/// - anything else is unknown
pub fn classify(subject: &str, footer: &str) -> SemverImpact {
    if BREAKING_SUBJECT.is_match(subject) || footer.contains(BREAKING_CHANGE_MARKER) {
        SemverImpact::Major
    } else if FEATURE_SUBJECT.is_match(subject) {
        SemverImpact::Minor
    } else if CONVENTIONAL_SUBJECT.is_match(subject) {
        SemverImpact::Patch
    } else {
        SemverImpact::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaking_with_bang() {
        assert_eq!(classify("feat!: drop node 12", ""), SemverImpact::Major);
        assert_eq!(classify("fix(api)!: rename field", ""), SemverImpact::Major);
        assert_eq!(classify("chore!: bump minimum", ""), SemverImpact::Major);
    }

    #[test]
    fn test_breaking_via_footer() {
        let footer = "Some details.\n\nBREAKING CHANGE: field changed from X to Y";
        assert_eq!(classify("fix: rename API field", footer), SemverImpact::Major);
    }

    #[test]
    fn test_footer_marker_requires_trailing_space() {
        assert_eq!(
            classify("fix: rename", "BREAKING CHANGE:no space"),
            SemverImpact::Patch
        );
    }

    #[test]
    fn test_breaking_marker_in_subject_is_ignored() {
        assert_eq!(
            classify("docs: explain BREAKING CHANGE: usage", ""),
            SemverImpact::Patch
        );
    }

    #[test]
    fn test_feature() {
        assert_eq!(classify("feat: add search", ""), SemverImpact::Minor);
        assert_eq!(classify("feat(auth): add oauth", ""), SemverImpact::Minor);
    }

    #[test]
    fn test_generic_conventional_is_patch() {
        assert_eq!(classify("fix: bug", ""), SemverImpact::Patch);
        assert_eq!(classify("docs(readme): typo", ""), SemverImpact::Patch);
        assert_eq!(classify("refactor: extract module", ""), SemverImpact::Patch);
    }

    #[test]
    fn test_feature_prefix_of_longer_type_is_patch() {
        assert_eq!(classify("feature: add search", ""), SemverImpact::Patch);
    }

    #[test]
    fn test_non_conventional_is_unknown() {
        assert_eq!(classify("Updated stuff", ""), SemverImpact::Unknown);
        assert_eq!(classify("Merge branch 'main'", ""), SemverImpact::Unknown);
        assert_eq!(classify("fix : spaced colon", ""), SemverImpact::Unknown);
        assert_eq!(classify("", ""), SemverImpact::Unknown);
    }

    #[test]
    fn test_unknown_subject_with_breaking_footer_is_major() {
        assert_eq!(
            classify("Rework config", "BREAKING CHANGE: new format"),
            SemverImpact::Major
        );
    }
}
