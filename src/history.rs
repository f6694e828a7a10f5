//! Commit history parser
//!
//! History text is a sequence of records, newest first. Each record is
//! `RS hash US refnames US body`, with `RS` = 0x1E and `US` = 0x1F. This is
//! exactly what [`LOG_FORMAT`] makes `git log` print.

use tracing::debug;

use crate::conventional;
use crate::domain::{CommitRecord, Version};
use crate::error::{ReleaseError, Result};

/// Starts every commit record.
pub const RECORD_SEPARATOR: char = '\x1e';

/// Separates the hash, ref names and body inside a record.
pub const FIELD_SEPARATOR: char = '\x1f';

/// `git log --format` argument producing parseable history.
pub const LOG_FORMAT: &str = "%x1e%H%x1f%D%x1f%B";

/// Ref-name prefix identifying a version tag.
const VERSION_TAG_PREFIX: &str = "tag: v";

/// Parse raw history text into commit records, preserving order.
///
/// Whitespace-only input yields an empty history.
pub fn parse_history(text: &str) -> Result<Vec<CommitRecord>> {
    let mut records = text.split(RECORD_SEPARATOR);

    // Anything ahead of the first record marker is noise we cannot attribute.
    if let Some(preamble) = records.next() {
        if !preamble.trim().is_empty() {
            return Err(ReleaseError::malformed(
                0,
                "unexpected text before first commit marker",
            ));
        }
    }

    let commits = records
        .enumerate()
        .map(|(index, record)| parse_record(index, record))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = commits.len(), "parsed commit history");
    Ok(commits)
}

/// Render one record in the history format. Used by history sources that
/// build the text themselves rather than asking `git log` for it.
pub fn format_record(hash: &str, ref_names: &[String], message: &str) -> String {
    format!(
        "{}{}{}{}{}{}\n",
        RECORD_SEPARATOR,
        hash,
        FIELD_SEPARATOR,
        ref_names.join(", "),
        FIELD_SEPARATOR,
        message
    )
}

fn parse_record(index: usize, record: &str) -> Result<CommitRecord> {
    let mut fields = record.splitn(3, FIELD_SEPARATOR);
    let hash = fields.next().unwrap_or_default().trim();
    let ref_names = fields
        .next()
        .ok_or_else(|| ReleaseError::malformed(index, "missing ref names field"))?;
    let body = fields
        .next()
        .ok_or_else(|| ReleaseError::malformed(index, "missing message field"))?;

    if !is_full_hash(hash) {
        return Err(ReleaseError::malformed(
            index,
            format!("invalid commit hash '{}'", hash),
        ));
    }

    let (message, footer) = match body.split_once('\n') {
        Some((subject, rest)) => (subject.trim(), rest.trim()),
        None => (body.trim(), ""),
    };

    Ok(CommitRecord {
        hash: hash.to_string(),
        message: message.to_string(),
        footer: footer.to_string(),
        versions: parse_version_tags(ref_names),
        semver_impact: conventional::classify(message, footer),
    })
}

/// Extract versions from a `%D`-style ref list, in order of appearance.
///
/// Only `tag: v<semver>` entries count; branch names, `HEAD -> ...` and
/// tags that are not strict semver are skipped.
pub fn parse_version_tags(ref_names: &str) -> Vec<Version> {
    ref_names
        .split(',')
        .map(str::trim)
        .filter_map(|name| name.strip_prefix(VERSION_TAG_PREFIX))
        .filter_map(Version::try_parse)
        .collect()
}

fn is_full_hash(hash: &str) -> bool {
    hash.len() == 40
        && hash
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SemverImpact;

    const HASH_A: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    const HASH_B: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

    #[test]
    fn test_parse_empty_history() {
        assert!(parse_history("").unwrap().is_empty());
        assert!(parse_history("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_single_commit() {
        let text = format_record(HASH_A, &[], "feat: add search\n\nLonger description.\n");
        let commits = parse_history(&text).unwrap();

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].hash, HASH_A);
        assert_eq!(commits[0].message, "feat: add search");
        assert_eq!(commits[0].footer, "Longer description.");
        assert_eq!(commits[0].semver_impact, SemverImpact::Minor);
        assert!(commits[0].versions.is_empty());
    }

    #[test]
    fn test_parse_preserves_order() {
        let text = format!(
            "{}{}",
            format_record(HASH_A, &[], "fix: newer"),
            format_record(HASH_B, &[], "fix: older")
        );
        let commits = parse_history(&text).unwrap();

        assert_eq!(commits[0].hash, HASH_A);
        assert_eq!(commits[1].hash, HASH_B);
    }

    #[test]
    fn test_parse_message_without_newline() {
        let text = format!("\x1e{}\x1f\x1fchore: release", HASH_A);
        let commits = parse_history(&text).unwrap();

        assert_eq!(commits[0].message, "chore: release");
        assert_eq!(commits[0].footer, "");
    }

    #[test]
    fn test_parse_empty_body() {
        let text = format!("\x1e{}\x1f\x1f\n", HASH_A);
        let commits = parse_history(&text).unwrap();

        assert_eq!(commits[0].message, "");
        assert_eq!(commits[0].semver_impact, SemverImpact::Unknown);
    }

    #[test]
    fn test_parse_breaking_footer() {
        let text = format_record(HASH_A, &[], "fix: rename\n\nBREAKING CHANGE: renamed x");
        let commits = parse_history(&text).unwrap();
        assert_eq!(commits[0].semver_impact, SemverImpact::Major);
    }

    #[test]
    fn test_version_tags_in_order() {
        let versions = parse_version_tags("HEAD -> main, tag: v1.2.0, origin/main, tag: v1.2.0-rc.1");
        assert_eq!(
            versions,
            vec![Version::new(1, 2, 0), Version::parse("1.2.0-rc.1")]
        );
    }

    #[test]
    fn test_version_tags_skip_non_semver() {
        let versions = parse_version_tags("tag: latest, tag: v1.2, tag: release-1.0.0, tag: 2.0.0");
        assert!(versions.is_empty());
    }

    #[test]
    fn test_reject_preamble() {
        let text = format!("garbage{}", format_record(HASH_A, &[], "fix: x"));
        assert!(matches!(
            parse_history(&text),
            Err(ReleaseError::MalformedHistory { record: 0, .. })
        ));
    }

    #[test]
    fn test_reject_missing_fields() {
        let text = format!("\x1e{}\x1fno body separator", HASH_A);
        assert!(matches!(
            parse_history(&text),
            Err(ReleaseError::MalformedHistory { .. })
        ));
    }

    #[test]
    fn test_reject_bad_hash() {
        let text = format_record("abc123", &[], "fix: x");
        assert!(matches!(
            parse_history(&text),
            Err(ReleaseError::MalformedHistory { .. })
        ));

        let upper = format_record(&HASH_A.to_uppercase(), &[], "fix: x");
        assert!(parse_history(&upper).is_err());
    }

    #[test]
    fn test_error_reports_record_index() {
        let text = format!(
            "{}{}",
            format_record(HASH_A, &[], "fix: fine"),
            format_record("zzz", &[], "fix: broken")
        );
        match parse_history(&text) {
            Err(ReleaseError::MalformedHistory { record, .. }) => assert_eq!(record, 1),
            other => panic!("expected malformed history, got {:?}", other),
        }
    }
}
