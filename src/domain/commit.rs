use serde::Serialize;
use std::fmt;

use super::version::Version;

/// Semver impact of a single commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SemverImpact {
    Major,
    Minor,
    Patch,
    Unknown,
}

impl fmt::Display for SemverImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SemverImpact::Major => "major",
            SemverImpact::Minor => "minor",
            SemverImpact::Patch => "patch",
            SemverImpact::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One commit from the history, with the version tags pointing at it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
    /// Full 40-character lowercase hash
    pub hash: String,
    /// Subject line, trimmed
    pub message: String,
    /// Everything after the subject line, trimmed
    pub footer: String,
    /// Version tags on this commit, in ref-list order
    pub versions: Vec<Version>,
    pub semver_impact: SemverImpact,
}

impl CommitRecord {
    /// Abbreviated hash for display
    pub fn short_hash(&self) -> &str {
        if self.hash.len() > 7 {
            &self.hash[..7]
        } else {
            &self.hash
        }
    }

    /// Whether at least one version tag points at this commit
    pub fn is_tagged(&self) -> bool {
        !self.versions.is_empty()
    }

    /// Case-insensitive hash prefix match
    pub fn hash_starts_with(&self, prefix: &str) -> bool {
        self.hash.starts_with(&prefix.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hash: &str, versions: Vec<Version>) -> CommitRecord {
        CommitRecord {
            hash: hash.to_string(),
            message: "fix: something".to_string(),
            footer: String::new(),
            versions,
            semver_impact: SemverImpact::Patch,
        }
    }

    #[test]
    fn test_short_hash() {
        let commit = record("0123456789abcdef0123456789abcdef01234567", vec![]);
        assert_eq!(commit.short_hash(), "0123456");
    }

    #[test]
    fn test_is_tagged() {
        let hash = "0123456789abcdef0123456789abcdef01234567";
        assert!(!record(hash, vec![]).is_tagged());
        assert!(record(hash, vec![Version::new(1, 0, 0)]).is_tagged());
    }

    #[test]
    fn test_hash_prefix_is_case_insensitive() {
        let commit = record("abcdef0123456789abcdef0123456789abcdef01", vec![]);
        assert!(commit.hash_starts_with("ABCDEF"));
        assert!(commit.hash_starts_with("abc"));
        assert!(!commit.hash_starts_with("all"));
    }

    #[test]
    fn test_impact_display() {
        assert_eq!(SemverImpact::Major.to_string(), "major");
        assert_eq!(SemverImpact::Unknown.to_string(), "unknown");
    }
}
