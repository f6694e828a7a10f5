use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Suffix carried by the "nothing has been published yet" sentinel.
pub const UNRELEASED_SUFFIX: &str = "new";

/// Semantic version representation
///
/// `suffix` holds the pre-release identifier (build metadata is dropped on
/// parse). The sentinel `0.0.0-new` stands for "no prior release".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub suffix: Option<String>,
}

impl Version {
    /// Create a new version without a suffix
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            suffix: None,
        }
    }

    /// The `0.0.0-new` sentinel
    pub fn unreleased() -> Self {
        Version {
            major: 0,
            minor: 0,
            patch: 0,
            suffix: Some(UNRELEASED_SUFFIX.to_string()),
        }
    }

    /// Parse a strict `MAJOR.MINOR.PATCH[-PRE][+BUILD]` string
    ///
    /// Returns `None` when the text does not follow the grammar. No `v`
    /// prefix or surrounding whitespace is accepted.
    pub fn try_parse(text: &str) -> Option<Self> {
        let parsed = semver::Version::parse(text).ok()?;
        let suffix = if parsed.pre.is_empty() {
            None
        } else {
            Some(parsed.pre.as_str().to_string())
        };

        Some(Version {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            suffix,
        })
    }

    /// Parse a version, falling back to the unreleased sentinel
    pub fn parse(text: &str) -> Self {
        Self::try_parse(text).unwrap_or_else(Self::unreleased)
    }

    /// Whether a non-empty suffix is attached
    pub fn has_suffix(&self) -> bool {
        self.suffix.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Whether this is the `0.0.0-new` sentinel
    pub fn is_unreleased(&self) -> bool {
        self.major == 0
            && self.minor == 0
            && self.patch == 0
            && self.suffix.as_deref() == Some(UNRELEASED_SUFFIX)
    }

    /// Precedence check used by the next-version rules.
    ///
    /// Numeric components compare first. On a tie, a suffixed version sorts
    /// before an unsuffixed one; two suffixed (or two plain) versions are
    /// equal at that tier, so neither is before the other.
    pub fn is_before(&self, other: &Version) -> bool {
        match (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch)) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.has_suffix() && !other.has_suffix(),
        }
    }

    /// Bump version according to bump type. The result never carries a suffix.
    ///
    /// `None` when the bumped component is already `u64::MAX`.
    pub fn bump(&self, bump_type: VersionBump) -> Option<Self> {
        match bump_type {
            VersionBump::Major => Some(Version::new(self.major.checked_add(1)?, 0, 0)),
            VersionBump::Minor => Some(Version::new(self.major, self.minor.checked_add(1)?, 0)),
            VersionBump::Patch => Some(Version::new(
                self.major,
                self.minor,
                self.patch.checked_add(1)?,
            )),
        }
    }

    /// `MAJOR.MINOR.PATCH[-SUFFIX]`
    pub fn to_semver_string(&self) -> String {
        self.to_string()
    }

    /// Like [`Version::to_semver_string`], except an all-zero suffixed
    /// version renders as `[suffix]`.
    pub fn to_human_string(&self) -> String {
        match &self.suffix {
            Some(suffix)
                if !suffix.is_empty() && self.major == 0 && self.minor == 0 && self.patch == 0 =>
            {
                format!("[{}]", suffix)
            }
            _ => self.to_semver_string(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        match &self.suffix {
            Some(suffix) if !suffix.is_empty() => write!(f, "-{}", suffix),
            _ => Ok(()),
        }
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_semver_string())
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        };
        f.write_str(name)
    }
}
