//! Analysis engine for determining the next release from pending commits

pub mod release;
pub mod version_analyzer;

pub use release::{build_release, ReleaseData};
pub use version_analyzer::{
    aggregate_bump, compute_next_version, next_version, ClassifiedCommits, UNKNOWN_PREFIX,
};
