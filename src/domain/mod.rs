//! Domain logic - pure value types independent of git operations

pub mod commit;
pub mod version;

pub use commit::{CommitRecord, SemverImpact};
pub use version::{Version, VersionBump, UNRELEASED_SUFFIX};
