//! User interface module - terminal output.
//!
//! Everything is non-interactive; `formatter` builds the strings and prints
//! them to stdout (results) or stderr (diagnostics).

pub mod formatter;

pub use formatter::{
    display_changelog, display_error, display_pending_commits, display_release_link,
    display_release_summary, display_status, display_warning, format_commit_line,
    format_version_change,
};
