//! Release-creation link with the changelog prefilled

use url::Url;

use crate::analyzer::ReleaseData;
use crate::config::ReleaseConfig;
use crate::error::{ReleaseError, Result};

/// Build `<repository>/releases/new?tag=..&title=..&body=..`.
///
/// Query values are form-encoded. A trailing `/` or `.git` on the repository
/// URL is ignored; only `http` and `https` URLs are accepted.
pub fn release_url(repository_url: &str, tag: &str, title: &str, body: &str) -> Result<String> {
    let base = repository_url.trim_end_matches('/');
    let base = base.strip_suffix(".git").unwrap_or(base);

    let mut url = Url::parse(&format!("{}/releases/new", base)).map_err(|e| {
        ReleaseError::config(format!("Invalid repository URL '{}': {}", repository_url, e))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ReleaseError::config(format!(
            "Repository URL must be http(s): {}",
            repository_url
        )));
    }

    url.query_pairs_mut()
        .append_pair("tag", tag)
        .append_pair("title", title)
        .append_pair("body", body);

    Ok(url.into())
}

/// Release link for computed release data, `None` without a repository URL
pub fn link_for_release(
    config: &ReleaseConfig,
    release: &ReleaseData,
    changelog: &str,
) -> Result<Option<String>> {
    let Some(repository_url) = config.repository_url.as_deref() else {
        return Ok(None);
    };

    let version = release.next_version.to_semver_string();
    let tag = format!("{}{}", config.tag_prefix, version);
    release_url(repository_url, &tag, &version, changelog).map(Some)
}
