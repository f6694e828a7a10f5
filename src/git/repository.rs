use std::collections::HashMap;
use std::path::Path;

use git2::{ErrorCode, Oid, Repository as Git2Repo, Sort};
use tracing::debug;

use crate::error::Result;
use crate::git::HistorySource;
use crate::history::format_record;

/// History read directly from a repository with `git2`
pub struct Git2History {
    repo: Git2Repo,
}

impl Git2History {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2History { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2History { repo }
    }

    /// `tag: <name>` decorations per commit, tags in name order.
    ///
    /// Tags that do not peel to a commit are skipped.
    fn tag_decorations(&self) -> Result<HashMap<Oid, Vec<String>>> {
        let mut decorations: HashMap<Oid, Vec<String>> = HashMap::new();

        for name in self.repo.tag_names(None)?.iter().flatten() {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;
            match reference.peel_to_commit() {
                Ok(commit) => decorations
                    .entry(commit.id())
                    .or_default()
                    .push(format!("tag: {}", name)),
                Err(e) => debug!(tag = name, error = %e, "skipping tag not pointing at a commit"),
            }
        }

        Ok(decorations)
    }
}

impl HistorySource for Git2History {
    fn raw_log(&self) -> Result<String> {
        match self.repo.head() {
            Ok(_) => {}
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                debug!("repository has no commits yet");
                return Ok(String::new());
            }
            Err(e) => return Err(e.into()),
        }

        let decorations = self.tag_decorations()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push_head()?;

        let mut log = String::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            let message = String::from_utf8_lossy(commit.message_bytes());
            let refs = decorations.get(&oid).map(Vec::as_slice).unwrap_or(&[]);

            log.push_str(&format_record(&oid.to_string(), refs, &message));
        }

        Ok(log)
    }
}
