// crates/stamp_revision/src/services.rs

//! Where the revision comes from. The binary asks Git; tests inject a fixed
//! value instead of needing a real checkout.

use anyhow::Result;
use std::path::PathBuf;

use get_git_revision::{get_git_revision, get_git_revision_in};

/// Supplies the revision identifier used for stamping.
pub trait RevisionSource {
    fn revision(&self) -> Result<String>;
}

/// Git-backed source: `git rev-parse HEAD`.
#[derive(Clone, Debug, Default)]
pub struct GitRevision {
    /// Directory to run Git in; the current directory when `None`.
    pub dir: Option<PathBuf>,
}

impl GitRevision {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        GitRevision {
            dir: Some(dir.into()),
        }
    }
}

impl RevisionSource for GitRevision {
    fn revision(&self) -> Result<String> {
        let revision = match &self.dir {
            Some(dir) => get_git_revision_in(dir)?,
            None => get_git_revision()?,
        };
        Ok(revision)
    }
}

/// A revision known up front.
#[derive(Clone, Debug)]
pub struct FixedRevision(String);

impl FixedRevision {
    pub fn new(revision: impl Into<String>) -> Self {
        FixedRevision(revision.into().trim().to_string())
    }
}

impl RevisionSource for FixedRevision {
    fn revision(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}
