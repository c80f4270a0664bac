// crates/get_git_revision/src/lib.rs

use std::io;
use std::path::Path;
use std::process::Command;

/// Errors raised while asking Git for the current revision.
#[derive(Debug, thiserror::Error)]
pub enum RevisionError {
    #[error("Failed to execute git: {0}")]
    Spawn(#[source] io::Error),

    #[error("git rev-parse HEAD failed: {0}")]
    Failed(String),
}

/// Returns the revision of `HEAD` for the repository containing the current
/// directory, trimmed of surrounding whitespace.
pub fn get_git_revision() -> Result<String, RevisionError> {
    rev_parse_head(None)
}

/// Same as [`get_git_revision`], but runs Git inside `dir`.
pub fn get_git_revision_in(dir: &Path) -> Result<String, RevisionError> {
    rev_parse_head(Some(dir))
}

fn rev_parse_head(dir: Option<&Path>) -> Result<String, RevisionError> {
    let mut cmd = Command::new("git");
    cmd.args(["rev-parse", "HEAD"]);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    let output = cmd.output().map_err(RevisionError::Spawn)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let reason = if stderr.is_empty() {
            format!("exited with {}", output.status)
        } else {
            stderr
        };
        return Err(RevisionError::Failed(reason));
    }

    let revision = String::from_utf8_lossy(&output.stdout).trim().to_string();
    log::debug!("git rev-parse HEAD -> {}", revision);
    Ok(revision)
}
