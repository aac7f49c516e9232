use crate::config::BucketZone;
use crate::error::{ActivityError, Result};
use crate::model::{CommitEvent, UNKNOWN_AUTHOR};
use crate::util::repo_display_name;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, trace};

pub const FIELD_DELIMITER: char = '|';
pub const LOG_FORMAT: &str = "--pretty=format:%H|%ct|%an";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    Blank,
    MissingField,
    BadTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine {
    Valid(CommitEvent),
    Malformed(Malformed),
}

/// Read every commit reachable from any ref of the repository at `path`.
///
/// Never fails: a missing directory, a spawn failure or a non-zero exit
/// from git all yield an empty list.
pub fn read_history(path: &Path, zone: BucketZone) -> Vec<CommitEvent> {
    let repo = match resolve_repo(path) {
        Ok(repo) => repo,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping history read");
            return Vec::new();
        }
    };

    let output = match run_git_log(&repo) {
        Ok(output) => output,
        Err(e) => {
            debug!(repo = %repo.display(), error = %e, "git log failed, treating as empty history");
            return Vec::new();
        }
    };

    parse_log_output(&output, &repo_display_name(&repo), zone)
}

fn resolve_repo(path: &Path) -> Result<PathBuf> {
    let repo = path.canonicalize().map_err(|source| ActivityError::RepoNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    if !repo.is_dir() {
        return Err(ActivityError::NotADirectory(repo));
    }
    Ok(repo)
}

/// One `git log` process; `output()` waits for and reaps the child.
fn run_git_log(repo: &Path) -> Result<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(["log", "--all", LOG_FORMAT])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(ActivityError::Spawn)?;

    if !output.status.success() {
        return Err(ActivityError::GitLog(output.status));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

pub fn parse_log_output(output: &str, repo_name: &str, zone: BucketZone) -> Vec<CommitEvent> {
    let mut events = Vec::new();
    let mut skipped = 0usize;

    for (lineno, line) in output.lines().enumerate() {
        match classify_line(line, repo_name, zone) {
            LogLine::Valid(event) => events.push(event),
            LogLine::Malformed(Malformed::Blank) => {}
            LogLine::Malformed(reason) => {
                trace!(line = lineno + 1, ?reason, "dropping malformed log line");
                skipped += 1;
            }
        }
    }

    debug!(repo = repo_name, commits = events.len(), skipped, "parsed git log");
    events
}

/// `hash|epoch|author`, split on the first two delimiters only so an
/// author name may itself contain `|`.
pub fn classify_line(line: &str, repo_name: &str, zone: BucketZone) -> LogLine {
    if line.trim().is_empty() {
        return LogLine::Malformed(Malformed::Blank);
    }

    let mut fields = line.splitn(3, FIELD_DELIMITER);
    let (Some(hash), Some(secs), Some(author)) = (fields.next(), fields.next(), fields.next()) else {
        return LogLine::Malformed(Malformed::MissingField);
    };

    let Some(timestamp) = secs.trim().parse::<i64>().ok().and_then(|s| zone.resolve(s)) else {
        return LogLine::Malformed(Malformed::BadTimestamp);
    };

    let author = match author.trim() {
        "" => UNKNOWN_AUTHOR,
        name => name,
    };

    LogLine::Valid(CommitEvent {
        hash: hash.to_string(),
        timestamp,
        author: author.to_string(),
        repo: repo_name.to_string(),
    })
}
