#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;

pub fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

pub fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

pub fn init_git_repo(dir: &Path) {
    git(dir, &["init", "-q"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "core.safecrlf", "false"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", "Your Name"]);
}

/// Commit `content` to `name` as `author`, with both author and committer
/// dates pinned to `date` (RFC 3339).
pub fn commit_file(dir: &Path, name: &str, content: &str, author: &str, date: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();

    git(dir, &["add", "."]);
    assert!(Command::new("git")
        .args(["commit", "-q", "-m", &format!("add {name}")])
        .env("GIT_AUTHOR_NAME", author)
        .env("GIT_COMMITTER_NAME", author)
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

/// Three commits: a and b on 2024-01-01, a again on 2024-01-03.
pub fn seed_sample_history(dir: &Path) {
    init_git_repo(dir);
    commit_file(dir, "src/a.rs", "fn a(){}\n", "a", "2024-01-01T12:00:00+00:00");
    commit_file(dir, "src/b.rs", "fn b(){}\n", "b", "2024-01-01T13:00:00+00:00");
    commit_file(dir, "src/a.rs", "fn a(){ }\n", "a", "2024-01-03T12:00:00+00:00");
}
