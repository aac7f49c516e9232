use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ActivityError>;

#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("Repository not found: {}: {source}", .path.display())]
    RepoNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("Failed to spawn git: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("git log exited with {0}")]
    GitLog(ExitStatus),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_path() {
        let err = ActivityError::NotADirectory(PathBuf::from("/tmp/file.txt"));
        assert_eq!(err.to_string(), "Not a directory: /tmp/file.txt");

        let err = ActivityError::RepoNotFound {
            path: PathBuf::from("/nope"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "Repository not found: /nope: missing");
    }
}
