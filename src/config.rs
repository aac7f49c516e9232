use chrono::{DateTime, FixedOffset, Utc};
use std::path::{Path, PathBuf};

/// Timezone used to reduce a commit instant to a calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BucketZone {
    /// Host timezone at run time. The same history can land on different
    /// days on machines in different zones.
    #[default]
    Local,
    Utc,
}

impl BucketZone {
    /// Convert epoch seconds into an instant carrying this zone's offset.
    /// `None` when chrono cannot represent the value, either as an instant
    /// or as a wall-clock time in this zone.
    pub fn resolve(self, secs: i64) -> Option<DateTime<FixedOffset>> {
        let utc = DateTime::<Utc>::from_timestamp(secs, 0)?;
        let offset = match self {
            BucketZone::Local => *utc.with_timezone(&chrono::Local).offset(),
            BucketZone::Utc => *utc.fixed_offset().offset(),
        };
        at_offset(utc, offset)
    }
}

fn at_offset(utc: DateTime<Utc>, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    utc.naive_utc().checked_add_offset(offset)?;
    Some(utc.with_timezone(&offset))
}

#[derive(Debug, Clone)]
pub struct Settings {
    repo: PathBuf,
    zone: BucketZone,
}

impl Settings {
    pub fn new(repo: Option<PathBuf>, utc: bool) -> std::io::Result<Self> {
        let repo = match repo {
            Some(path) => path,
            None => std::env::current_dir()?,
        };
        let zone = if utc { BucketZone::Utc } else { BucketZone::Local };
        Ok(Self { repo, zone })
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }

    pub fn zone(&self) -> BucketZone {
        self.zone
    }
}
