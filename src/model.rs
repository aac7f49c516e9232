use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const UNKNOWN_AUTHOR: &str = "unknown";

/// One commit reduced to what the daily series needs.
///
/// The timestamp is already expressed in the bucketing zone, so
/// `date()` is stable for the life of the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitEvent {
    pub hash: String,
    pub timestamp: DateTime<FixedOffset>,
    pub author: String,
    pub repo: String,
}

impl CommitEvent {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// Dense daily commit counts.
///
/// `total` and every entry of `authors` are index-aligned with `dates`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub dates: Vec<String>,
    pub total: Vec<u32>,
    pub authors: BTreeMap<String, Vec<u32>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: String,
    pub total: u32,
    pub authors: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub author: String,
    pub commits: u64,
    pub first_active: String,
    pub last_active: String,
    pub active_days: usize,
}

impl TimeSeries {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn commit_count(&self) -> u64 {
        self.total.iter().map(|&n| n as u64).sum()
    }

    /// Busiest day on the axis. Earliest date wins ties.
    pub fn peak(&self) -> Option<(&str, u32)> {
        let mut best: Option<(&str, u32)> = None;
        for (date, &count) in self.dates.iter().zip(&self.total) {
            match best {
                Some((_, top)) if top >= count => {}
                _ => best = Some((date.as_str(), count)),
            }
        }
        best
    }

    /// One record per axis date. Author counts past the end of the axis
    /// are ignored.
    pub fn day_records(&self) -> Vec<DayRecord> {
        self.dates
            .iter()
            .zip(&self.total)
            .enumerate()
            .map(|(i, (date, &total))| DayRecord {
                date: date.clone(),
                total,
                authors: self
                    .authors
                    .iter()
                    .filter_map(|(name, counts)| match counts.get(i) {
                        Some(&n) if n > 0 => Some((name.clone(), n)),
                        _ => None,
                    })
                    .collect(),
            })
            .collect()
    }

    /// Per-author totals, most active first.
    pub fn author_summaries(&self) -> Vec<AuthorSummary> {
        let mut summaries: Vec<AuthorSummary> = self
            .authors
            .iter()
            .filter_map(|(name, counts)| {
                let active: Vec<(&String, u32)> = self
                    .dates
                    .iter()
                    .zip(counts.iter().copied())
                    .filter(|&(_, n)| n > 0)
                    .collect();
                let (first, _) = active.first()?;
                let (last, _) = active.last()?;
                Some(AuthorSummary {
                    author: name.clone(),
                    commits: active.iter().map(|&(_, n)| n as u64).sum(),
                    first_active: (*first).clone(),
                    last_active: (*last).clone(),
                    active_days: active.len(),
                })
            })
            .collect();

        summaries.sort_by(|a, b| b.commits.cmp(&a.commits).then_with(|| a.author.cmp(&b.author)));
        summaries
    }
}
