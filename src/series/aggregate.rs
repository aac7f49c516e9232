use crate::model::CommitEvent;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Sparse per-day counts, overall and per author.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DayTally {
    pub per_day: BTreeMap<NaiveDate, u32>,
    pub per_author: BTreeMap<String, BTreeMap<NaiveDate, u32>>,
}

impl DayTally {
    pub fn add(&mut self, event: &CommitEvent) {
        let day = event.date();
        *self.per_day.entry(day).or_insert(0) += 1;
        *self
            .per_author
            .entry(event.author.clone())
            .or_default()
            .entry(day)
            .or_insert(0) += 1;
    }

    /// Earliest and latest day seen, if any.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = *self.per_day.keys().next()?;
        let last = *self.per_day.keys().next_back()?;
        Some((first, last))
    }
}

pub fn tally_by_day(events: &[CommitEvent]) -> DayTally {
    let mut tally = DayTally::default();
    for event in events {
        tally.add(event);
    }
    tally
}
