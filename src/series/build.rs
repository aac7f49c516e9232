use super::aggregate::tally_by_day;
use super::axis::date_axis;
use crate::config::BucketZone;
use crate::git::read_history;
use crate::model::{CommitEvent, TimeSeries};
use crate::util::day_key;
use std::path::Path;
use tracing::info;

/// Fold commit events into a gap-filled daily series.
///
/// Input order does not matter. No events gives the empty series.
pub fn build_timeseries(events: &[CommitEvent]) -> TimeSeries {
    let tally = tally_by_day(events);
    let Some((first, last)) = tally.span() else {
        return TimeSeries::default();
    };

    let axis = date_axis(first, last);

    let total = axis
        .iter()
        .map(|day| tally.per_day.get(day).copied().unwrap_or(0))
        .collect();

    let authors = tally
        .per_author
        .iter()
        .map(|(author, days)| {
            let counts = axis
                .iter()
                .map(|day| days.get(day).copied().unwrap_or(0))
                .collect();
            (author.clone(), counts)
        })
        .collect();

    TimeSeries {
        dates: axis.into_iter().map(day_key).collect(),
        total,
        authors,
    }
}

/// Read the repository history and build its daily series.
pub fn activity(repo: &Path, zone: BucketZone) -> TimeSeries {
    let events = read_history(repo, zone);
    let series = build_timeseries(&events);
    info!(
        repo = %repo.display(),
        commits = events.len(),
        days = series.dates.len(),
        authors = series.authors.len(),
        "built activity series"
    );
    series
}
