use chrono::{Days, NaiveDate};

/// Every calendar day from `start` to `end`, both inclusive.
///
/// Empty when `start > end`.
pub fn date_axis(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        match current.checked_add_days(Days::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    days
}
