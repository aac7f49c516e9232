pub mod aggregate;
pub mod axis;
pub mod build;
pub mod exec;
pub mod output;

pub use aggregate::{tally_by_day, DayTally};
pub use axis::date_axis;
pub use build::{activity, build_timeseries};
pub use exec::{exec, exec_authors};
pub use output::{output_authors_json, output_authors_table, output_chart, output_json, output_ndjson};
