pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod model;
pub mod series;
pub mod util;

pub use config::BucketZone;
pub use model::{CommitEvent, TimeSeries};
pub use series::{activity, build_timeseries};
