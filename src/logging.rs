use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_ENV_VAR: &str = "GIT_ACTIVITY_LOG";

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the stderr subscriber. `GIT_ACTIVITY_LOG` directives override
/// the `-v` default.
pub fn setup_logger(verbosity: u8) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    let fmt = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(fmt).with(env_filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for(0), LevelFilter::WARN);
        assert_eq!(level_for(2), LevelFilter::DEBUG);
        assert_eq!(level_for(9), LevelFilter::TRACE);
    }
}
