pub mod log;

pub use log::{classify_line, parse_log_output, read_history, LogLine, Malformed};
