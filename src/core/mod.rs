mod log;

pub use log::{log, LogLevel};
