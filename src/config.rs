// Session configuration: the two list limits chosen at startup, the
// application metadata printed by `/info`, and logging setup.

use crate::error::{BookError, Result};
use crate::validate::parse_bounded_int;

/// Smallest value accepted for either limit.
pub const LIMIT_MIN: i64 = 1;
/// Largest value accepted for either limit.
pub const LIMIT_MAX: i64 = 100;

/// Limits for one session's book list. Both values lie in
/// `[LIMIT_MIN, LIMIT_MAX]` and never change after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    max_count: usize,
    max_length: usize,
}

impl Limits {
    pub fn new(max_count: usize, max_length: usize) -> Result<Self> {
        Ok(Self {
            max_count: check_bound(max_count)?,
            max_length: check_bound(max_length)?,
        })
    }

    /// Parse one limit as typed at a startup prompt.
    pub fn parse_bound(input: &str) -> Result<usize> {
        let value = parse_bounded_int(input, LIMIT_MIN, LIMIT_MAX)?;
        // in range, so always positive
        usize::try_from(value).map_err(|_| BookError::OutOfRange {
            value,
            min: LIMIT_MIN,
            max: LIMIT_MAX,
        })
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

fn check_bound(value: usize) -> Result<usize> {
    let as_i64 = i64::try_from(value).unwrap_or(i64::MAX);
    if !(LIMIT_MIN..=LIMIT_MAX).contains(&as_i64) {
        return Err(BookError::OutOfRange {
            value: as_i64,
            min: LIMIT_MIN,
            max: LIMIT_MAX,
        });
    }
    Ok(value)
}

/// Static application metadata shown by `/info`.
pub struct AppInfo;

impl AppInfo {
    pub const NAME: &'static str = env!("CARGO_PKG_NAME");
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");
    pub const CREATED: &'static str = "2025-02-26";
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
