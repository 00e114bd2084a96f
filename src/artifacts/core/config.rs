//! Runtime configuration
//!
//! Configuration is read once per process from environment variables:
//!
//! - `GITLET_ABBREV_MIN`: minimum length of an abbreviated commit id (default 8, 4..=40)
//! - `GITLET_COMMIT_DATE`: fixed timestamp for new commits, RFC 2822 or `%Y-%m-%d %H:%M:%S %z`
//! - `NO_PAGER`: never page `log` / `global-log` output
//! - `GITLET_LOG`: `env_logger` filter, read by the binary

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use chrono::{DateTime, FixedOffset, Timelike};

pub const DEFAULT_ABBREV_MIN: usize = 8;
pub const MIN_ABBREV_MIN: usize = 4;

pub const ABBREV_MIN_VAR: &str = "GITLET_ABBREV_MIN";
pub const COMMIT_DATE_VAR: &str = "GITLET_COMMIT_DATE";
pub const NO_PAGER_VAR: &str = "NO_PAGER";
pub const LOG_FILTER_VAR: &str = "GITLET_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    abbrev_min: usize,
    commit_date: Option<DateTime<FixedOffset>>,
    pager_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            abbrev_min: DEFAULT_ABBREV_MIN,
            commit_date: None,
            pager_enabled: true,
        }
    }
}

impl Config {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let abbrev_min = match std::env::var(ABBREV_MIN_VAR) {
            Ok(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| anyhow::anyhow!("{ABBREV_MIN_VAR} must be a number, got {value:?}"))?,
            Err(_) => DEFAULT_ABBREV_MIN,
        };

        let commit_date = match std::env::var(COMMIT_DATE_VAR) {
            Ok(value) => Some(parse_date(&value)?),
            Err(_) => None,
        };

        let pager_enabled = std::env::var_os(NO_PAGER_VAR).is_none();

        Ok(Self::default()
            .with_abbrev_min(abbrev_min)
            .with_commit_date(commit_date)
            .with_pager(pager_enabled))
    }

    pub fn with_abbrev_min(mut self, abbrev_min: usize) -> Self {
        self.abbrev_min = abbrev_min.clamp(MIN_ABBREV_MIN, OBJECT_ID_LENGTH);
        self
    }

    pub fn with_commit_date(mut self, commit_date: Option<DateTime<FixedOffset>>) -> Self {
        self.commit_date = commit_date;
        self
    }

    pub fn with_pager(mut self, enabled: bool) -> Self {
        self.pager_enabled = enabled;
        self
    }

    pub fn abbrev_min(&self) -> usize {
        self.abbrev_min
    }

    pub fn pager_enabled(&self) -> bool {
        self.pager_enabled
    }

    /// Timestamp for a commit created now, truncated to whole seconds
    pub fn now(&self) -> DateTime<FixedOffset> {
        match self.commit_date {
            Some(date) => date,
            None => {
                let now = chrono::Local::now().fixed_offset();
                now.with_nanosecond(0).unwrap_or(now)
            }
        }
    }
}

fn parse_date(value: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S %z"))
        .map_err(|_| anyhow::anyhow!("{COMMIT_DATE_VAR} is not a valid date: {value:?}"))
}
