//! Human-readable duration formatting and expiration delta parsing

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Single `<amount><unit>` token of an expiration string, e.g. `2d` or `30`
pub const DEFAULT_DELTA_PATTERN: &str = r"([0-9]+)([DdHhMm]|[sS]?)";

static DELTA_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_DELTA_PATTERN).expect("delta pattern is valid"));

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid expiration format: {0}")]
    InvalidFormat(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Expiration overflows: {0}")]
    Overflow(String),
}

/// Render a quantity of seconds as a duration string (`"5s"`, `"0.2s"`)
pub fn format_seconds<T: fmt::Display>(seconds: T) -> String {
    format!("{}s", seconds)
}

/// Total number of seconds denoted by an expiration string such as `"4d 5h"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExpirationDelta(pub u64);

impl ExpirationDelta {
    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Sum every delta token matched by `token` in `s`.
    ///
    /// The first capture group is the amount, the second the (possibly empty)
    /// unit. Unknown or missing units count as seconds.
    pub fn parse_with(token: &Regex, s: &str) -> Result<Self, ParseError> {
        let mut total: u64 = 0;
        let mut seen = false;

        for caps in token.captures_iter(s) {
            let amount: u64 = caps
                .get(1)
                .map(|m| m.as_str())
                .ok_or_else(|| ParseError::InvalidFormat(s.to_string()))?
                .parse()?;
            let unit = caps.get(2).map(|m| m.as_str()).unwrap_or("");

            let multiplier = match unit.to_ascii_lowercase().as_str() {
                "d" => SECONDS_PER_DAY,
                "h" => SECONDS_PER_HOUR,
                "m" => SECONDS_PER_MINUTE,
                _ => 1,
            };

            total = amount
                .checked_mul(multiplier)
                .and_then(|secs| total.checked_add(secs))
                .ok_or_else(|| ParseError::Overflow(s.to_string()))?;
            seen = true;
        }

        if !seen {
            return Err(ParseError::InvalidFormat(s.to_string()));
        }

        Ok(ExpirationDelta(total))
    }
}

impl FromStr for ExpirationDelta {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(&DELTA_REGEX, s)
    }
}

impl fmt::Display for ExpirationDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_seconds(self.0))
    }
}
