use std::env;
use std::time::Duration;

use thiserror::Error;

/// Environment variable shared with the curses layer for its own ESC
/// handling; milliseconds.
const ESC_DELAY_ENV: &str = "ESCDELAY";

/// Default ESC delay when the environment does not specify one.
const DEFAULT_ESC_DELAY: Duration = Duration::from_millis(25);

/// Slack added on top of the configured ESC delay before a lone ESC is
/// treated as a deliberate keypress. Terminal-generated sequence bytes
/// arrive well inside this margin.
pub const ESC_DELAY_SLACK: Duration = Duration::from_millis(5);

/// Default bounded wait for more input within one burst.
const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {ESC_DELAY_ENV} value: {0:?}")]
    InvalidEscDelay(String),
}

/// Settings consumed by the classifier at construction and on reconfigure.
///
/// `full_mode` is decided by the surrounding application from user
/// preference, terminal capability, and the availability of an image helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    pub full_mode: bool,
    pub esc_delay: Duration,
    pub poll_timeout: Duration,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            full_mode: true,
            esc_delay: DEFAULT_ESC_DELAY,
            poll_timeout: DEFAULT_POLL_TIMEOUT,
        }
    }
}

impl FilterConfig {
    /// Build a config honoring the `ESCDELAY` environment variable.
    pub fn from_env(full_mode: bool) -> Result<Self, ConfigError> {
        let esc_delay = match env::var(ESC_DELAY_ENV) {
            Ok(raw) => {
                let millis: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidEscDelay(raw))?;
                Duration::from_millis(millis)
            },
            Err(_) => DEFAULT_ESC_DELAY,
        };

        Ok(Self { full_mode, esc_delay, ..Self::default() })
    }

    /// Threshold after which a pending ESC is considered a keypress.
    pub fn esc_threshold(&self) -> Duration {
        self.esc_delay + ESC_DELAY_SLACK
    }
}
