//! Fixed client constants and the one host-selectable knob: poll policy.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Data endpoint polled by every client.
pub const ENDPOINT: &str = "http://127.0.0.1:7777";

/// Delay between poll ticks.
pub const POLL_INTERVAL_MS: u32 = 10;

/// Pixels per data unit.
pub const BAR_SCALE: f64 = 10.0;

/// Corner radius of every bar, in pixels.
pub const CORNER_RADIUS: f64 = 5.0;

/// Fill color of every bar.
pub const BAR_FILL: &str = "#fff";

/// Element id of the canvas the browser client binds to.
pub const CANVAS_ELEMENT_ID: &str = "canvas";

/// How a timer tick behaves while an earlier request is still outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollPolicy {
    /// Fire a request on every tick, regardless of outstanding ones.
    /// Responses may arrive (and render) out of issue order.
    #[default]
    Overlapping,
    /// Skip the tick while a previous request has not resolved.
    SkipWhileInFlight,
}

impl PollPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            PollPolicy::Overlapping => "overlapping",
            PollPolicy::SkipWhileInFlight => "guarded",
        }
    }
}

impl FromStr for PollPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overlapping" => Ok(PollPolicy::Overlapping),
            "guarded" | "skip-while-in-flight" => Ok(PollPolicy::SkipWhileInFlight),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for PollPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime configuration of a chart client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub interval_ms: u32,
    pub policy: PollPolicy,
}

impl ClientConfig {
    /// Default configuration with the given poll policy.
    pub fn with_policy(policy: PollPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: ENDPOINT.to_string(),
            interval_ms: POLL_INTERVAL_MS,
            policy: PollPolicy::default(),
        }
    }
}
