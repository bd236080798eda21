//! Comment Timestamps

use std::fmt::Write;

use crate::config::{is_valid_timestamp_format, DEFAULT_TIMESTAMP_FORMAT};

/// Supplies the display-formatted "now" stamped on new comments.
///
/// `Send + Sync` so the controller owning it can live in a Leptos `RwSignal`.
pub trait Clock: Send + Sync {
    fn now_display(&self) -> String;
}

/// Local wall-clock time formatted with a chrono format string
#[derive(Debug, Clone)]
pub struct LocalClock {
    format: String,
}

impl LocalClock {
    /// An unrecognized format falls back to the default one
    pub fn new(format: impl Into<String>) -> Self {
        let format = format.into();
        if is_valid_timestamp_format(&format) {
            Self { format }
        } else {
            log::warn!("[CLOCK] Invalid timestamp format {:?}, using {:?}", format, DEFAULT_TIMESTAMP_FORMAT);
            Self::default()
        }
    }
}

impl Default for LocalClock {
    fn default() -> Self {
        Self {
            format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Clock for LocalClock {
    fn now_display(&self) -> String {
        let mut stamp = String::new();
        // chrono reports unformattable items as fmt::Error rather than panicking here
        if write!(stamp, "{}", chrono::Local::now().format(&self.format)).is_err() {
            stamp.clear();
        }
        stamp
    }
}

/// Always reports the same timestamp
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl FixedClock {
    pub fn new(stamp: impl Into<String>) -> Self {
        Self(stamp.into())
    }
}

impl Clock for FixedClock {
    fn now_display(&self) -> String {
        self.0.clone()
    }
}
