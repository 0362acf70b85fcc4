//! Opening windows.
//!
//! A restaurant stores each service period as a JSON array such as
//! `["11:30", "14:00"]`. Only a well-formed pair with `start < end` opens
//! the restaurant; anything else reads as closed for that period.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// A half-open span of wall-clock time `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningWindow {
    /// First bookable instant.
    pub start: NaiveTime,
    /// First instant no longer bookable.
    pub end: NaiveTime,
}

impl OpeningWindow {
    /// Parse a stored `[start, end]` pair.
    ///
    /// Returns `None` unless there are exactly two entries, both parse as
    /// `HH:MM` or `HH:MM:SS`, and `start` is strictly before `end`.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Option<Self> {
        let [start, end] = raw else {
            return None;
        };
        let start = parse_wall_clock(start.as_ref())?;
        let end = parse_wall_clock(end.as_ref())?;
        (start < end).then_some(Self { start, end })
    }

    /// Whether `time` falls inside the window.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

/// Parse `HH:MM` or `HH:MM:SS`.
///
/// Leap seconds (`:60`) are rejected; chrono would otherwise read them as
/// the last second of the minute.
pub fn parse_wall_clock(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
        .filter(|time| time.nanosecond() < 1_000_000_000)
}
