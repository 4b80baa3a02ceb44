use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::duration::format_clock_time;
use utility::serde::duration;

use crate::ExampleData;

/// Day names indexed by the feed's day-of-week convention
/// (0 = Sunday .. 6 = Saturday).
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub enum OpenStatus {
    Open,
    Closed,
}

impl OpenStatus {
    pub fn from_bool(value: bool) -> Self {
        if value {
            Self::Open
        } else {
            Self::Closed
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// One day's opening window. Times travel as `PT<H>H<M>M` strings and
/// are held as minutes since midnight.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoursEntry {
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: u8,
    #[serde(with = "duration")]
    #[schemars(schema_with = "duration::schema")]
    pub open_time: u32,
    #[serde(with = "duration")]
    #[schemars(schema_with = "duration::schema")]
    pub close_time: u32,
}

impl HoursEntry {
    /// Whether this window covers the given minute of the day.
    ///
    /// A closing time numerically before the opening time means the
    /// window spans midnight (open 22:00, close 02:00). Both window
    /// kinds are half-open: open exactly at the opening minute, closed
    /// exactly at the closing minute.
    pub fn contains_minute(&self, minute: u32) -> bool {
        if self.close_time < self.open_time {
            minute >= self.open_time || minute < self.close_time
        } else {
            minute >= self.open_time && minute < self.close_time
        }
    }

    /// Display form of the window, e.g. "6:00 AM - 6:00 PM".
    pub fn summary(&self) -> String {
        format!(
            "{} - {}",
            format_clock_time(self.open_time),
            format_clock_time(self.close_time)
        )
    }
}

impl ExampleData for HoursEntry {
    fn example_data() -> Self {
        Self {
            day_of_week: 3,
            open_time: 360,
            close_time: 1080,
        }
    }
}

/// First entry listed for the given day wins; the feed carries at most
/// one per day, duplicates beyond that are ignored.
pub fn entry_for_day(entries: &[HoursEntry], day_of_week: u8) -> Option<&HoursEntry> {
    entries.iter().find(|entry| entry.day_of_week == day_of_week)
}
