use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::{
    geo,
    id::{HasId, Id},
};

use crate::{
    hours::{entry_for_day, HoursEntry, OpenStatus, DAY_NAMES},
    ExampleData, WithDistance,
};

/// One coffee shop as delivered by the dataset. Records are read-only
/// snapshots; nothing here mutates or persists them.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: Id<Shop>,
    pub name: String,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<i64>,
    /// Curated "good coffee" flag.
    #[serde(default)]
    pub is_good: bool,
    pub overview: Option<String>,
    pub description: Option<String>,
    /// Pipe-separated per-day text, e.g. "Monday: 6:00 AM – 6:00 PM|...".
    pub weekday_descriptions: Option<String>,
    #[serde(default)]
    pub hours: Vec<HoursEntry>,
}

impl HasId for Shop {
    type IdType = i32;
}

impl Shop {
    /// Open/closed state at the given local instant. A shop with no
    /// hours entry for that day of week is closed.
    pub fn check_open(&self, now: NaiveDateTime) -> OpenStatus {
        let minute = now.hour() * 60 + now.minute();
        let open = entry_for_day(&self.hours, day_index(now))
            .map(|entry| entry.contains_minute(minute))
            .unwrap_or(false);
        OpenStatus::from_bool(open)
    }

    pub fn is_open_at(&self, now: NaiveDateTime) -> bool {
        self.check_open(now).is_open()
    }

    /// Convenience wrapper reading the system clock once at the call
    /// boundary. Everything below it takes the instant as a parameter.
    pub fn is_open_now(&self) -> bool {
        self.is_open_at(Local::now().naive_local())
    }

    /// Display string for the day's hours, or "Closed" when no entry
    /// exists for that day.
    pub fn hours_on(&self, now: NaiveDateTime) -> String {
        entry_for_day(&self.hours, day_index(now))
            .map(|entry| entry.summary())
            .unwrap_or_else(|| "Closed".to_owned())
    }

    pub fn hours_today(&self) -> String {
        self.hours_on(Local::now().naive_local())
    }

    pub fn with_distance_to(self, latitude: f64, longitude: f64) -> WithDistance<Shop> {
        let distance = geo::haversine_distance(
            latitude,
            longitude,
            self.latitude,
            self.longitude,
        );
        WithDistance::new(distance, self)
    }

    /// Per-day description lines for the hours panel, with the line
    /// matching the given day flagged for highlighting. Empty when the
    /// shop carries no weekday descriptions.
    pub fn weekday_lines(&self, day_of_week: u8) -> Vec<WeekdayLine> {
        let today = DAY_NAMES.get(day_of_week as usize).copied().unwrap_or("");
        self.weekday_descriptions
            .as_deref()
            .map(|descriptions| {
                descriptions
                    .split('|')
                    .map(|line| {
                        let day_name = line.split(':').next().unwrap_or("").trim();
                        WeekdayLine {
                            text: line.trim().to_owned(),
                            is_today: day_name == today,
                        }
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// 0 = Sunday .. 6 = Saturday, the dataset's day convention.
fn day_index(now: NaiveDateTime) -> u8 {
    now.weekday().num_days_from_sunday() as u8
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayLine {
    pub text: String,
    pub is_today: bool,
}

impl ExampleData for Shop {
    fn example_data() -> Self {
        Shop {
            id: Id::new(1),
            name: "Spyhouse Coffee".to_owned(),
            address: Some("907 N Washington Ave, Minneapolis, MN 55401".to_owned()),
            latitude: 44.9889,
            longitude: -93.2767,
            website: Some("https://spyhousecoffee.com".to_owned()),
            rating: Some(4.6),
            user_ratings_total: Some(512),
            is_good: true,
            overview: None,
            description: None,
            weekday_descriptions: None,
            hours: vec![
                HoursEntry {
                    day_of_week: 0,
                    open_time: 420,
                    close_time: 1140,
                },
                HoursEntry {
                    day_of_week: 3,
                    open_time: 360,
                    close_time: 1080,
                },
            ],
        }
    }
}
