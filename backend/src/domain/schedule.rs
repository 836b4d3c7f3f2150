//! Schedule domain logic: date-bucket classification and time display.
//!
//! Appointments are badged by how close they are to a reference date
//! (normally today). Buckets are evaluated in a fixed order because the
//! Today and This Week ranges overlap — an appointment on the reference
//! date is Today, never This Week.
//!
//! Weeks are Sunday-indexed: the current week runs from the Sunday on or
//! before the reference date through the following Saturday. All
//! comparisons are at calendar-day precision; no timezone handling.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};

/// Proximity bucket for an appointment date relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBucket {
    Today,
    Tomorrow,
    ThisWeek,
    NextWeek,
    None,
}

impl DateBucket {
    /// Badge text shown next to an appointment row. `None` renders empty.
    pub fn label(self) -> &'static str {
        match self {
            DateBucket::Today => "Today",
            DateBucket::Tomorrow => "Tomorrow",
            DateBucket::ThisWeek => "This Week",
            DateBucket::NextWeek => "Next Week",
            DateBucket::None => "",
        }
    }
}

/// Sunday-indexed week boundaries around a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekBounds {
    pub start_of_week: NaiveDate,
    pub end_of_week: NaiveDate,
    pub start_of_next_week: NaiveDate,
    pub end_of_next_week: NaiveDate,
}

/// Compute the current and next week ranges for a reference date.
/// The week starts on the Sunday on or before `reference`.
pub fn week_bounds(reference: NaiveDate) -> WeekBounds {
    let weekday_index = reference.weekday().num_days_from_sunday() as i64;
    let start_of_week = reference - Duration::days(weekday_index);
    let end_of_week = start_of_week + Duration::days(6);
    let start_of_next_week = end_of_week + Duration::days(1);
    let end_of_next_week = start_of_next_week + Duration::days(6);
    WeekBounds {
        start_of_week,
        end_of_week,
        start_of_next_week,
        end_of_next_week,
    }
}

/// Classify a target date against a reference date. First match wins:
/// Today, Tomorrow, This Week (inclusive), Next Week (inclusive), None.
pub fn classify(reference: NaiveDate, target: NaiveDate) -> DateBucket {
    let tomorrow = reference + Duration::days(1);
    let bounds = week_bounds(reference);

    if target == reference {
        DateBucket::Today
    } else if target == tomorrow {
        DateBucket::Tomorrow
    } else if target >= bounds.start_of_week && target <= bounds.end_of_week {
        DateBucket::ThisWeek
    } else if target >= bounds.start_of_next_week && target <= bounds.end_of_next_week {
        DateBucket::NextWeek
    } else {
        DateBucket::None
    }
}

/// Render a time of day in 12-hour form, e.g. 14:05 → "2:05 PM".
pub fn format_time_12h(time: NaiveTime) -> String {
    let hour = time.hour();
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour12, time.minute(), meridiem)
}
