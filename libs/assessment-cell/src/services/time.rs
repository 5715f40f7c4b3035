// Calendar days and weeks are taken in UTC.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};

pub fn is_date_on_later_day(date: DateTime<Utc>, date_to_compare: DateTime<Utc>) -> bool {
    date > date_to_compare && !is_same_day(date, date_to_compare)
}

pub fn is_same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    start_of_day(a) == start_of_day(b)
}

/// Whole calendar days from `date_to_compare` to `date`, ignoring time of day.
pub fn calendar_days_between(date: DateTime<Utc>, date_to_compare: DateTime<Utc>) -> i64 {
    (start_of_day(date) - start_of_day(date_to_compare)).num_days()
}

pub fn is_within_days(date: DateTime<Utc>, date_to_compare: DateTime<Utc>, days: i64) -> bool {
    calendar_days_between(date, date_to_compare) <= days
}

pub fn is_within_seven_days(date: DateTime<Utc>, date_to_compare: DateTime<Utc>) -> bool {
    is_within_days(date, date_to_compare, 7)
}

pub fn is_empty<T>(items: &[T]) -> bool {
    items.is_empty()
}

pub fn start_of_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// First day of the week containing `instant`, for weeks beginning on `week_start`.
pub fn start_of_week(instant: DateTime<Utc>, week_start: Weekday) -> NaiveDate {
    let day = start_of_day(instant);
    let offset =
        (7 + day.weekday().num_days_from_sunday() - week_start.num_days_from_sunday()) % 7;
    day - Duration::days(i64::from(offset))
}
