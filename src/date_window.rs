//! Month grid arithmetic. Everything here is pure: the current date and the
//! first tracked date are always passed in.

use chrono::{Datelike, NaiveDate, Weekday};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn title(self) -> String {
        let name = MONTH_NAMES
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?");
        format!("{name} {}", self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDescriptor {
    pub date: NaiveDate,
    pub date_str: String,
    pub day_of_month: u32,
    pub is_today: bool,
    pub is_future: bool,
    pub is_before_start: bool,
    pub is_weekend_sat: bool,
    pub is_weekend_sun: bool,
}

impl DayDescriptor {
    pub fn is_editable(&self) -> bool {
        !self.is_future && !self.is_before_start
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let cursor = MonthCursor::new(year, month);
    let next = cursor.next();
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next.year, next.month, 1),
    ) {
        (Some(first), Some(following)) => (following - first).num_days() as u32,
        _ => 0,
    }
}

pub fn month_days(cursor: MonthCursor, today: NaiveDate, app_start: NaiveDate) -> Vec<DayDescriptor> {
    (1..=days_in_month(cursor.year, cursor.month))
        .filter_map(|day| NaiveDate::from_ymd_opt(cursor.year, cursor.month, day))
        .map(|date| DayDescriptor {
            date_str: date_key(date),
            day_of_month: date.day(),
            is_today: date == today,
            is_future: date > today,
            is_before_start: date < app_start,
            is_weekend_sat: date.weekday() == Weekday::Sat,
            is_weekend_sun: date.weekday() == Weekday::Sun,
            date,
        })
        .collect()
}

pub fn can_go_prev(cursor: MonthCursor, app_start: NaiveDate) -> bool {
    cursor != MonthCursor::of(app_start)
}

pub fn can_go_next(cursor: MonthCursor, today: NaiveDate) -> bool {
    cursor != MonthCursor::of(today)
}

pub fn is_editable(date: NaiveDate, today: NaiveDate, app_start: NaiveDate) -> bool {
    app_start <= date && date <= today
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// "November 15, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    format!("{} {}, {}", MONTH_NAMES[date.month0() as usize], date.day(), date.year())
}
