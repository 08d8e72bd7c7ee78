use crate::date_window::{can_go_next, can_go_prev, month_days, MonthCursor};
use crate::indicators::{is_zero_alcohol_day, map_indicators, Indicator};
use crate::models::DayRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub date_str: String,
    pub day_of_month: u32,
    pub indicators: Vec<Indicator>,
    pub is_today: bool,
    pub is_weekend_sat: bool,
    pub is_weekend_sun: bool,
    /// Future or before the first tracked day.
    pub is_inactive: bool,
    pub is_zero_alcohol: bool,
    pub clickable: bool,
}

impl CalendarCell {
    pub fn css_classes(&self) -> String {
        let mut classes = vec!["day-row"];
        if self.is_inactive {
            classes.push("future");
        }
        if self.is_today {
            classes.push("today");
        }
        if self.is_weekend_sun {
            classes.push("sun");
        } else if self.is_weekend_sat {
            classes.push("sat");
        }
        if self.is_zero_alcohol {
            classes.push("no-drinks");
        }
        classes.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPage {
    pub title: String,
    pub cursor: MonthCursor,
    pub can_go_prev: bool,
    pub can_go_next: bool,
    pub cells: Vec<CalendarCell>,
}

pub fn build_calendar(
    cursor: MonthCursor,
    today: NaiveDate,
    app_start: NaiveDate,
    records: &BTreeMap<String, DayRecord>,
) -> CalendarPage {
    let cells = month_days(cursor, today, app_start)
        .into_iter()
        .map(|day| {
            let record = records.get(&day.date_str);
            CalendarCell {
                indicators: map_indicators(record),
                is_zero_alcohol: is_zero_alcohol_day(record),
                clickable: day.is_editable(),
                is_inactive: day.is_future || day.is_before_start,
                is_today: day.is_today,
                is_weekend_sat: day.is_weekend_sat,
                is_weekend_sun: day.is_weekend_sun,
                day_of_month: day.day_of_month,
                date_str: day.date_str,
            }
        })
        .collect();

    CalendarPage {
        title: cursor.title(),
        cursor,
        can_go_prev: can_go_prev(cursor, app_start),
        can_go_next: can_go_next(cursor, today),
        cells,
    }
}
