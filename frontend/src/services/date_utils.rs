use chrono::{Datelike, Months, NaiveDate};

/// Cells in the picker grid (6 weeks)
pub const CALENDAR_CELLS: usize = 42;

/// One cell of the date picker grid
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
}

/// Full English month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    }
}

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// First day of the month `delta` months away from (`year`, `month`)
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN);
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta as u32))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    }
    .unwrap_or(first);

    (shifted.year(), shifted.month())
}

/// Trips can't start in the past
pub fn is_selectable(day: NaiveDate, today: NaiveDate) -> bool {
    day >= today
}

/// Sunday-first grid for a month, padded with days of the neighbouring months
pub fn generate_calendar_days(year: i32, month: u32) -> Vec<CalendarDay> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_sunday() as u64;
    let grid_start = first - chrono::Days::new(leading);

    grid_start
        .iter_days()
        .take(CALENDAR_CELLS)
        .map(|date| CalendarDay {
            date,
            is_current_month: date.month() == month && date.year() == year,
        })
        .collect()
}
