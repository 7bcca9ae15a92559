use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A trip's date range as bound to the range picker.
///
/// Either end may be missing while the user is still picking. Each end is
/// stored as midnight UTC of the selected day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(start_of_day(from)),
            to: Some(start_of_day(to)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Both ends, if both have been picked.
    pub fn bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.bounds().is_some()
    }

    /// Apply a click on `day` and return the resulting range.
    ///
    /// First click sets `from`. A second click on or after `from` closes the
    /// range; a second click before `from` becomes the new start and the old
    /// start becomes the end. Clicking when both ends are set starts over.
    pub fn select_day(&self, day: NaiveDate) -> DateRange {
        let picked = start_of_day(day);
        match (self.from, self.to) {
            (Some(from), None) if picked >= from => DateRange { from: Some(from), to: Some(picked) },
            (Some(from), None) => DateRange { from: Some(picked), to: Some(from) },
            _ => DateRange { from: Some(picked), to: None },
        }
    }

    /// Whether `day` falls inside the (possibly half-open) selection.
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        let day = start_of_day(day);
        match (self.from, self.to) {
            (Some(from), Some(to)) => day >= from && day <= to,
            (Some(from), None) => day == from,
            _ => false,
        }
    }

    /// Human readable form used by the steps and the confirm modal.
    ///
    /// `"Nov 3 to Nov 10"` for a full range, `"Nov 3"` while only the start is
    /// picked, `None` when nothing is selected.
    pub fn display(&self) -> Option<String> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some(format!("{} to {}", short_day(from), short_day(to))),
            (Some(from), None) => Some(short_day(from)),
            _ => None,
        }
    }
}

fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

fn short_day(date: DateTime<Utc>) -> String {
    date.format("%b %-d").to_string()
}
