use chrono::{Datelike, NaiveDate};
use std::fmt;

use super::rollover::{days_in_month, normalize};
use super::Calendar;

/// One date on a calendar grid, classified against its [`Calendar`].
#[derive(Debug, Clone, Copy)]
pub struct CalendarDay {
    calendar: Calendar,
    date:     NaiveDate,
}

impl CalendarDay {
    /// Builds a day from components that may be out of range: day 0 is the last
    /// day of the previous month, month 13 is January of the next year.
    pub fn new(calendar: &Calendar, year: i32, month: i32, day: i32) -> Self {
        Self::from_date(calendar, normalize(year, month, day))
    }

    pub fn from_date(calendar: &Calendar, date: NaiveDate) -> Self {
        Self { calendar: *calendar, date }
    }

    pub fn calendar(&self) -> &Calendar { &self.calendar }
    pub fn date(&self)     -> NaiveDate { self.date }

    // ── Components ────────────────────────────────────────────────────────────
    pub fn year(&self)           -> i32 { self.date.year() }
    pub fn month_index(&self)    -> u32 { self.date.month0() }
    pub fn month(&self)          -> u32 { self.date.month() }
    pub fn day(&self)            -> u32 { self.date.day() }
    /// 0 = Sunday ..= 6 = Saturday.
    pub fn week_day_index(&self) -> u32 { self.date.weekday().num_days_from_sunday() }
    /// 1 = Sunday ..= 7 = Saturday.
    pub fn week_day(&self)       -> u32 { self.week_day_index() + 1 }

    // ── Classification ────────────────────────────────────────────────────────
    pub fn is_weekend(&self) -> bool {
        self.calendar.is_weekend_index(self.week_day_index())
    }

    pub fn is_today(&self) -> bool { self.date == self.calendar.today_date() }

    pub fn is_first_day_of_week(&self) -> bool {
        self.week_day_index() == self.calendar.first_week_day()
    }

    pub fn is_last_day_of_week(&self) -> bool {
        self.week_day_index() == self.calendar.last_week_day()
    }

    // ── Month and year boundaries ─────────────────────────────────────────────
    pub fn is_first_day_of_month(&self)  -> bool { self.day() == 1 }
    pub fn is_last_day_of_month(&self)   -> bool { self.day() == days_in_month(self.year(), self.month()) }
    pub fn is_first_month_of_year(&self) -> bool { self.month() == 1 }
    pub fn is_last_month_of_year(&self)  -> bool { self.month() == 12 }
    pub fn is_first_day_of_year(&self)   -> bool { self.is_first_month_of_year() && self.is_first_day_of_month() }
    pub fn is_last_day_of_year(&self)    -> bool { self.is_last_month_of_year() && self.is_last_day_of_month() }

    /// Same year, month and day.
    pub fn equal(&self, other: &CalendarDay) -> bool { self.date == other.date }

    // ── Navigation ────────────────────────────────────────────────────────────
    pub fn next(&self) -> CalendarDay {
        Self::new(&self.calendar, self.year(), self.month() as i32, self.day() as i32 + 1)
    }

    pub fn previous(&self) -> CalendarDay {
        Self::new(&self.calendar, self.year(), self.month() as i32, self.day() as i32 - 1)
    }

    /// Walks back to the first day of this day's week (at most six steps).
    ///
    /// Stops early at `NaiveDate::MIN`, so in the first week of the
    /// representable range the result need not fall on the first week day.
    pub fn first_day_of_week(&self) -> CalendarDay {
        let mut day = *self;
        while !day.is_first_day_of_week() {
            let previous = day.previous();
            if previous == day { break; }
            day = previous;
        }
        day
    }

    /// Walks forward to the last day of this day's week (at most six steps).
    ///
    /// Stops early at `NaiveDate::MAX`, so in the last week of the
    /// representable range the result need not fall on the last week day.
    pub fn last_day_of_week(&self) -> CalendarDay {
        let mut day = *self;
        while !day.is_last_day_of_week() {
            let next = day.next();
            if next == day { break; }
            day = next;
        }
        day
    }
}

impl PartialEq for CalendarDay {
    fn eq(&self, other: &Self) -> bool { self.equal(other) }
}

impl Eq for CalendarDay {}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))
    }
}
