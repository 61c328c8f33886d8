//! Week-aligned month views.
//!
//! A [`Calendar`] carries the display configuration (first day of the week,
//! weekend days) and a fixed "today". [`CalendarMonth`] picks the range of
//! days a grid shows for one month and [`CalendarDay`] classifies each of
//! them.
use chrono::{Local, NaiveDate};

use crate::error::CalendarError;

pub mod day;
pub mod month;
pub mod rollover;

pub use day::CalendarDay;
pub use month::CalendarMonth;

// ─── Calendar ─────────────────────────────────────────────────────────────────

/// Display configuration shared by every day and month derived from it.
///
/// The configuration is a handful of bytes, so days and months keep their own
/// copy instead of borrowing the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    first_week_day: u32,
    weekend:        [bool; 7],
    today:          NaiveDate,
}

impl Calendar {
    pub const SUNDAY:    u32 = 0;
    pub const MONDAY:    u32 = 1;
    pub const TUESDAY:   u32 = 2;
    pub const WEDNESDAY: u32 = 3;
    pub const THURSDAY:  u32 = 4;
    pub const FRIDAY:    u32 = 5;
    pub const SATURDAY:  u32 = 6;

    /// Sunday-first weeks, Saturday/Sunday weekend, today taken from the local clock.
    pub fn new() -> Self {
        Self {
            first_week_day: Self::SUNDAY,
            weekend:        weekend_mask(&[Self::SUNDAY, Self::SATURDAY]),
            today:          Local::now().date_naive(),
        }
    }

    pub fn builder() -> CalendarBuilder { CalendarBuilder::default() }

    // ── Configuration ─────────────────────────────────────────────────────────
    pub fn first_week_day(&self) -> u32 { self.first_week_day }

    pub fn last_week_day(&self) -> u32 {
        if self.first_week_day == Self::SUNDAY { Self::SATURDAY } else { self.first_week_day - 1 }
    }

    /// Weekend days as 0 (Sunday) ..= 6 (Saturday), ascending.
    pub fn weekend_days(&self) -> impl Iterator<Item = u32> + '_ {
        (0..7u32).filter(|&i| self.weekend[i as usize])
    }

    pub fn is_weekend_index(&self, week_day_index: u32) -> bool {
        self.weekend.get(week_day_index as usize).copied().unwrap_or(false)
    }

    /// Week day indices in display order, starting at the first day of the week.
    pub fn week_day_order(&self) -> [u32; 7] {
        let mut order = [0; 7];
        for (slot, i) in order.iter_mut().zip(0..7u32) {
            *slot = (self.first_week_day + i) % 7;
        }
        order
    }

    pub fn today_date(&self) -> NaiveDate { self.today }

    pub fn today(&self) -> CalendarDay { CalendarDay::from_date(self, self.today) }

    // ── Factories ─────────────────────────────────────────────────────────────

    /// The month to display. Omitted parts default to today's year and month.
    pub fn month(&self, year: Option<i32>, month: Option<i32>) -> CalendarMonth {
        let today = self.today();
        CalendarMonth::new(
            self,
            year.unwrap_or_else(|| today.year()),
            month.unwrap_or_else(|| today.month() as i32),
        )
    }

    pub fn current_month(&self) -> CalendarMonth { self.month(None, None) }

    /// A single day; out-of-range parts roll over into neighbouring months.
    pub fn day(&self, year: i32, month: i32, day: i32) -> CalendarDay {
        CalendarDay::new(self, year, month, day)
    }
}

impl Default for Calendar {
    fn default() -> Self { Self::new() }
}

fn weekend_mask(days: &[u32]) -> [bool; 7] {
    let mut mask = [false; 7];
    for &d in days {
        if let Some(slot) = mask.get_mut(d as usize) { *slot = true; }
    }
    mask
}

// ─── Builder ──────────────────────────────────────────────────────────────────

/// Validating constructor for [`Calendar`].
#[derive(Debug, Clone)]
pub struct CalendarBuilder {
    first_week_day: u32,
    weekend:        Vec<u32>,
    today:          Option<NaiveDate>,
}

impl Default for CalendarBuilder {
    fn default() -> Self {
        Self {
            first_week_day: Calendar::SUNDAY,
            weekend:        vec![Calendar::SUNDAY, Calendar::SATURDAY],
            today:          None,
        }
    }
}

impl CalendarBuilder {
    /// 0 = Sunday ..= 6 = Saturday.
    pub fn first_week_day(mut self, day: u32) -> Self {
        self.first_week_day = day;
        self
    }

    pub fn weekend<I: IntoIterator<Item = u32>>(mut self, days: I) -> Self {
        self.weekend = days.into_iter().collect();
        self
    }

    /// Pins "today" instead of reading the local clock at build time.
    pub fn today(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    pub fn build(self) -> Result<Calendar, CalendarError> {
        if self.first_week_day > Calendar::SATURDAY {
            return Err(CalendarError::InvalidFirstWeekDay { value: self.first_week_day });
        }
        if let Some(&value) = self.weekend.iter().find(|&&d| d > Calendar::SATURDAY) {
            return Err(CalendarError::InvalidWeekendDay { value });
        }

        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        tracing::debug!(
            first_week_day = self.first_week_day,
            weekend = ?self.weekend,
            %today,
            "calendar configured"
        );

        Ok(Calendar {
            first_week_day: self.first_week_day,
            weekend:        weekend_mask(&self.weekend),
            today,
        })
    }
}
