use chrono::{Datelike, NaiveDate};
use std::fmt;

use super::rollover::{days_in_month, normalize};
use super::{Calendar, CalendarDay};

/// One (year, month) pair and the week-aligned range of days shown for it.
///
/// Nothing is cached: every call to [`days`](Self::days) recomputes the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    calendar: Calendar,
    year:     i32,
    month:    i32,
}

impl CalendarMonth {
    /// `month` is 1-based. Values outside 1..=12 are kept as given and resolved
    /// through date rollover when days are computed.
    pub fn new(calendar: &Calendar, year: i32, month: i32) -> Self {
        Self { calendar: *calendar, year, month }
    }

    pub fn calendar(&self)    -> &Calendar { &self.calendar }
    pub fn year(&self)        -> i32 { self.year }
    pub fn month(&self)       -> i32 { self.month }
    /// 0-based; widened so that `i32::MIN` months stay exact.
    pub fn month_index(&self) -> i64 { i64::from(self.month) - 1 }

    pub fn is_current_month(&self) -> bool {
        let today = self.calendar.today_date();
        self.year == today.year() && self.month == today.month() as i32
    }

    /// Number of calendar days in the month itself, overflow excluded.
    pub fn day_count(&self) -> u32 {
        let first = self.first_of_month();
        days_in_month(first.year(), first.month())
    }

    /// True for days of this month, false for the overflow days around it.
    pub fn contains(&self, day: &CalendarDay) -> bool {
        let first = self.first_of_month();
        day.year() == first.year() && day.month() == first.month()
    }

    // The 1st of the month after rollover; saturates at the representable range.
    fn first_of_month(&self) -> NaiveDate { normalize(self.year, self.month, 1) }

    // ── Range ─────────────────────────────────────────────────────────────────

    /// First day of the week containing the 1st of the month.
    pub fn first_day(&self) -> CalendarDay {
        CalendarDay::from_date(&self.calendar, self.first_of_month()).first_day_of_week()
    }

    /// Last day of the week containing the month's last day.
    pub fn last_day(&self) -> CalendarDay {
        // Day 0 of the following month is the last day of this one.
        let first = self.first_of_month();
        CalendarDay::new(&self.calendar, first.year(), first.month() as i32 + 1, 0)
            .last_day_of_week()
    }

    /// Every day from [`first_day`](Self::first_day) to
    /// [`last_day`](Self::last_day) inclusive; whole weeks except where the
    /// range is clipped at `NaiveDate::MIN` / `NaiveDate::MAX`.
    pub fn days(&self) -> Vec<CalendarDay> {
        let first = self.first_day();
        let last  = self.last_day();

        let mut days = Vec::with_capacity(42);
        let mut day  = first;
        loop {
            days.push(day);
            if day == last { break; }
            day = day.next();
        }

        tracing::trace!(
            year = self.year,
            month = self.month,
            first = %first,
            count = days.len(),
            "month range computed"
        );
        days
    }

    /// [`days`](Self::days) split into rows of seven.
    pub fn weeks(&self) -> Vec<Vec<CalendarDay>> {
        self.days().chunks(7).map(<[CalendarDay]>::to_vec).collect()
    }

    // ── Navigation ────────────────────────────────────────────────────────────
    pub fn previous(&self) -> CalendarMonth { self.shift(-1) }
    pub fn next(&self)     -> CalendarMonth { self.shift(1) }

    fn shift(&self, delta: i64) -> CalendarMonth {
        let months = i64::from(self.year) * 12 + i64::from(self.month) - 1 + delta;
        let year   = months.div_euclid(12).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let month  = (months.rem_euclid(12) + 1) as i32;
        CalendarMonth::new(&self.calendar, year, month)
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar() -> Calendar {
        Calendar::builder().today(ymd(2016, 5, 1)).build().unwrap()
    }

    #[test]
    fn month_index() {
        let m = CalendarMonth::new(&calendar(), 2016, 5);
        assert_eq!(m.month_index(), 4);
        assert_eq!(m.to_string(), "2016-05");
    }

    #[test]
    fn may_2016_sunday_first() {
        // 2016-05-01 is itself a Sunday, so no leading overflow.
        let m = CalendarMonth::new(&calendar(), 2016, 5);
        assert_eq!(m.first_day().date(), ymd(2016, 5, 1));
        assert_eq!(m.last_day().date(), ymd(2016, 6, 4));

        let days = m.days();
        assert_eq!(days.len(), 35);
        assert_eq!(days[0], m.first_day());
        assert_eq!(days[34], m.last_day());
    }

    #[test]
    fn april_2016_has_leading_and_trailing_overflow() {
        let m = CalendarMonth::new(&calendar(), 2016, 4);
        assert_eq!(m.first_day().date(), ymd(2016, 3, 27));
        assert_eq!(m.last_day().date(), ymd(2016, 4, 30));
        assert_eq!(m.days().len(), 35);
    }

    #[test]
    fn may_2016_monday_first() {
        let c = Calendar::builder().first_week_day(Calendar::MONDAY).build().unwrap();
        let m = CalendarMonth::new(&c, 2016, 5);
        assert_eq!(m.first_day().date(), ymd(2016, 4, 25));
        assert_eq!(m.last_day().date(), ymd(2016, 6, 5));
        assert_eq!(m.days().len(), 42);
    }

    #[test]
    fn february_2015_fits_four_weeks() {
        // 2015-02-01 is a Sunday and the month has 28 days.
        let m = CalendarMonth::new(&calendar(), 2015, 2);
        assert_eq!(m.first_day().date(), ymd(2015, 2, 1));
        assert_eq!(m.last_day().date(), ymd(2015, 2, 28));
        assert_eq!(m.days().len(), 28);
        assert_eq!(m.weeks().len(), 4);
    }

    #[test]
    fn december_spills_into_next_year() {
        let m = CalendarMonth::new(&calendar(), 2017, 12);
        assert_eq!(m.first_day().date(), ymd(2017, 11, 26));
        assert_eq!(m.last_day().date(), ymd(2018, 1, 6));
        assert_eq!(m.days().len(), 42);
    }

    #[test]
    fn is_current_month() {
        let c = calendar();
        assert!(CalendarMonth::new(&c, 2016, 5).is_current_month());
        assert!(!CalendarMonth::new(&c, 2016, 4).is_current_month());
        assert!(!CalendarMonth::new(&c, 2014, 5).is_current_month());
    }

    #[test]
    fn contains_separates_overflow() {
        let m = CalendarMonth::new(&calendar(), 2016, 6);
        let days = m.days();
        let inside = days.iter().filter(|d| m.contains(d)).count();
        assert_eq!(inside, 30);
        assert_eq!(m.day_count(), 30);
        assert!(!m.contains(&days[0]));
        assert!(!m.contains(&days[days.len() - 1]));
    }

    #[test]
    fn out_of_range_month_rolls_over() {
        let c = calendar();
        let m = CalendarMonth::new(&c, 2016, 13);
        assert_eq!(m.day_count(), 31);
        assert_eq!(m.first_day().date(), ymd(2017, 1, 1));
        assert!(m.contains(&CalendarDay::new(&c, 2017, 1, 15)));
    }

    #[test]
    fn weeks_are_rows_of_seven() {
        let m = CalendarMonth::new(&calendar(), 2016, 7);
        let weeks = m.weeks();
        assert_eq!(weeks.len(), 6);
        for week in &weeks {
            assert_eq!(week.len(), 7);
            assert!(week[0].is_first_day_of_week());
            assert!(week[6].is_last_day_of_week());
        }
    }

    #[test]
    fn extreme_months_saturate_without_overflow() {
        let c = calendar();
        for month in [i32::MAX, i32::MIN] {
            let m = CalendarMonth::new(&c, 2016, month);
            let days = m.days();
            assert_eq!(days[0], m.first_day());
            assert_eq!(days[days.len() - 1], m.last_day());
            for pair in days.windows(2) {
                assert_eq!(pair[0].next(), pair[1]);
            }
        }
        assert_eq!(CalendarMonth::new(&c, 2016, i32::MIN).month_index(), i64::from(i32::MIN) - 1);
        assert_eq!(CalendarMonth::new(&c, 2016, i32::MAX).last_day().date(), NaiveDate::MAX);
    }

    #[test]
    fn range_ending_at_latest_date_keeps_last_day() {
        let c = calendar();
        let m = CalendarMonth::new(&c, NaiveDate::MAX.year(), NaiveDate::MAX.month() as i32);
        let days = m.days();
        assert_eq!(m.last_day().date(), NaiveDate::MAX);
        assert_eq!(days[days.len() - 1].date(), NaiveDate::MAX);
        assert_eq!(days[0], m.first_day());
        assert!(days[0].is_first_day_of_week());
    }

    #[test]
    fn navigation_wraps_years() {
        let c = calendar();
        let next = CalendarMonth::new(&c, 2016, 12).next();
        assert_eq!((next.year(), next.month()), (2017, 1));

        let prev = CalendarMonth::new(&c, 2017, 1).previous();
        assert_eq!((prev.year(), prev.month()), (2016, 12));

        let mid = CalendarMonth::new(&c, 2016, 6);
        assert_eq!(mid.next().month(), 7);
        assert_eq!(mid.previous().month(), 5);
    }

    #[test]
    fn navigation_normalizes_out_of_range() {
        let c = calendar();
        let next = CalendarMonth::new(&c, 2016, 13).next();
        assert_eq!((next.year(), next.month()), (2017, 2));
        let prev = CalendarMonth::new(&c, 2016, 0).previous();
        assert_eq!((prev.year(), prev.month()), (2015, 11));
    }
}
