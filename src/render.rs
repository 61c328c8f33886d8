//! Plain-text month grid for terminals.
use std::fmt;
use std::io;

use crate::calendar::{CalendarDay, CalendarMonth};
use crate::config::Labels;

/// How cells are separated on a line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Columns {
    /// Cells joined by tabs.
    #[default]
    Tabs,
    /// Cells right-aligned in four-character columns.
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print days of the neighbouring months instead of blanks.
    pub show_overflow:   bool,
    /// Wrap today's number in brackets.
    pub highlight_today: bool,
    pub columns:         Columns,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { show_overflow: true, highlight_today: true, columns: Columns::Tabs }
    }
}

/// A month laid out as a title, a week-day header and one line per week.
pub struct MonthGrid<'a> {
    month:   &'a CalendarMonth,
    labels:  &'a Labels,
    options: RenderOptions,
}

impl<'a> MonthGrid<'a> {
    pub fn new(month: &'a CalendarMonth, labels: &'a Labels, options: RenderOptions) -> Self {
        Self { month, labels, options }
    }

    /// Streams the grid line by line.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    fn cell(&self, day: &CalendarDay) -> String {
        if !self.options.show_overflow && !self.month.contains(day) {
            return String::new();
        }
        if self.options.highlight_today && day.is_today() {
            format!("[{}]", day.day())
        } else {
            day.day().to_string()
        }
    }

    fn write_row<I>(&self, f: &mut fmt::Formatter<'_>, cells: I) -> fmt::Result
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let line = match self.options.columns {
            Columns::Tabs  => cells.into_iter().map(|c| c.to_string()).collect::<Vec<_>>().join("\t"),
            Columns::Fixed => cells.into_iter().map(|c| format!("{c:>4}")).collect::<String>(),
        };
        writeln!(f, "{}", line.trim_end())
    }
}

impl fmt::Display for MonthGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.month.first_day();
        let last  = self.month.last_day();
        // The title names the month the 1st falls in, so 2016-13 reads "January 2017".
        let anchor = CalendarDay::new(self.month.calendar(), self.month.year(), self.month.month(), 1);
        writeln!(f, "{} {}", self.labels.month(anchor.month() as i32), anchor.year())?;

        let order = self.month.calendar().week_day_order();
        self.write_row(f, order.iter().map(|&i| self.labels.week_day(i)))?;

        tracing::trace!(first = %first, last = %last, "rendering month grid");
        for week in self.month.weeks() {
            self.write_row(f, week.iter().map(|d| self.cell(d)))?;
        }
        Ok(())
    }
}

/// Renders a whole month into a string.
pub fn render_month(month: &CalendarMonth, labels: &Labels, options: RenderOptions) -> String {
    MonthGrid::new(month, labels, options).to_string()
}
