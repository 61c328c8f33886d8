//! Week-aligned month views for grid calendars.
//!
//! ```
//! use monthview::Calendar;
//!
//! let calendar = Calendar::builder().first_week_day(Calendar::MONDAY).build()?;
//! let month = calendar.month(Some(2016), Some(5));
//! assert_eq!(month.days().len() % 7, 0);
//! # Ok::<(), monthview::CalendarError>(())
//! ```
pub mod calendar;
pub mod config;
pub mod error;
pub mod render;

pub use calendar::{Calendar, CalendarBuilder, CalendarDay, CalendarMonth};
pub use error::CalendarError;
