//! Configuration errors. The calendar arithmetic itself never fails.

/// Error type for building a [`Calendar`](crate::Calendar) or its display labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// First day of the week outside 0 (Sunday) ..= 6 (Saturday).
    #[error("first week day must be in 0..=6, got {value}")]
    InvalidFirstWeekDay {
        /// The rejected value.
        value: u32,
    },

    /// A weekend member outside 0 (Sunday) ..= 6 (Saturday).
    #[error("weekend day must be in 0..=6, got {value}")]
    InvalidWeekendDay {
        /// The rejected value.
        value: u32,
    },

    /// A label list with the wrong number of entries.
    #[error("expected {expected} {kind} labels, got {found}")]
    LabelCount {
        /// Which label list ("week day" or "month").
        kind: &'static str,
        /// Required number of labels.
        expected: usize,
        /// Number of labels supplied.
        found: usize,
    },
}
