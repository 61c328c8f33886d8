use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::calendar::Calendar;
use crate::error::CalendarError;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    pub calendar: Option<CalendarConfig>,
    pub labels:   Option<LabelConfig>,
}

#[derive(Debug, Deserialize)]
pub struct CalendarConfig {
    /// 0 = Sunday ..= 6 = Saturday.
    pub first_week_day: Option<u32>,
    pub weekend:        Option<Vec<u32>>,
}

/// Label lists as written in the config file; see [`Labels`].
#[derive(Debug, Deserialize)]
pub struct LabelConfig {
    /// Sunday first, regardless of the configured first week day.
    pub week_days: Option<Vec<String>>,
    pub months:    Option<Vec<String>>,
}

impl AppConfig {
    /// Reads `config.toml` from the user config directory; a missing file
    /// yields the defaults.
    pub fn load() -> Result<Self> {
        let path = config_dir().join("config.toml");
        if path.exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(AppConfig::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let cfg = Self::parse(&text).with_context(|| format!("parsing {}", path.display()))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// A calendar using the configured week layout. `first_week_day`
    /// overrides the file when given.
    pub fn calendar(&self, first_week_day: Option<u32>) -> Result<Calendar, CalendarError> {
        let mut builder = Calendar::builder();
        if let Some(ref c) = self.calendar {
            if let Some(d) = c.first_week_day { builder = builder.first_week_day(d); }
            if let Some(ref w) = c.weekend    { builder = builder.weekend(w.iter().copied()); }
        }
        if let Some(d) = first_week_day { builder = builder.first_week_day(d); }
        builder.build()
    }

    pub fn labels(&self) -> Result<Labels, CalendarError> {
        let mut labels = Labels::default();
        let Some(ref l) = self.labels else { return Ok(labels) };

        if let Some(ref w) = l.week_days {
            labels.week_days = fixed("week day", w)?;
        }
        if let Some(ref m) = l.months {
            labels.months = fixed("month", m)?;
        }
        Ok(labels)
    }
}

fn fixed<const N: usize>(kind: &'static str, list: &[String]) -> Result<[String; N], CalendarError> {
    <[String; N]>::try_from(list.to_vec())
        .map_err(|v| CalendarError::LabelCount { kind, expected: N, found: v.len() })
}

// ─── Labels ───────────────────────────────────────────────────────────────────

/// Display strings for week days (Sunday first) and months (January first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub week_days: [String; 7],
    pub months:    [String; 12],
}

impl Labels {
    /// Label for a 0 (Sunday) ..= 6 (Saturday) index.
    pub fn week_day(&self, week_day_index: u32) -> &str {
        &self.week_days[(week_day_index % 7) as usize]
    }

    /// Label for a 1-based month; out-of-range months wrap.
    pub fn month(&self, month: i32) -> &str {
        &self.months[(month - 1).rem_euclid(12) as usize]
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            week_days: ["S", "M", "T", "W", "T", "F", "S"].map(String::from),
            months: [
                "January", "February", "March",     "April",   "May",      "June",
                "July",    "August",   "September", "October", "November", "December",
            ].map(String::from),
        }
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("monthview")
}
