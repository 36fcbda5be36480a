//! Timestamps
//!
//! "Last updated" labels and the export file date come from a `Clock` so
//! tests can pin them.

use chrono::{Local, Utc};

/// Source of human readable timestamps
pub trait Clock {
    /// Local date and time, e.g. `Jun 5, 2025, 3:04 PM`
    fn now_label(&self) -> String;

    /// Current calendar date (UTC), e.g. `2025-06-05`
    fn today_iso(&self) -> String;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_label(&self) -> String {
        Local::now().format("%b %-d, %Y, %-I:%M %p").to_string()
    }

    fn today_iso(&self) -> String {
        Utc::now().format("%Y-%m-%d").to_string()
    }
}

/// Clock frozen at a given label and date
#[derive(Debug, Clone)]
pub struct FixedClock {
    pub label: String,
    pub date: String,
}

impl FixedClock {
    pub fn new(label: impl Into<String>, date: impl Into<String>) -> Self {
        Self { label: label.into(), date: date.into() }
    }
}

impl Clock for FixedClock {
    fn now_label(&self) -> String {
        self.label.clone()
    }

    fn today_iso(&self) -> String {
        self.date.clone()
    }
}
