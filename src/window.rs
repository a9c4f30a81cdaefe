//! Inclusive calendar-day filtering shared by every time-windowed view.

use chrono::{DateTime, NaiveDate, Utc};

/// A pair of optional calendar-day bounds. The lower bound is inclusive from
/// the start day's midnight; the upper bound is inclusive through the entire
/// end day, so a window with `start == end` covers that whole day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// No bounds on either side; every record passes. Presentation layers
    /// label this "all data", distinct from an explicit zero-width window.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        let day = at.date_naive();
        self.start.is_none_or(|start| day >= start) && self.end.is_none_or(|end| day <= end)
    }
}
