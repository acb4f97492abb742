//! Month-by-month event applicability for the curve simulator

use crate::client::{Event, EventFrequency};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Midnight on the 1st of the given month, or `None` outside chrono's range
pub fn month_start(year: i32, month: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
}

impl Event {
    /// Whether this event's value lands on the given month start
    ///
    /// - `Once`: same calendar month and year as the start date
    /// - `Monthly`: every month start on or after the start date
    /// - `Annual`: the start date's calendar month, on or after the start date
    pub fn applies_on(&self, month_start: NaiveDateTime) -> bool {
        let Some(start) = self.start_date else {
            return false;
        };

        match self.frequency {
            EventFrequency::Once => {
                month_start.year() == start.year() && month_start.month() == start.month()
            }
            EventFrequency::Monthly => month_start >= start,
            EventFrequency::Annual => month_start.month() == start.month() && month_start >= start,
        }
    }
}

/// Sum of every event value applicable on a month start
pub fn scheduled_flow(events: &[Event], month_start: NaiveDateTime) -> f64 {
    events
        .iter()
        .filter(|e| e.applies_on(month_start))
        .map(|e| e.value)
        .sum()
}
