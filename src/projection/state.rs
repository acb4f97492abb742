//! Running state of a wealth curve simulation

use super::schedule::month_start;
use chrono::NaiveDateTime;

/// Balance and calendar position during a simulation
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Current calendar year
    pub year: i32,

    /// Current calendar month (1-12), 0 before the first step
    pub month: u32,

    /// Months simulated so far
    pub months_elapsed: u32,

    /// Running balance, before rounding
    pub balance: f64,

    /// Total event flows applied so far
    pub cumulative_flows: f64,
}

impl SimulationState {
    /// State positioned just before January of `start_year`
    pub fn new(start_year: i32, initial_value: f64) -> Self {
        Self {
            year: start_year,
            month: 0,
            months_elapsed: 0,
            balance: initial_value,
            cumulative_flows: 0.0,
        }
    }

    /// Advance to the next calendar month, rolling into the next year after December
    pub fn advance_month(&mut self) {
        if self.month == 12 {
            self.year += 1;
            self.month = 1;
        } else {
            self.month += 1;
        }
        self.months_elapsed += 1;
    }

    /// Midnight on the 1st of the current month
    pub fn month_start(&self) -> Option<NaiveDateTime> {
        month_start(self.year, self.month)
    }

    /// Add this month's event flows, then compound for the month
    pub fn apply_month(&mut self, flows: f64, monthly_rate: f64) {
        self.balance += flows;
        self.cumulative_flows += flows;
        self.balance *= 1.0 + monthly_rate;
    }

    pub fn is_year_end(&self) -> bool {
        self.month == 12
    }
}
