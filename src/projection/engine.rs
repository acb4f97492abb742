//! Core simulator for year-by-year wealth curves

use crate::client::Event;
use super::curve::{ProjectionPoint, WealthCurve};
use super::rates::{effective_monthly_rate, round2, DEFAULT_ANNUAL_RATE};
use super::schedule::scheduled_flow;
use super::state::SimulationState;
use chrono::{Datelike, Local};
use log::{debug, warn};

/// Terminal year of the reference projection horizon
///
/// This is an absolute calendar year, so the projection shortens every year
/// and becomes empty once the current year passes it. Use [`Horizon::Years`]
/// for a relative horizon.
pub const DEFAULT_TERMINAL_YEAR: i32 = 2060;

/// How far a wealth curve extends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizon {
    /// Through the end of an absolute calendar year (inclusive)
    ThroughYear(i32),
    /// A fixed number of calendar years, starting with the start year
    Years(u32),
}

impl Horizon {
    /// Number of yearly points produced when starting in `start_year`
    pub fn years_from(&self, start_year: i32) -> usize {
        match *self {
            Horizon::ThroughYear(end_year) => {
                usize::try_from(i64::from(end_year) - i64::from(start_year) + 1).unwrap_or(0)
            }
            Horizon::Years(years) => years as usize,
        }
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Horizon::ThroughYear(DEFAULT_TERMINAL_YEAR)
    }
}

/// Configuration for a curve simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveConfig {
    /// Nominal annual return rate (not validated; zero and negative rates are allowed)
    pub annual_rate: f64,

    /// Projection horizon
    pub horizon: Horizon,
}

impl CurveConfig {
    pub fn with_rate(annual_rate: f64) -> Self {
        Self {
            annual_rate,
            ..Default::default()
        }
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            annual_rate: DEFAULT_ANNUAL_RATE,
            horizon: Horizon::default(),
        }
    }
}

/// Wealth curve simulator
#[derive(Debug, Clone, Default)]
pub struct CurveSimulator {
    config: CurveConfig,
}

impl CurveSimulator {
    pub fn new(config: CurveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Project from the current local calendar year
    pub fn simulate(&self, initial_value: f64, events: &[Event]) -> WealthCurve {
        self.simulate_from(Local::now().year(), initial_value, events)
    }

    /// Project from January of `start_year`
    pub fn simulate_from(&self, start_year: i32, initial_value: f64, events: &[Event]) -> WealthCurve {
        let years = self.config.horizon.years_from(start_year);
        let monthly_rate = effective_monthly_rate(self.config.annual_rate);

        debug!(
            "Simulating {} years from {} at annual rate {} ({} events)",
            years,
            start_year,
            self.config.annual_rate,
            events.len()
        );

        let dateless = events.iter().filter(|e| e.start_date.is_none()).count();
        if dateless > 0 {
            warn!("Ignoring {} events without a start date", dateless);
        }

        let mut curve = WealthCurve::with_capacity(years);
        let mut state = SimulationState::new(start_year, initial_value);

        for _ in 0..years * 12 {
            state.advance_month();
            self.calculate_month(events, &mut state, monthly_rate);

            if state.is_year_end() {
                curve.add_point(ProjectionPoint {
                    year: state.year,
                    projected_value: round2(state.balance),
                });
            }
        }

        debug!(
            "Simulated {} months, applied {:.2} in event flows",
            state.months_elapsed, state.cumulative_flows
        );

        curve
    }

    /// Apply one month: event flows land on the 1st, then the month compounds
    fn calculate_month(&self, events: &[Event], state: &mut SimulationState, monthly_rate: f64) {
        let flows = state
            .month_start()
            .map(|date| scheduled_flow(events, date))
            .unwrap_or(0.0);
        state.apply_month(flows, monthly_rate);
    }
}

/// Project `initial_value` from the current year through the default terminal year
pub fn simulate_curve(initial_value: f64, events: &[Event], annual_rate: f64) -> WealthCurve {
    CurveSimulator::new(CurveConfig::with_rate(annual_rate)).simulate(initial_value, events)
}
