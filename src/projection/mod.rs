//! Wealth curve projection: monthly compounding with scheduled cash-flow events

mod state;
mod engine;
mod curve;
pub mod rates;
pub mod schedule;

pub use state::SimulationState;
pub use engine::{simulate_curve, CurveConfig, CurveSimulator, Horizon, DEFAULT_TERMINAL_YEAR};
pub use curve::{CurveSummary, ProjectionPoint, WealthCurve};
pub use rates::{effective_monthly_rate, DEFAULT_ANNUAL_RATE};
