//! Wealth Advisory - projection and goal advisory engine for financial planning
//!
//! This library provides:
//! - Year-by-year wealth curves with monthly compounding and scheduled events
//! - Goal alignment scoring against current holdings
//! - Monthly savings suggestions per goal
//! - In-memory simulation history and a CSV loader for client records
//!
//! The computations are pure: callers supply client records and receive
//! plain values back.

pub mod advisory;
pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use advisory::{calculate_alignment, generate_suggestions, AlignmentCategory, AlignmentResult, Suggestion};
pub use client::{ClientBook, ClientRecord, Event, EventFrequency, Goal, Insurance, InsuranceType, WalletEntry};
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use history::{SimulationHistory, SimulationRecord};
pub use projection::{simulate_curve, CurveConfig, CurveSimulator, Horizon, ProjectionPoint, WealthCurve};
pub use scenario::{ClientReport, ScenarioRunner};
