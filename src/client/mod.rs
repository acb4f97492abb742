//! Client records supplied to the engine and their CSV loader

mod data;
pub mod loader;

pub use data::{ClientRecord, Event, EventFrequency, Goal, Insurance, InsuranceType, WalletEntry};
pub use loader::{ClientBook, DEFAULT_DATA_PATH};
