//! In-memory record of computed simulations
//!
//! Each record keeps the curve together with the parameters that produced
//! it, so a past run can be shown again without recomputing.

use crate::client::ClientRecord;
use crate::error::{Error, Result};
use crate::projection::{CurveConfig, CurveSimulator, Horizon, WealthCurve, DEFAULT_ANNUAL_RATE};
use chrono::{Local, NaiveDateTime};
use log::debug;
use serde::{Deserialize, Serialize};

/// A stored simulation and its inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRecord {
    pub id: u64,
    pub client_id: u32,
    pub rate: f64,
    pub initial_value: f64,
    pub curve: WealthCurve,
    pub created_at: NaiveDateTime,
}

/// Simulation records across clients, ids assigned in creation order
#[derive(Debug, Clone)]
pub struct SimulationHistory {
    records: Vec<SimulationRecord>,
    next_id: u64,
    horizon: Horizon,
}

impl SimulationHistory {
    pub fn new() -> Self {
        Self::with_horizon(Horizon::default())
    }

    /// History whose simulations use the given horizon
    pub fn with_horizon(horizon: Horizon) -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            horizon,
        }
    }

    /// Simulate the client's wallet total and store the result
    ///
    /// Fails with [`Error::WalletNotFound`] when the client has no wallet rows.
    pub fn record(
        &mut self,
        client: &ClientRecord,
        rate: Option<f64>,
        start_year: i32,
    ) -> Result<&SimulationRecord> {
        let initial_value = client
            .holding_value()
            .ok_or(Error::WalletNotFound(client.client_id))?;
        let rate = rate.unwrap_or(DEFAULT_ANNUAL_RATE);

        let simulator = CurveSimulator::new(CurveConfig {
            annual_rate: rate,
            horizon: self.horizon,
        });
        let curve = simulator.simulate_from(start_year, initial_value, &client.events);

        let id = self.next_id;
        self.next_id += 1;
        debug!("Recording simulation {} for client {}", id, client.client_id);

        self.records.push(SimulationRecord {
            id,
            client_id: client.client_id,
            rate,
            initial_value,
            curve,
            created_at: Local::now().naive_local(),
        });

        Ok(&self.records[self.records.len() - 1])
    }

    /// A client's simulations, most recent first
    pub fn for_client(&self, client_id: u32) -> Vec<&SimulationRecord> {
        self.records
            .iter()
            .rev()
            .filter(|r| r.client_id == client_id)
            .collect()
    }

    pub fn get(&self, id: u64) -> Option<&SimulationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for SimulationHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::WalletEntry;

    fn client_with_wallet(client_id: u32, total_value: f64) -> ClientRecord {
        let mut client = ClientRecord::new(client_id, "Bruno");
        client.wallets.push(WalletEntry {
            id: 1,
            asset_class: "renda-fixa".to_string(),
            percentage: 100.0,
            total_value,
        });
        client
    }

    #[test]
    fn test_missing_wallet_is_an_error() {
        let mut history = SimulationHistory::new();
        let client = ClientRecord::new(4, "Sem carteira");

        assert!(matches!(
            history.record(&client, None, 2030),
            Err(Error::WalletNotFound(4))
        ));
        assert!(history.is_empty());
    }

    #[test]
    fn test_record_keeps_parameters() {
        let mut history = SimulationHistory::new();
        let client = client_with_wallet(1, 1000.0);

        let record = history.record(&client, None, 2030).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.rate, DEFAULT_ANNUAL_RATE);
        assert_eq!(record.initial_value, 1000.0);
        assert_eq!(record.curve.first_year(), Some(2030));
        assert_eq!(record.curve.last_year(), Some(2060));
    }

    #[test]
    fn test_listing_is_most_recent_first() {
        let mut history = SimulationHistory::with_horizon(Horizon::Years(5));
        let ana = client_with_wallet(1, 1000.0);
        let bia = client_with_wallet(2, 2000.0);

        history.record(&ana, Some(0.03), 2030).unwrap();
        history.record(&bia, Some(0.05), 2030).unwrap();
        history.record(&ana, Some(0.08), 2030).unwrap();

        let rates: Vec<f64> = history.for_client(1).iter().map(|r| r.rate).collect();
        assert_eq!(rates, vec![0.08, 0.03]);
        assert_eq!(history.for_client(2).len(), 1);
        assert!(history.for_client(3).is_empty());

        assert_eq!(history.get(2).map(|r| r.client_id), Some(2));
        assert!(history.get(99).is_none());
        assert_eq!(history.get(3).unwrap().curve.len(), 5);
    }
}
