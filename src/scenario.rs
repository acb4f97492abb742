//! Scenario runner composing the curve simulator and the advisory components
//!
//! Holds one engine configuration and evaluates clients against it, singly,
//! in parallel batches, or across several return rates.

use crate::advisory::{calculate_alignment, generate_suggestions, AlignmentResult, Suggestion};
use crate::client::ClientRecord;
use crate::config::EngineConfig;
use crate::projection::{CurveConfig, CurveSimulator, WealthCurve};
use chrono::{Datelike, Local};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Everything the engine computes for one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientReport {
    pub client_id: u32,
    /// Wealth curve from the wallet total; `None` when the client has no wallet
    pub curve: Option<WealthCurve>,
    pub alignment: Option<AlignmentResult>,
    pub suggestions: Vec<Suggestion>,
}

/// Curve for one return rate in a rate sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateScenario {
    pub rate: f64,
    pub curve: WealthCurve,
}

/// Pre-configured runner for client projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(EngineConfig::default());
/// let reports = runner.run_batch(&book.to_vec(), 2030);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: EngineConfig,
}

impl ScenarioRunner {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    /// Current local calendar year, the default projection start
    pub fn current_year() -> i32 {
        Local::now().year()
    }

    /// Run all three computations for one client
    pub fn run(&self, client: &ClientRecord, start_year: i32) -> ClientReport {
        debug!("Running client {}", client.client_id);

        let holding = client.holding_value();
        let curve = holding.map(|initial| {
            CurveSimulator::new(self.config.curve_config()).simulate_from(
                start_year,
                initial,
                &client.events,
            )
        });

        ClientReport {
            client_id: client.client_id,
            curve,
            alignment: calculate_alignment(holding, &client.goals),
            suggestions: generate_suggestions(
                &client.goals,
                &client.wallet_totals(),
                &client.insurances,
                &client.events,
                self.config.suggestion_months,
            ),
        }
    }

    /// Run many clients in parallel; reports come back in input order
    pub fn run_batch(&self, clients: &[ClientRecord], start_year: i32) -> Vec<ClientReport> {
        clients
            .par_iter()
            .map(|client| self.run(client, start_year))
            .collect()
    }

    /// Project one client's wallet under several return rates
    ///
    /// Empty when the client has no wallet.
    pub fn run_rate_scenarios(
        &self,
        client: &ClientRecord,
        rates: &[f64],
        start_year: i32,
    ) -> Vec<RateScenario> {
        let Some(initial) = client.holding_value() else {
            return Vec::new();
        };

        rates
            .iter()
            .map(|&rate| {
                let config = CurveConfig {
                    annual_rate: rate,
                    horizon: self.config.horizon(),
                };
                RateScenario {
                    rate,
                    curve: CurveSimulator::new(config).simulate_from(start_year, initial, &client.events),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::AlignmentCategory;
    use crate::client::{Event, EventFrequency, Goal, Insurance, InsuranceType, WalletEntry};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap()
    }

    fn test_client(client_id: u32) -> ClientRecord {
        let mut client = ClientRecord::new(client_id, "Carla");
        client.wallets.push(WalletEntry {
            id: 1,
            asset_class: "renda-fixa".to_string(),
            percentage: 100.0,
            total_value: 1000.0,
        });
        client.insurances.push(Insurance {
            id: 1,
            insurance_type: InsuranceType::Life,
            coverage_value: 500.0,
        });
        client.goals.push(Goal {
            id: 1,
            goal_type: "Aposentadoria".to_string(),
            target_value: 5000.0,
            target_date: date(2040, 1),
        });
        client.events.push(Event {
            id: 1,
            event_type: "Aporte".to_string(),
            value: 100.0,
            frequency: EventFrequency::Monthly,
            start_date: Some(date(2030, 1)),
        });
        client
    }

    fn runner(horizon_years: u32) -> ScenarioRunner {
        ScenarioRunner::new(EngineConfig {
            annual_rate: 0.0,
            horizon_years: Some(horizon_years),
            suggestion_months: 12,
            ..Default::default()
        })
    }

    #[test]
    fn test_run_composes_all_components() {
        let report = runner(3).run(&test_client(1), 2030);

        let curve = report.curve.unwrap();
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.value_in(2030), Some(2200.0));

        // 5000 / 1000 = 500% of holdings
        let alignment = report.alignment.unwrap();
        assert_eq!(alignment.alignment, 500.0);
        assert_eq!(alignment.category, AlignmentCategory::Verde);

        assert_eq!(report.suggestions.len(), 1);
        assert_eq!(report.suggestions[0].monthly_suggestion, Some(192));
    }

    #[test]
    fn test_client_without_wallet() {
        let mut client = test_client(2);
        client.wallets.clear();
        let report = runner(3).run(&client, 2030);

        assert!(report.curve.is_none());
        assert!(report.alignment.is_none());
        // insurance alone still counts toward suggestions
        assert_eq!(report.suggestions[0].current, Some(500.0));
    }

    #[test]
    fn test_batch_preserves_order() {
        let clients: Vec<_> = (1..=20).map(test_client).collect();
        let reports = runner(2).run_batch(&clients, 2030);

        let ids: Vec<u32> = reports.iter().map(|r| r.client_id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_rate_scenarios() {
        let runner = runner(10);
        let scenarios = runner.run_rate_scenarios(&test_client(1), &[0.03, 0.04, 0.05], 2030);
        assert_eq!(scenarios.len(), 3);

        // Higher rate should result in higher final value
        let finals: Vec<f64> = scenarios.iter().map(|s| s.curve.final_value().unwrap()).collect();
        assert!(finals[2] > finals[1] && finals[1] > finals[0]);

        let mut no_wallet = test_client(2);
        no_wallet.wallets.clear();
        assert!(runner.run_rate_scenarios(&no_wallet, &[0.04], 2030).is_empty());
    }
}
