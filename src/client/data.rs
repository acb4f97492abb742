//! Client record structures consumed by the projection and advisory engine

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How often a scheduled cash-flow event repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventFrequency {
    /// Single cash flow in the start month
    Once,
    /// Every month from the start date onward
    Monthly,
    /// Every year in the start month, from the start date onward
    Annual,
}

impl EventFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventFrequency::Once => "ONCE",
            EventFrequency::Monthly => "MONTHLY",
            EventFrequency::Annual => "ANNUAL",
        }
    }
}

impl FromStr for EventFrequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ONCE" => Ok(EventFrequency::Once),
            "MONTHLY" => Ok(EventFrequency::Monthly),
            "ANNUAL" => Ok(EventFrequency::Annual),
            other => Err(Error::UnknownFrequency(other.to_string())),
        }
    }
}

impl fmt::Display for EventFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of insurance coverage counted toward goal resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InsuranceType {
    Life,
    Disability,
}

impl FromStr for InsuranceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LIFE" => Ok(InsuranceType::Life),
            "DISABILITY" => Ok(InsuranceType::Disability),
            other => Err(Error::UnknownInsuranceType(other.to_string())),
        }
    }
}

/// A financial target the client wants to reach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: u32,
    #[serde(rename = "type")]
    pub goal_type: String,
    pub target_value: f64,
    pub target_date: NaiveDateTime,
}

/// A one-time or recurring cash flow affecting projected wealth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u32,
    #[serde(rename = "type")]
    pub event_type: String,
    pub value: f64,
    pub frequency: EventFrequency,
    /// Events without a start date never apply
    pub start_date: Option<NaiveDateTime>,
}

/// Insurance coverage held by the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insurance {
    pub id: u32,
    #[serde(rename = "type")]
    pub insurance_type: InsuranceType,
    pub coverage_value: f64,
}

/// One wallet allocation row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletEntry {
    pub id: u32,
    pub asset_class: String,
    /// Share of the portfolio in this asset class (0-100)
    pub percentage: f64,
    pub total_value: f64,
}

/// Consistent snapshot of everything the engine needs for one client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub client_id: u32,
    pub name: String,
    pub wallets: Vec<WalletEntry>,
    pub goals: Vec<Goal>,
    pub events: Vec<Event>,
    pub insurances: Vec<Insurance>,
}

impl ClientRecord {
    pub fn new(client_id: u32, name: impl Into<String>) -> Self {
        Self {
            client_id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sum of all wallet totals, or `None` when the client has no wallet on record
    pub fn holding_value(&self) -> Option<f64> {
        if self.wallets.is_empty() {
            None
        } else {
            Some(self.wallet_totals().iter().sum())
        }
    }

    /// Per-row wallet totals
    pub fn wallet_totals(&self) -> Vec<f64> {
        self.wallets.iter().map(|w| w.total_value).collect()
    }

    /// Total insurance coverage across all policies
    pub fn insurance_coverage(&self) -> f64 {
        self.insurances.iter().map(|i| i.coverage_value).sum()
    }
}
