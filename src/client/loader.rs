//! Load client records from per-entity CSV files
//!
//! A data directory holds `clients.csv`, `wallets.csv`, `goals.csv`,
//! `events.csv` and `insurance.csv`. Every file is optional; a missing file
//! contributes no rows. Rows are grouped by `client_id` into a [`ClientBook`].

use super::{ClientRecord, Event, EventFrequency, Goal, Insurance, InsuranceType, WalletEntry};
use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::Reader;
use log::{info, warn};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to the client data directory
pub const DEFAULT_DATA_PATH: &str = "data/clients";

pub const CLIENTS_FILE: &str = "clients.csv";
pub const WALLETS_FILE: &str = "wallets.csv";
pub const GOALS_FILE: &str = "goals.csv";
pub const EVENTS_FILE: &str = "events.csv";
pub const INSURANCE_FILE: &str = "insurance.csv";

#[derive(Debug, serde::Deserialize)]
struct ClientRow {
    client_id: u32,
    name: String,
}

#[derive(Debug, serde::Deserialize)]
struct WalletRow {
    client_id: u32,
    id: u32,
    asset_class: String,
    percentage: f64,
    total_value: f64,
}

#[derive(Debug, serde::Deserialize)]
struct GoalRow {
    client_id: u32,
    id: u32,
    #[serde(rename = "type")]
    goal_type: String,
    target_value: f64,
    target_date: String,
}

#[derive(Debug, serde::Deserialize)]
struct EventRow {
    client_id: u32,
    id: u32,
    #[serde(rename = "type")]
    event_type: String,
    value: f64,
    frequency: String,
    #[serde(default)]
    start_date: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct InsuranceRow {
    client_id: u32,
    id: u32,
    #[serde(rename = "type")]
    insurance_type: String,
    coverage_value: f64,
}

/// Row-level rejection, turned into [`Error::InvalidRecord`] with file and line
type RowResult<T> = std::result::Result<T, String>;

impl WalletRow {
    fn into_entry(self) -> RowResult<(u32, WalletEntry)> {
        require_label("asset_class", &self.asset_class)?;
        if !(0.0..=100.0).contains(&self.percentage) {
            return Err(format!("percentage {} outside [0, 100]", self.percentage));
        }
        if self.total_value < 0.0 {
            return Err(format!("total_value {} is negative", self.total_value));
        }
        Ok((
            self.client_id,
            WalletEntry {
                id: self.id,
                asset_class: self.asset_class,
                percentage: self.percentage,
                total_value: self.total_value,
            },
        ))
    }
}

impl GoalRow {
    fn into_goal(self) -> RowResult<(u32, Goal)> {
        require_label("type", &self.goal_type)?;
        require_positive("target_value", self.target_value)?;
        let target_date = parse_timestamp(&self.target_date)?;
        Ok((
            self.client_id,
            Goal {
                id: self.id,
                goal_type: self.goal_type,
                target_value: self.target_value,
                target_date,
            },
        ))
    }
}

impl EventRow {
    fn into_event(self) -> RowResult<(u32, Event)> {
        require_label("type", &self.event_type)?;
        require_positive("value", self.value)?;
        let frequency: EventFrequency = self.frequency.parse().map_err(|e: Error| e.to_string())?;
        let start_date = match self.start_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_timestamp(raw)?),
        };
        Ok((
            self.client_id,
            Event {
                id: self.id,
                event_type: self.event_type,
                value: self.value,
                frequency,
                start_date,
            },
        ))
    }
}

impl InsuranceRow {
    fn into_insurance(self) -> RowResult<(u32, Insurance)> {
        let insurance_type: InsuranceType =
            self.insurance_type.parse().map_err(|e: Error| e.to_string())?;
        require_positive("coverage_value", self.coverage_value)?;
        Ok((
            self.client_id,
            Insurance {
                id: self.id,
                insurance_type,
                coverage_value: self.coverage_value,
            },
        ))
    }
}

fn require_label(field: &str, value: &str) -> RowResult<()> {
    if value.trim().is_empty() {
        Err(format!("{} must not be empty", field))
    } else {
        Ok(())
    }
}

fn require_positive(field: &str, value: f64) -> RowResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be positive, got {}", field, value))
    }
}

/// Parse an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS` or a plain date
///
/// RFC 3339 values are normalized to UTC wall-clock time.
pub fn parse_timestamp(raw: &str) -> RowResult<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid date '{}'", raw))
}

/// Deserialize every row of a CSV stream and convert it, tagging failures with file and line
fn read_rows<R, Row, T, F>(reader: R, file: &str, convert: F) -> Result<Vec<T>>
where
    R: Read,
    Row: DeserializeOwned,
    F: Fn(Row) -> RowResult<T>,
{
    let mut csv_reader = Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: Row = record.deserialize(Some(&headers))?;
        let converted = convert(row).map_err(|reason| Error::InvalidRecord {
            file: file.to_string(),
            line,
            reason,
        })?;
        rows.push(converted);
    }

    Ok(rows)
}

/// Load `(client_id, name)` pairs from any reader
pub fn load_clients_from_reader<R: Read>(reader: R) -> Result<Vec<(u32, String)>> {
    read_rows(reader, CLIENTS_FILE, |row: ClientRow| Ok((row.client_id, row.name)))
}

/// Load wallet rows keyed by client from any reader
pub fn load_wallets_from_reader<R: Read>(reader: R) -> Result<Vec<(u32, WalletEntry)>> {
    read_rows(reader, WALLETS_FILE, WalletRow::into_entry)
}

/// Load goal rows keyed by client from any reader
pub fn load_goals_from_reader<R: Read>(reader: R) -> Result<Vec<(u32, Goal)>> {
    read_rows(reader, GOALS_FILE, GoalRow::into_goal)
}

/// Load event rows keyed by client from any reader
pub fn load_events_from_reader<R: Read>(reader: R) -> Result<Vec<(u32, Event)>> {
    read_rows(reader, EVENTS_FILE, EventRow::into_event)
}

/// Load insurance rows keyed by client from any reader
pub fn load_insurance_from_reader<R: Read>(reader: R) -> Result<Vec<(u32, Insurance)>> {
    read_rows(reader, INSURANCE_FILE, InsuranceRow::into_insurance)
}

/// Open a file in the data directory, or `None` when it does not exist
fn open_optional(dir: &Path, name: &str) -> Result<Option<File>> {
    let path = dir.join(name);
    if path.exists() {
        Ok(Some(File::open(path)?))
    } else {
        Ok(None)
    }
}

/// All client records loaded from a data directory, ordered by client id
#[derive(Debug, Clone, Default)]
pub struct ClientBook {
    clients: BTreeMap<u32, ClientRecord>,
}

impl ClientBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every entity file from a directory
    pub fn load_from<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut book = Self::new();

        if let Some(file) = open_optional(dir, CLIENTS_FILE)? {
            for (client_id, name) in load_clients_from_reader(file)? {
                book.declare(client_id, name);
            }
        }
        if let Some(file) = open_optional(dir, WALLETS_FILE)? {
            book.add_wallets(load_wallets_from_reader(file)?);
        }
        if let Some(file) = open_optional(dir, GOALS_FILE)? {
            book.add_goals(load_goals_from_reader(file)?);
        }
        if let Some(file) = open_optional(dir, EVENTS_FILE)? {
            book.add_events(load_events_from_reader(file)?);
        }
        if let Some(file) = open_optional(dir, INSURANCE_FILE)? {
            book.add_insurances(load_insurance_from_reader(file)?);
        }

        info!("Loaded {} clients from {}", book.len(), dir.display());
        Ok(book)
    }

    /// Load from the default data directory
    pub fn load_default() -> Result<Self> {
        Self::load_from(DEFAULT_DATA_PATH)
    }

    /// Register a client by id and name, keeping any rows already attached
    pub fn declare(&mut self, client_id: u32, name: impl Into<String>) {
        let name = name.into();
        self.clients
            .entry(client_id)
            .and_modify(|c| c.name = name.clone())
            .or_insert_with(|| ClientRecord::new(client_id, name));
    }

    fn entry(&mut self, client_id: u32) -> &mut ClientRecord {
        self.clients.entry(client_id).or_insert_with(|| {
            warn!("Client {} referenced before it was declared", client_id);
            ClientRecord::new(client_id, "")
        })
    }

    pub fn add_wallets(&mut self, rows: Vec<(u32, WalletEntry)>) {
        for (client_id, wallet) in rows {
            self.entry(client_id).wallets.push(wallet);
        }
    }

    pub fn add_goals(&mut self, rows: Vec<(u32, Goal)>) {
        for (client_id, goal) in rows {
            self.entry(client_id).goals.push(goal);
        }
    }

    pub fn add_events(&mut self, rows: Vec<(u32, Event)>) {
        for (client_id, event) in rows {
            self.entry(client_id).events.push(event);
        }
    }

    pub fn add_insurances(&mut self, rows: Vec<(u32, Insurance)>) {
        for (client_id, insurance) in rows {
            self.entry(client_id).insurances.push(insurance);
        }
    }

    pub fn get(&self, client_id: u32) -> Option<&ClientRecord> {
        self.clients.get(&client_id)
    }

    /// Look up a client, failing with [`Error::ClientNotFound`]
    pub fn require(&self, client_id: u32) -> Result<&ClientRecord> {
        self.get(client_id).ok_or(Error::ClientNotFound(client_id))
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClientRecord> {
        self.clients.values()
    }

    /// Clients in id order, as an owned list for batch runs
    pub fn to_vec(&self) -> Vec<ClientRecord> {
        self.clients.values().cloned().collect()
    }
}
