//! In-memory launch dataset, parsed from CSV.

use std::collections::HashSet;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use spacex_dash_common::error::{DashError, Result};
use tracing::debug;

use crate::record::{LaunchRecord, Outcome};

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";
pub const COL_FLIGHT_NUMBER: &str = "Flight Number";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";

/// Ordered, non-empty collection of launch records.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
}

/// Header positions resolved once per file.
struct ColumnIndex {
    launch_site: usize,
    payload_mass: usize,
    booster_category: usize,
    class: usize,
    flight_number: Option<usize>,
    booster_version: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| find(name).ok_or_else(|| DashError::MissingColumn(name.to_string()));

        Ok(Self {
            launch_site: require(COL_LAUNCH_SITE)?,
            payload_mass: require(COL_PAYLOAD_MASS)?,
            booster_category: require(COL_BOOSTER_CATEGORY)?,
            class: require(COL_CLASS)?,
            flight_number: find(COL_FLIGHT_NUMBER),
            booster_version: find(COL_BOOSTER_VERSION),
        })
    }
}

impl LaunchDataset {
    /// Build a dataset from already-decoded records. Fails on an empty list.
    pub fn new(records: Vec<LaunchRecord>) -> Result<Self> {
        let (min_payload, max_payload) = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(None, |acc: Option<(f64, f64)>, m| match acc {
                None => Some((m, m)),
                Some((lo, hi)) => Some((lo.min(m), hi.max(m))),
            })
            .ok_or(DashError::EmptyDataset)?;

        Ok(Self { records, min_payload, max_payload })
    }

    /// Parse CSV launch records from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let columns = ColumnIndex::from_headers(reader.headers()?)?;

        let mut records = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let row = result?;
            records.push(parse_row(&row, &columns, i + 1)?);
        }

        debug!(rows = records.len(), "Parsed launch CSV");
        Self::new(records)
    }

    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_reader(content.as_bytes())
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites in first-seen order.
    pub fn sites(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.launch_site.as_str())
            .filter(|site| seen.insert(*site))
            .collect()
    }

    /// Observed `(min, max)` payload mass in kg.
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.min_payload, self.max_payload)
    }

    pub fn records_for_site<'a>(&'a self, site: &'a str) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
        self.records.iter().filter(move |r| r.launch_site == site)
    }
}

fn parse_row(row: &StringRecord, columns: &ColumnIndex, row_number: usize) -> Result<LaunchRecord> {
    let field = |idx: usize, column: &'static str| field_at(row, idx, column, row_number);
    let invalid = |column: &str, value: &str| DashError::InvalidField {
        row: row_number,
        column: column.to_string(),
        value: value.to_string(),
    };

    let launch_site = field(columns.launch_site, COL_LAUNCH_SITE)?;
    if launch_site.is_empty() {
        return Err(invalid(COL_LAUNCH_SITE, launch_site));
    }

    let raw_mass = field(columns.payload_mass, COL_PAYLOAD_MASS)?;
    let payload_mass_kg = raw_mass
        .parse::<f64>()
        .ok()
        .filter(|m| m.is_finite())
        .ok_or_else(|| invalid(COL_PAYLOAD_MASS, raw_mass))?;

    let raw_class = field(columns.class, COL_CLASS)?;
    let outcome = Outcome::from_class(raw_class).ok_or_else(|| invalid(COL_CLASS, raw_class))?;

    let booster_version_category = field(columns.booster_category, COL_BOOSTER_CATEGORY)?.to_string();

    let flight_number = columns
        .flight_number
        .and_then(|idx| row.get(idx))
        .and_then(|s| s.parse::<u32>().ok());
    let booster_version = columns
        .booster_version
        .and_then(|idx| row.get(idx))
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(LaunchRecord {
        launch_site: launch_site.to_string(),
        payload_mass_kg,
        booster_version_category,
        outcome,
        flight_number,
        booster_version,
    })
}

fn field_at<'r>(row: &'r StringRecord, idx: usize, column: &str, row_number: usize) -> Result<&'r str> {
    row.get(idx).ok_or_else(|| DashError::InvalidField {
        row: row_number,
        column: column.to_string(),
        value: String::new(),
    })
}
