//! Shared fixtures for spacex-dash tests.
//!
//! The sample mirrors the published launch CSV layout. Facts the tests rely on:
//!
//! | Site | Rows | Successes |
//! |------|------|-----------|
//! | CCAFS LC-40 | 5 | 0 |
//! | VAFB SLC-4E | 2 | 1 |
//! | KSC LC-39A | 3 | 2 |
//! | CCAFS SLC-40 | 3 | 3 |
//!
//! Payload bounds are `0.0..=9600.0`; booster categories in first-seen
//! order are `v1.0`, `v1.1`, `FT`, `B4`, `B5`.

use spacex_dash_data::LaunchDataset;

pub const SAMPLE_CSV: &str = include_str!("../fixtures/sample_launches.csv");

pub const SAMPLE_SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

pub const SAMPLE_ROWS: usize = 13;

/// Parsed sample dataset.
pub fn sample_dataset() -> LaunchDataset {
    LaunchDataset::from_csv_str(SAMPLE_CSV).expect("sample fixture must parse")
}
