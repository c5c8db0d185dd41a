//! SpaceX launch records: model, CSV parsing, and dataset loading.
//!
//! The dataset is loaded once at startup from a remote URL or a local file
//! and is read-only afterwards.
//!
//! # Columns
//!
//! | Column | Field |
//! |--------|-------|
//! | `Launch Site` | [`LaunchRecord::launch_site`] |
//! | `Payload Mass (kg)` | [`LaunchRecord::payload_mass_kg`] |
//! | `Booster Version Category` | [`LaunchRecord::booster_version_category`] |
//! | `class` (0/1) | [`LaunchRecord::outcome`] |
//! | `Flight Number` (optional) | [`LaunchRecord::flight_number`] |
//! | `Booster Version` (optional) | [`LaunchRecord::booster_version`] |
//!
//! # Example
//!
//! ```rust,no_run
//! use spacex_dash_data::{DataSource, DatasetLoader};
//!
//! #[tokio::main]
//! async fn main() -> spacex_dash_common::Result<()> {
//!     let loader = DatasetLoader::new(30)?;
//!     let dataset = loader.load(&DataSource::parse("spacex_launch_dash.csv")).await?;
//!
//!     let (min, max) = dataset.payload_bounds();
//!     println!("{} launches, payload {min}..{max} kg", dataset.len());
//!     for site in dataset.sites() {
//!         println!("{site}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod record;
pub mod dataset;
pub mod loader;

pub use dataset::LaunchDataset;
pub use loader::{DataSource, DatasetLoader};
pub use record::{LaunchRecord, Outcome};
