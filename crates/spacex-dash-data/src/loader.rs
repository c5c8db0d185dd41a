//! Startup loading of the launch dataset from a URL or a local file.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use spacex_dash_common::error::{DashError, Result};
use tracing::{info, instrument};

use crate::dataset::LaunchDataset;

/// Where the launch CSV lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    Path(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` sources are downloaded, anything else is read from disk.
    pub fn parse(source: &str) -> Self {
        let trimmed = source.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::Path(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => f.write_str(url),
            DataSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches and parses the launch dataset.
pub struct DatasetLoader {
    client: reqwest::Client,
}

impl DatasetLoader {
    pub fn new(request_timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(request_timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// Load and parse the dataset. Any failure here is fatal for the caller.
    #[instrument(skip_all, fields(source = %source))]
    pub async fn load(&self, source: &DataSource) -> Result<LaunchDataset> {
        let bytes = match source {
            DataSource::Url(url) => self.download(url).await?,
            DataSource::Path(path) => tokio::fs::read(path).await?,
        };

        let dataset = LaunchDataset::from_reader(bytes.as_slice())?;
        let (min_payload, max_payload) = dataset.payload_bounds();
        info!(
            rows = dataset.len(),
            sites = dataset.sites().len(),
            min_payload,
            max_payload,
            "Launch dataset loaded"
        );
        Ok(dataset)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        info!("Downloading launch records from {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(DashError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            DataSource::parse("https://example.com/launches.csv"),
            DataSource::Url("https://example.com/launches.csv".to_string())
        );
        assert_eq!(
            DataSource::parse("http://localhost/launches.csv"),
            DataSource::Url("http://localhost/launches.csv".to_string())
        );
        assert_eq!(
            DataSource::parse(" data/spacex_launch_dash.csv "),
            DataSource::Path(PathBuf::from("data/spacex_launch_dash.csv"))
        );
    }

    #[tokio::test]
    async fn test_load_local_file() {
        let path = std::env::temp_dir().join(format!("spacex-dash-loader-{}.csv", std::process::id()));
        tokio::fs::write(
            &path,
            "Launch Site,Payload Mass (kg),Booster Version Category,class\n\
             KSC LC-39A,2490,FT,1\n\
             VAFB SLC-4E,9600,FT,1\n",
        )
        .await
        .unwrap();

        let loader = DatasetLoader::new(5).unwrap();
        let dataset = loader.load(&DataSource::Path(path.clone())).await.unwrap();
        tokio::fs::remove_file(&path).await.ok();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.payload_bounds(), (2490.0, 9600.0));
    }

    #[tokio::test]
    async fn test_missing_local_file_is_io_error() {
        let loader = DatasetLoader::new(5).unwrap();
        let result = loader
            .load(&DataSource::Path(PathBuf::from("/nonexistent/spacex_launch_dash.csv")))
            .await;
        assert!(matches!(result, Err(DashError::Io(_))));
    }
}
