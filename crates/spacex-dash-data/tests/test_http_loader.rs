//! Load the dataset from a local HTTP server, covering the download error paths.

use std::net::SocketAddr;

use axum::{http::StatusCode, routing::get, Router};
use spacex_dash_common::error::DashError;
use spacex_dash_data::{dataset::COL_CLASS, DataSource, DatasetLoader};

const LAUNCHES_CSV: &str = "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
                            1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0\n\
                            2,KSC LC-39A,1,2490,F9 FT B1031.1,FT\n";

const NO_CLASS_CSV: &str = "Launch Site,Payload Mass (kg),Booster Version Category\n\
                            KSC LC-39A,2490,FT\n";

/// Serve fixtures on an ephemeral port and return its address.
async fn serve_fixtures() -> SocketAddr {
    let app = Router::new()
        .route("/launches.csv", get(|| async { LAUNCHES_CSV }))
        .route("/no-class.csv", get(|| async { NO_CLASS_CSV }))
        .route("/gone.csv", get(|| async { (StatusCode::NOT_FOUND, "not here") }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn url(addr: SocketAddr, path: &str) -> DataSource {
    DataSource::Url(format!("http://{}{}", addr, path))
}

#[tokio::test]
async fn test_download_dataset() {
    let addr = serve_fixtures().await;
    let loader = DatasetLoader::new(5).unwrap();

    let dataset = loader.load(&url(addr, "/launches.csv")).await.unwrap();

    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.sites(), vec!["CCAFS LC-40", "KSC LC-39A"]);
    assert_eq!(dataset.payload_bounds(), (0.0, 2490.0));
}

#[tokio::test]
async fn test_not_found_status_is_error() {
    let addr = serve_fixtures().await;
    let loader = DatasetLoader::new(5).unwrap();

    let result = loader.load(&url(addr, "/gone.csv")).await;

    match result {
        Err(DashError::HttpStatus { url, status }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/gone.csv"));
        }
        other => panic!("expected HttpStatus, got {:?}", other.map(|ds| ds.len())),
    }
}

#[tokio::test]
async fn test_downloaded_csv_without_class_column() {
    let addr = serve_fixtures().await;
    let loader = DatasetLoader::new(5).unwrap();

    let result = loader.load(&url(addr, "/no-class.csv")).await;

    match result {
        Err(DashError::MissingColumn(col)) => assert_eq!(col, COL_CLASS),
        other => panic!("expected MissingColumn, got {:?}", other.map(|ds| ds.len())),
    }
}
