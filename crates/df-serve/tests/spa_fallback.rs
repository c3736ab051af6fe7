//! Static host behaviour over a real socket

use df_serve::{router, ServeConfig};
use tempfile::TempDir;

const INDEX: &str = "<!DOCTYPE html><html><body>deepfakedetect</body></html>";

async fn spawn_host() -> (String, TempDir) {
    let dist = tempfile::tempdir().unwrap();
    std::fs::write(dist.path().join("index.html"), INDEX).unwrap();
    std::fs::write(dist.path().join("app.js"), "console.log('app');").unwrap();

    let config = ServeConfig::new("127.0.0.1:0", dist.path()).unwrap();
    let app = router(&config);
    let listener = tokio::net::TcpListener::bind(config.addr).await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (base, dist)
}

#[tokio::test]
async fn test_client_route_serves_index() {
    let (base, _dist) = spawn_host().await;

    let response = reqwest::get(format!("{}/results", base)).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), INDEX);
}

#[tokio::test]
async fn test_asset_served() {
    let (base, _dist) = spawn_host().await;

    let response = reqwest::get(format!("{}/app.js", base)).await.unwrap();
    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "console.log('app');");
}

#[tokio::test]
async fn test_health() {
    let (base, _dist) = spawn_host().await;

    let body: serde_json::Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
