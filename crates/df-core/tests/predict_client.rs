//! Round-trips against an in-process stub of the inference service

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use df_core::media::FileMeta;
use df_core::upload::{map_prediction, HttpPredictionClient, PredictionService, UploadError};
use df_core::SelectedFile;
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn clip() -> SelectedFile {
    SelectedFile::from_bytes(
        FileMeta {
            name: "a.mp4".to_string(),
            size: 4,
            mime: "video/mp4".to_string(),
        },
        b"\x00\x00\x00\x18".to_vec(),
    )
}

async fn echo_prediction(mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        let mime = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.unwrap();
        if mime != "video/mp4" || bytes.len() != 4 {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": "unexpected upload" })));
        }
        return (
            StatusCode::OK,
            Json(json!({
                "video_name": name,
                "prediction": "FAKE",
                "confidence": 0.87,
                "is_fake": true,
                "frames_analyzed": 32,
                "raw_score": 0.13
            })),
        );
    }
    (StatusCode::BAD_REQUEST, Json(json!({ "error": "missing file field" })))
}

#[tokio::test]
async fn test_successful_prediction_is_mapped() {
    let base = spawn(Router::new().route("/predict", post(echo_prediction))).await;
    let client = HttpPredictionClient::new(&base);

    let file = clip();
    let response = client.predict(&file).await.unwrap();
    assert_eq!(response.video_name.as_deref(), Some("a.mp4"));
    assert_eq!(response.frames_analyzed, Some(32));

    let result = map_prediction(&file, &response, Utc::now());
    assert!(!result.is_real);
    assert_eq!(result.confidence, 87);
    assert_eq!(result.file_name, "a.mp4");
}

#[tokio::test]
async fn test_error_field_is_surfaced() {
    let app = Router::new().route(
        "/predict",
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad file" }))) }),
    );
    let client = HttpPredictionClient::new(&spawn(app).await);

    let err = client.predict(&clip()).await.unwrap_err();
    assert_eq!(
        err,
        UploadError::Rejected {
            status: 400,
            message: "bad file".to_string()
        }
    );
    assert_eq!(err.alert_message(), "bad file");
}

#[tokio::test]
async fn test_detail_field_is_surfaced() {
    let app = Router::new().route(
        "/predict",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "Model not loaded" })),
            )
        }),
    );
    let client = HttpPredictionClient::new(&spawn(app).await);

    let err = client.predict(&clip()).await.unwrap_err();
    assert_eq!(err.alert_message(), "Model not loaded");
}

#[tokio::test]
async fn test_status_fallback_without_json_body() {
    let app = Router::new().route(
        "/predict",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
    );
    let client = HttpPredictionClient::new(&spawn(app).await);

    let err = client.predict(&clip()).await.unwrap_err();
    assert_eq!(err.alert_message(), "Upload failed with status 503");
}

#[tokio::test]
async fn test_mistyped_field_does_not_fail_upload() {
    let app = Router::new().route(
        "/predict",
        post(|| async { Json(json!({ "is_fake": true, "confidence": 0.9, "frames_analyzed": 12.5 })) }),
    );
    let client = HttpPredictionClient::new(&spawn(app).await);

    let file = clip();
    let response = client.predict(&file).await.unwrap();
    assert_eq!(response.frames_analyzed, None);

    let result = map_prediction(&file, &response, Utc::now());
    assert!(!result.is_real);
    assert_eq!(result.confidence, 90);
}

#[tokio::test]
async fn test_non_json_success_is_decode_error() {
    let app = Router::new().route("/predict", post(|| async { "not json" }));
    let client = HttpPredictionClient::new(&spawn(app).await);

    let err = client.predict(&clip()).await.unwrap_err();
    assert!(matches!(err, UploadError::Decode(_)));
}

#[tokio::test]
async fn test_health() {
    let app = Router::new().route(
        "/health",
        get(|| async { Json(json!({ "status": "healthy", "model_loaded": true, "device": "cpu" })) }),
    );
    let client = HttpPredictionClient::new(&spawn(app).await);

    let health = client.health().await.unwrap();
    assert!(health.model_loaded);
    assert_eq!(health.device.as_deref(), Some("cpu"));
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    // bind then drop so nothing listens on the port
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpPredictionClient::new(&format!("http://{}", addr));
    let err = client.predict(&clip()).await.unwrap_err();
    assert!(matches!(err, UploadError::Network(_)));
}
