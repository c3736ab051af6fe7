//! HTTP client for the inference service

use super::{error_message, HealthResponse, PredictionResponse, PredictionService, UploadError, UploadResult};
use crate::config::AppConfig;
use crate::media::{FileSource, SelectedFile};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info};

/// Talks to `POST /predict` and `GET /health`. No retry, timeout or cancellation.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: reqwest::Client,
    predict_url: String,
    health_url: String,
}

impl HttpPredictionClient {
    pub fn new(api_base: &str) -> Self {
        let api_base = api_base.trim_end_matches('/');
        Self {
            client: reqwest::Client::new(),
            predict_url: format!("{}/predict", api_base),
            health_url: format!("{}/health", api_base),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            predict_url: config.predict_url(),
            health_url: config.health_url(),
        }
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    fn file_part(file: &SelectedFile) -> UploadResult<Part> {
        let data = match &file.source {
            FileSource::Bytes(data) => data.to_vec(),
            FileSource::Url(url) => return Err(UploadError::UrlSource { url: url.clone() }),
        };

        let part = Part::bytes(data).file_name(file.name.clone());
        if file.mime.is_empty() {
            return Ok(part);
        }
        Ok(part.mime_str(&file.mime)?)
    }
}

#[async_trait(?Send)]
impl PredictionService for HttpPredictionClient {
    async fn predict(&self, file: &SelectedFile) -> UploadResult<PredictionResponse> {
        let form = Form::new().part("file", Self::file_part(file)?);

        info!("Submitting {} ({} bytes) to {}", file.name, file.size, self.predict_url);
        let response = self.client.post(&self.predict_url).multipart(form).send().await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        debug!("Raw prediction response: {}", String::from_utf8_lossy(&body));
        serde_json::from_slice(&body).map_err(|e| UploadError::Decode(e.to_string()))
    }

    async fn health(&self) -> UploadResult<HealthResponse> {
        let response = self.client.get(&self.health_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await?;
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_from_config() {
        let config = AppConfig::default()
            .with_api_base("http://localhost:9000/")
            .unwrap();
        let client = HttpPredictionClient::from_config(&config);
        assert_eq!(client.predict_url(), "http://localhost:9000/predict");
        assert_eq!(client.health_url, "http://localhost:9000/health");
    }

    #[test]
    fn test_url_stand_in_is_refused() {
        let file = SelectedFile::from_url("https://example.com/clip.mp4").unwrap();
        match HttpPredictionClient::file_part(&file) {
            Err(UploadError::UrlSource { url }) => assert_eq!(url, "https://example.com/clip.mp4"),
            other => panic!("expected UrlSource, got {:?}", other.map(|_| ())),
        }
    }
}
