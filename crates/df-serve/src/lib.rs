//! DeepfakeDetect static host
//!
//! Serves the built web client from a dist directory. Any path that is not a
//! file falls back to `index.html` so client-side routes such as `/results`
//! survive a reload.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DIST_DIR: &str = "./dist";

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Invalid listen address {0:?}: {1}")]
    Addr(String, std::net::AddrParseError),

    #[error("Dist directory not found: {0}")]
    MissingDist(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServeResult<T> = Result<T, ServeError>;

/// Host configuration
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub addr: SocketAddr,
    pub dist_dir: PathBuf,
}

impl ServeConfig {
    /// Read `DF_SERVE_ADDR` and `DF_DIST_DIR`, falling back to the defaults
    pub fn from_env() -> ServeResult<Self> {
        let addr = std::env::var("DF_SERVE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let dist_dir = std::env::var("DF_DIST_DIR").unwrap_or_else(|_| DEFAULT_DIST_DIR.to_string());
        Self::new(&addr, dist_dir)
    }

    pub fn new(addr: &str, dist_dir: impl Into<PathBuf>) -> ServeResult<Self> {
        let addr = addr
            .parse()
            .map_err(|e| ServeError::Addr(addr.to_string(), e))?;
        Ok(Self {
            addr,
            dist_dir: dist_dir.into(),
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// The dist directory must exist and hold an `index.html`
    pub fn validate(&self) -> ServeResult<()> {
        if !self.index_file().is_file() {
            return Err(ServeError::MissingDist(self.dist_dir.clone()));
        }
        Ok(())
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn router(config: &ServeConfig) -> Router {
    let assets = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(assets)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = ServeConfig::new("127.0.0.1:9000", "site").unwrap();
        assert_eq!(config.addr.port(), 9000);
        assert_eq!(config.index_file(), PathBuf::from("site/index.html"));
    }

    #[test]
    fn test_config_bad_addr() {
        let err = ServeConfig::new("localhost", "dist").unwrap_err();
        assert!(matches!(err, ServeError::Addr(..)));
    }

    #[test]
    fn test_validate_missing_dist() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServeConfig::new(DEFAULT_ADDR, dir.path().join("nope")).unwrap();
        assert!(matches!(config.validate(), Err(ServeError::MissingDist(_))));

        std::fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        let config = ServeConfig::new(DEFAULT_ADDR, dir.path()).unwrap();
        assert!(config.validate().is_ok());
    }
}
