//! Application configuration
//!
//! One [`AppConfig`] is built when the app starts and handed to every page.
//! Nothing reads it from ambient state.

use crate::media::AcceptTypes;
use crate::results::VerdictPolicy;
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Inference service origin used when `DF_API_BASE` is not set at build time
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Default bound on the upload selection
pub const DEFAULT_MAX_FILES: usize = 5;

/// Colour scheme of the whole app
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Class applied to the root element
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Application-scoped configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Origin of the inference service, without trailing slash
    pub api_base: String,
    /// Maximum number of files held in the upload selection
    pub max_files: usize,
    /// Media types the upload zone accepts
    pub accept: AcceptTypes,
    /// Rule deciding the Real/Fake label on the results page
    pub verdict_policy: VerdictPolicy,
    /// Initial colour scheme
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("DF_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            max_files: DEFAULT_MAX_FILES,
            accept: AcceptTypes::default(),
            verdict_policy: VerdictPolicy::default(),
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    /// Point the client at another inference service
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> CoreResult<Self> {
        let api_base = api_base.into();
        let trimmed = api_base.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(CoreError::Config(format!(
                "api_base must be an http(s) URL, got '{}'",
                api_base
            )));
        }
        self.api_base = trimmed.to_string();
        Ok(self)
    }

    pub fn with_max_files(mut self, max_files: usize) -> CoreResult<Self> {
        if max_files == 0 {
            return Err(CoreError::Config("max_files must be at least 1".to_string()));
        }
        self.max_files = max_files;
        Ok(self)
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.api_base)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.api_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.max_files, 5);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.verdict_policy, VerdictPolicy::ConfidenceThreshold { fake_below: 60 });
        assert!(config.predict_url().ends_with("/predict"));
    }

    #[test]
    fn test_with_api_base_trims_slash() {
        let config = AppConfig::default()
            .with_api_base("https://detect.example.com/")
            .unwrap();
        assert_eq!(config.predict_url(), "https://detect.example.com/predict");
        assert_eq!(config.health_url(), "https://detect.example.com/health");
    }

    #[test]
    fn test_with_api_base_rejects_non_http() {
        assert!(AppConfig::default().with_api_base("ftp://x").is_err());
        assert!(AppConfig::default().with_max_files(0).is_err());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.root_class(), "dark");
        assert!(!Theme::Light.is_dark());
    }
}
