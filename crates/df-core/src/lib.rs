//! DeepfakeDetect core
//!
//! Platform-neutral domain layer for the DeepfakeDetect web client. The
//! inference itself happens in an external HTTP service; this crate covers
//! everything around it: collecting media, submitting one file, mapping the
//! verdict into an [`AnalysisResult`], and the rules every results tab and
//! content page renders from.

pub mod config;
pub mod content;
pub mod heatmap;
pub mod media;
pub mod model;
pub mod navigation;
pub mod playback;
pub mod results;
pub mod upload;
pub mod widgets;

use thiserror::Error;

pub use config::{AppConfig, Theme};
pub use media::{AcceptTypes, FileMeta, FileSource, SelectedFile, Selection, SelectionError};
pub use model::{AnalysisResult, MediaType, SubScores, SuspiciousArea, SuspiciousFrame};
pub use navigation::{PayloadSlot, ResultsPayload};
pub use results::{ResultTab, ResultsView, Verdict, VerdictPolicy};
pub use upload::{
    HttpPredictionClient, PredictionResponse, PredictionService, UploadError, UploadOutcome,
    UploadSession,
};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
