//! Client library for the HateShield classification service
//!
//! The remote service does the actual hate-speech detection; this crate
//! validates input, drives the single-request session lifecycle, and turns
//! raw classification results into presentation bands for display.

pub mod analysis;
pub mod config;
pub mod render;

pub use analysis::backend::{ClassifierBackend, HttpBackend};
pub use analysis::bands::{PresentationBands, SeverityTier};
pub use analysis::error::{BackendError, FailureKind};
pub use analysis::session::{AnalysisSession, Phase, SessionView};
pub use analysis::types::{AnalysisResult, AnalyzeRequest, Language};
pub use config::BackendConfig;
