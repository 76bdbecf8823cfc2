// Session state machine for analysis requests

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::backend::ClassifierBackend;
use super::error::{BackendError, FailureKind};
use super::types::{AnalysisResult, AnalyzeRequest, Language};

/// Request lifecycle phase. `Succeeded` and `Failed` are re-entrant via
/// `submit`; there is no transition out of `Pending` except completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Mutable per-session state. `result` is set exactly when the phase is
/// `Succeeded`, `error` exactly when it is `Failed`, never both.
#[derive(Debug)]
struct InteractionState {
    text: String,
    language: Language,
    phase: Phase,
    result: Option<AnalysisResult>,
    error: Option<FailureKind>,
}

impl InteractionState {
    fn new(language: Language) -> Self {
        Self {
            text: String::new(),
            language,
            phase: Phase::Idle,
            result: None,
            error: None,
        }
    }

    /// Try to start a request. Returns the captured payload, or `None` when
    /// nothing was dispatched: either a request is already in flight, or the
    /// input failed validation and the state moved straight to `Failed`.
    fn begin(&mut self) -> Option<AnalyzeRequest> {
        if self.phase == Phase::Pending {
            return None;
        }
        if self.text.trim().is_empty() {
            self.fail(FailureKind::EmptyInput);
            return None;
        }

        self.phase = Phase::Pending;
        self.result = None;
        self.error = None;
        Some(AnalyzeRequest {
            text: self.text.clone(),
            language: self.language,
        })
    }

    /// Apply the outcome of the in-flight request
    fn complete(&mut self, outcome: Result<AnalysisResult, BackendError>) {
        match outcome {
            Ok(result) => {
                self.phase = Phase::Succeeded;
                self.result = Some(result);
                self.error = None;
            }
            Err(_) => self.fail(FailureKind::BackendUnavailable),
        }
    }

    fn fail(&mut self, kind: FailureKind) {
        self.phase = Phase::Failed;
        self.result = None;
        self.error = Some(kind);
    }
}

/// Read-only snapshot handed to the rendering layer
#[derive(Debug, Clone)]
pub struct SessionView {
    pub text: String,
    pub language: Language,
    pub phase: Phase,
    pub result: Option<AnalysisResult>,
    pub error: Option<FailureKind>,
}

/// Handle to one analysis session. Cheap to clone; every clone shares the
/// same state, and at most one request is in flight across all of them.
pub struct AnalysisSession {
    state: Arc<RwLock<InteractionState>>,
    backend: Arc<dyn ClassifierBackend>,
}

impl Clone for AnalysisSession {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            backend: Arc::clone(&self.backend),
        }
    }
}

impl AnalysisSession {
    pub fn new(backend: Arc<dyn ClassifierBackend>) -> Self {
        Self::with_language(backend, Language::Auto)
    }

    pub fn with_language(backend: Arc<dyn ClassifierBackend>, language: Language) -> Self {
        Self {
            state: Arc::new(RwLock::new(InteractionState::new(language))),
            backend,
        }
    }

    pub async fn set_text(&self, text: impl Into<String>) {
        self.state.write().await.text = text.into();
    }

    pub async fn set_language(&self, language: Language) {
        self.state.write().await.language = language;
    }

    pub async fn view(&self) -> SessionView {
        let state = self.state.read().await;
        SessionView {
            text: state.text.clone(),
            language: state.language,
            phase: state.phase,
            result: state.result.clone(),
            error: state.error,
        }
    }

    /// Validate the current input and run one classification request.
    ///
    /// At most one request is in flight per session; calling this while a
    /// request is pending does nothing. The state lock is not held across
    /// the network call, so the input stays editable while waiting, and the
    /// in-flight request keeps the text it captured at dispatch time.
    pub async fn submit(&self) {
        let request = match self.state.write().await.begin() {
            Some(request) => request,
            None => return,
        };

        debug!(
            language = %request.language,
            chars = request.text.len(),
            "dispatching analysis request"
        );
        let outcome = self.backend.analyze(&request).await;
        if let Err(cause) = &outcome {
            warn!(%cause, "analysis request failed");
        }
        self.state.write().await.complete(outcome);
    }
}
