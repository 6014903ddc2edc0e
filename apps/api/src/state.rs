use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionClient;
use crate::store::CandidateStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Append-only candidate store backed by a single JSON file.
    pub store: Arc<CandidateStore>,
    /// Pluggable completion client. Default: the reqwest-backed LlmClient.
    pub llm: Arc<dyn CompletionClient>,
    pub config: Config,
}
