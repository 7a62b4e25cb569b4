use crate::llm_client::GeminiClient;
use crate::report::mailer::Mailer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is per-process and stateless across requests; analyses are
/// never persisted.
#[derive(Clone)]
pub struct AppState {
    pub llm: GeminiClient,
    /// Present only when the e-mail delivery provider is configured.
    pub mailer: Option<Mailer>,
}
