use std::sync::Arc;

use crate::ats::extract::DocumentExtractor;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable resume text extractor. Default: FileTypeExtractor.
    pub extractor: Arc<dyn DocumentExtractor>,
}
