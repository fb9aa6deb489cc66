use std::sync::Arc;

use crate::ats::analysis::AnalysisSettings;
use crate::ats::scoring::{AtsScorer, KeywordAtsScorer};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; resume data always arrives with the request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: KeywordAtsScorer.
    pub scorer: Arc<dyn AtsScorer>,
    pub analysis: AnalysisSettings,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let analysis = config.analysis_settings();
        Self {
            config,
            scorer: Arc::new(KeywordAtsScorer),
            analysis,
        }
    }
}
