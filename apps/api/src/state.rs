use std::sync::Arc;

use ats_core::ScoringPipeline;

use crate::config::Config;
use crate::tools::ToolRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup from `config.scoring`; immutable afterwards.
    pub pipeline: Arc<ScoringPipeline>,
    pub tools: Arc<ToolRegistry>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let pipeline = Arc::new(ScoringPipeline::new(config.scoring.clone()));
        let tools = Arc::new(ToolRegistry::with_scoring_tools(
            Arc::clone(&pipeline),
            config.upload_dir.clone(),
        ));
        AppState {
            config,
            pipeline,
            tools,
        }
    }
}
