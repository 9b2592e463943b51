//! Named tool registry.
//!
//! An orchestration layer (for example an LLM agent) invokes the scoring stages
//! by name with JSON arguments. Each stage is wrapped in a [`Tool`] and looked
//! up here; the registry knows nothing about who is calling.

pub mod scoring;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use ats_core::ScoringPipeline;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// A callable stage. Implement this to expose a new operation by name.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    async fn invoke(&self, args: Value) -> Result<Value, AppError>;
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Registry with every scoring stage registered under its tool name.
    /// `parse_resume_tool` only reads files beneath `upload_root`.
    pub fn with_scoring_tools(pipeline: Arc<ScoringPipeline>, upload_root: PathBuf) -> Self {
        let mut registry = ToolRegistry::default();
        registry.register(Arc::new(scoring::ParseResumeTool::new(upload_root)));
        registry.register(Arc::new(scoring::SemanticSimilarityTool(Arc::clone(&pipeline))));
        registry.register(Arc::new(scoring::KeywordMatchTool(Arc::clone(&pipeline))));
        registry.register(Arc::new(scoring::AtsCheckerTool(Arc::clone(&pipeline))));
        registry.register(Arc::new(scoring::ScoringTool(pipeline)));
        registry
    }

    /// Replaces any tool already registered under the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name(), tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools
            .values()
            .map(|t| ToolDescriptor {
                name: t.name(),
                description: t.description(),
            })
            .collect()
    }

    /// Looks up `name` and invokes it. Unknown names are `NotFound`.
    pub async fn invoke(&self, name: &str, args: Value) -> Result<Value, AppError> {
        let tool = self
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("Tool '{name}' is not registered")))?;
        tool.invoke(args).await
    }
}

/// Deserializes tool arguments, reporting bad shapes as validation errors.
pub(crate) fn parse_args<T: DeserializeOwned>(tool: &str, args: Value) -> Result<T, AppError> {
    serde_json::from_value(args)
        .map_err(|e| AppError::Validation(format!("Invalid arguments for '{tool}': {e}")))
}
