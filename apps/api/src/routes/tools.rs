//! Tool dispatch endpoints for the orchestration layer.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tools::ToolDescriptor;

/// GET /api/v1/tools
pub async fn handle_list_tools(State(state): State<AppState>) -> Json<Vec<ToolDescriptor>> {
    Json(state.tools.descriptors())
}

/// POST /api/v1/tools/:name
///
/// Body is the tool's JSON arguments; the response is the tool's JSON result.
pub async fn handle_invoke_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(args): Json<Value>,
) -> Result<Json<Value>, AppError> {
    info!(tool = %name, "Invoking tool");
    let result = state.tools.invoke(&name, args).await?;
    Ok(Json(result))
}
