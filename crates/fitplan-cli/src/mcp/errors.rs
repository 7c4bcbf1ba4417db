//! Error handling utilities for MCP server

use fitplan_core::FitplanError;
use rmcp::ErrorData;

/// Convert a planner error to an MCP error.
///
/// Errors caused by the request become invalid-params errors so the client
/// can correct its call; storage failures are internal errors.
pub fn to_mcp_error(message: &str, error: &FitplanError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_input_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
