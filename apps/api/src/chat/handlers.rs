//! Axum route handler for the chat assistant.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::prompts::HIRING_ASSISTANT_SYSTEM;
use crate::llm_client::ChatMessage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The full conversation so far, oldest first, ending with the user's
    /// latest message.
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/v1/chat
///
/// Runs one assistant turn over the client-held transcript. The fixed
/// hiring-assistant system prompt is applied server-side on every turn.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let latest = request
        .messages
        .last()
        .ok_or_else(|| AppError::Validation("messages cannot be empty".to_string()))?;
    if latest.content.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let reply = state
        .llm
        .complete(&request.messages, Some(HIRING_ASSISTANT_SYSTEM))
        .await?;

    Ok(Json(ChatResponse { reply }))
}
