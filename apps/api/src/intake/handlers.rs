//! Axum route handlers for the candidate intake API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::intake::prompts::technical_questions_prompt;
use crate::intake::questions::split_questions;
use crate::llm_client::ChatMessage;
use crate::models::candidate::{CandidateRecord, CandidateStoreFile};
use crate::state::AppState;

/// Upper bound on years of experience, matching the intake form widget.
const MAX_EXPERIENCE_YEARS: u32 = 50;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SubmitCandidateResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub tech_stack: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/candidates
///
/// Records one form submission. The store accepts the record as-is; the
/// presence and bound checks here are the form widget constraints.
pub async fn handle_submit_candidate(
    State(state): State<AppState>,
    Json(candidate): Json<CandidateRecord>,
) -> Result<(StatusCode, Json<SubmitCandidateResponse>), AppError> {
    if candidate.full_name.trim().is_empty() {
        return Err(AppError::Validation(
            "full_name cannot be empty".to_string(),
        ));
    }
    if candidate.experience > MAX_EXPERIENCE_YEARS {
        return Err(AppError::Validation(format!(
            "experience must be between 0 and {MAX_EXPERIENCE_YEARS}"
        )));
    }

    let full_name = candidate.full_name.clone();
    state.store.append(candidate).await?;
    info!("Recorded candidate submission for {full_name}");

    Ok((
        StatusCode::CREATED,
        Json(SubmitCandidateResponse {
            message: format!("Thank you, {full_name}! Your information has been recorded."),
        }),
    ))
}

/// GET /api/v1/candidates
///
/// Returns the full stored collection in the same shape as the store file,
/// so the response body doubles as the downloadable export.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<CandidateStoreFile>, AppError> {
    let candidates = state.store.read_all().await?;
    Ok(Json(CandidateStoreFile { candidates }))
}

/// POST /api/v1/questions
///
/// Builds the interview-question prompt for the given tech stack, asks the
/// model, and splits the reply into individual questions.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    if request.tech_stack.trim().is_empty() {
        return Err(AppError::Validation(
            "tech_stack cannot be empty".to_string(),
        ));
    }

    let prompt = technical_questions_prompt(&request.tech_stack);
    let messages = [ChatMessage {
        role: "user".to_string(),
        content: prompt,
    }];
    // The question prompt carries its own framing; no system prompt is sent.
    let reply = state.llm.complete(&messages, None).await?;

    Ok(Json(GenerateQuestionsResponse {
        questions: split_questions(&reply),
    }))
}
