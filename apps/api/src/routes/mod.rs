pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::intake::handlers as intake;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate intake
        .route(
            "/api/v1/candidates",
            post(intake::handle_submit_candidate).get(intake::handle_list_candidates),
        )
        // Technical question generation
        .route("/api/v1/questions", post(intake::handle_generate_questions))
        // Hiring-assistant chat
        .route("/api/v1/chat", post(chat::handle_chat))
        .with_state(state)
}
