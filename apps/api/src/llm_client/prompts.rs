// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt for the turn-based chat assistant.
pub const HIRING_ASSISTANT_SYSTEM: &str = "You are a helpful Hiring Assistant chatbot.";
