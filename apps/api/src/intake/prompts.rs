#![allow(dead_code)]

// Prompt construction for the intake flow. Pure string building — no I/O,
// no external calls.

const CANDIDATE_INFO_PROMPT: &str = "\
You are a Hiring Assistant chatbot. Your task is to collect the following information from the candidate:
- Full Name
- Email Address
- Phone Number
- Current Location
- Years of Experience
- Desired Position(s)
- Tech Stack (e.g., programming languages, frameworks, tools)

Ensure the candidate feels comfortable and guided during the process. Respond in a conversational tone.";

/// Interview-question prompt template. Replace `{tech_stack}` before sending.
const TECHNICAL_QUESTIONS_TEMPLATE: &str = "\
You are tasked with creating thoughtful and well-structured interview questions for a candidate based on the following technical skills: {tech_stack}.
The questions should adhere to these guidelines:

1. Proficiency Levels:
   - Include questions targeting beginner, intermediate, and advanced levels.

2. Question Types:
   - Test practical skills, conceptual understanding, and problem-solving abilities.

3. Clarity and Focus:
   - Ensure the questions are clear, concise, and free from ambiguity.
   - Focus on evaluating hands-on experience as well as theoretical knowledge.

4. Output Format:
   - Provide the questions in a numbered format.

Generate 3-5 questions based on these criteria.";

/// Instruction for a guided intake conversation: the seven candidate fields to
/// elicit and the tone to use. No parameters; identical string on every call.
pub fn candidate_info_prompt() -> &'static str {
    CANDIDATE_INFO_PROMPT
}

/// Builds the interview-question prompt for a candidate's tech stack.
/// The tech-stack text is embedded verbatim. Never fails; emptiness checks
/// live upstream in the handler.
pub fn technical_questions_prompt(tech_stack: &str) -> String {
    TECHNICAL_QUESTIONS_TEMPLATE.replace("{tech_stack}", tech_stack)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_info_prompt_is_stable() {
        assert_eq!(candidate_info_prompt(), candidate_info_prompt());
    }

    #[test]
    fn test_candidate_info_prompt_names_all_seven_fields() {
        let prompt = candidate_info_prompt();
        for field in [
            "Full Name",
            "Email Address",
            "Phone Number",
            "Current Location",
            "Years of Experience",
            "Desired Position(s)",
            "Tech Stack",
        ] {
            assert!(prompt.contains(field), "prompt is missing '{field}'");
        }
    }

    #[test]
    fn test_technical_questions_prompt_embeds_tech_stack_verbatim() {
        let prompt = technical_questions_prompt("Go, Kubernetes");
        assert!(prompt.contains("Go, Kubernetes"));
        assert!(!prompt.contains("{tech_stack}"));
    }

    #[test]
    fn test_technical_questions_prompt_requests_3_to_5_numbered_questions() {
        let prompt = technical_questions_prompt("Go, Kubernetes");
        assert!(prompt.contains("Generate 3-5 questions"));
        assert!(prompt.contains("numbered format"));
    }

    #[test]
    fn test_technical_questions_prompt_is_deterministic() {
        assert_eq!(
            technical_questions_prompt("Rust, Tokio"),
            technical_questions_prompt("Rust, Tokio")
        );
    }
}
