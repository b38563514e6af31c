//! Prompt construction for the remote backend
//!
//! The intent of a request (code or plan) picks the system instruction. It is
//! detected from its own keyword set, separate from the category taxonomy.

use tracing::debug;

use crate::domain::Category;

/// Phrases that mark a request for code rather than a plan
const CODE_KEYWORDS: &[&str] = &[
    "java code",
    "java program",
    "python code",
    "javascript code",
    "html code",
    "react component",
    "swift code",
    "c++ code",
    "give me code",
];

/// System instruction for code requests
pub const CODE_SYSTEM: &str = "You are a programming expert. Your task is to generate clean, well-commented code \
directly, without any conversational or template-based text.
The response should contain only the code block, with the correct language identifier.";

/// System instruction for planning requests
pub const PLAN_SYSTEM: &str = "You are NeuroDesk AI, an expert planning assistant. Your task is to create detailed, \
actionable, step-by-step plans.
Do not include any conversational text outside the plan. Use a clear, concise markdown format.
Always start the plan with a title.";

/// What the backend is asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Code,
    Planning,
}

impl Intent {
    pub fn system_instruction(&self) -> &'static str {
        match self {
            Self::Code => CODE_SYSTEM,
            Self::Planning => PLAN_SYSTEM,
        }
    }
}

/// Detect whether the prompt asks for code
pub fn detect_intent(prompt: &str) -> Intent {
    let lower = prompt.to_lowercase();
    if CODE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Intent::Code
    } else {
        Intent::Planning
    }
}

/// User part of the prompt; code requests carry no category
pub fn user_message(prompt: &str, intent: Intent, category: Category) -> String {
    match intent {
        Intent::Code => prompt.to_string(),
        Intent::Planning => format!(
            "Create a comprehensive action plan for the following goal: \"{}\". The category for this plan is: \"{}\".",
            prompt,
            category.display_name()
        ),
    }
}

/// Full text sent as the single content part
pub fn compose(prompt: &str, category: Category) -> (Intent, String) {
    let intent = detect_intent(prompt);
    debug!(?intent, %category, "compose: called");
    let text = format!("{}\n{}", intent.system_instruction(), user_message(prompt, intent, category));
    (intent, text)
}
