use crate::models::{Account, ChatMessage};

/// Low randomness for research: determinism over creativity.
pub const RESEARCH_TEMPERATURE: f32 = 0.2;
/// Briefs get a little variety.
pub const BRIEF_TEMPERATURE: f32 = 0.4;
/// Batch briefs cover at most this many accounts; extra entries are
/// truncated silently, with no signal to the caller.
pub const MAX_BRIEF_ACCOUNTS: usize = 5;

const RESEARCH_SYSTEM: &str = "You are a sales research assistant. Return a concise bullet list of actionable, non-fluffy findings relevant to payroll/HR switch timing and competitive context.";

const BRIEF_SYSTEM: &str = "You create crisp, sales-ready briefs.";

/// Build the fixed two-message research prompt for one account domain.
pub fn research_messages(domain: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(RESEARCH_SYSTEM),
        ChatMessage::user(format!(
            "Company domain: {}\nReturn 3-6 bullets. Prefer hiring pages, state compliance pages (esp. IL), and vendor mentions.",
            domain
        )),
    ]
}

/// Render the batch brief instruction block over the first
/// [`MAX_BRIEF_ACCOUNTS`] accounts.
pub fn brief_prompt(accounts: &[Account]) -> String {
    let listing = accounts
        .iter()
        .take(MAX_BRIEF_ACCOUNTS)
        .map(|a| {
            format!(
                "• {} ({}) score:{}",
                a.name,
                a.domain.as_deref().unwrap_or(""),
                a.score
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "–".to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Create one outreach brief per account. For each:\n  - 2-line context (why-now)\n  - 3 tailored talking points\n  - 1 opener line.\n  Accounts:\n  {}",
        listing
    )
}

/// Pair the brief prompt with its system framing.
pub fn brief_messages(accounts: &[Account]) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(BRIEF_SYSTEM),
        ChatMessage::user(brief_prompt(accounts)),
    ]
}
