/// Instruction placed before the keyword in every completion prompt
pub const PROMPT_TEMPLATE: &str =
    "Generate an SEO-optimised answer for the following question to win a Featured Snippet:";

/// Build the completion prompt for a keyword
#[must_use]
pub fn build_prompt(keyword: &str) -> String {
    format!("{PROMPT_TEMPLATE}\n\n{keyword}")
}
