//! User-message templating for the review chain.
//!
//! Every prompt starts with the user's instruction and the fenced source file.
//! Each later role additionally receives the responses of the roles before it.

use std::path::PathBuf;

/// The user's request: an instruction plus the file it applies to.
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    pub instruction: String,
    pub file_path: PathBuf,
    pub source: String,
}

impl ReviewRequest {
    /// Instruction followed by the fenced file contents.
    pub fn full_input(&self) -> String {
        full_input(&self.instruction, &self.source)
    }
}

pub fn full_input(instruction: &str, source: &str) -> String {
    format!("{instruction}\n\nFile to review:\n```\n{source}\n```")
}

pub fn junior_prompt(full_input: &str) -> String {
    full_input.to_string()
}

pub fn senior_prompt(full_input: &str, junior_notes: &str) -> String {
    format!(
        "\
{full_input}

## Junior developer feedback

{junior_notes}"
    )
}

pub fn manager_prompt(full_input: &str, junior_notes: &str, senior_notes: &str) -> String {
    format!(
        "\
{full_input}

## Junior developer feedback

{junior_notes}

## Senior developer response

{senior_notes}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_input_fences_the_source() {
        let input = full_input("Please review", "fn main() {}");
        assert_eq!(input, "Please review\n\nFile to review:\n```\nfn main() {}\n```");
    }

    #[test]
    fn senior_prompt_appends_junior_feedback() {
        let prompt = senior_prompt("INPUT", "why unwrap?");
        assert!(prompt.starts_with("INPUT"));
        let input_pos = prompt.find("INPUT").unwrap();
        let junior_pos = prompt.find("why unwrap?").unwrap();
        assert!(input_pos < junior_pos);
    }

    #[test]
    fn manager_prompt_orders_junior_before_senior() {
        let prompt = manager_prompt("INPUT", "JUNIOR", "SENIOR");
        let input_pos = prompt.find("INPUT").unwrap();
        let junior_pos = prompt.find("JUNIOR").unwrap();
        let senior_pos = prompt.find("SENIOR").unwrap();
        assert!(input_pos < junior_pos && junior_pos < senior_pos);
        assert!(prompt.contains("## Senior developer response"));
    }
}
