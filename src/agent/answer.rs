// ABOUTME: Completion detection over reasoning text and final-answer
// ABOUTME: extraction from `finish(answer="...")` next actions.

use std::sync::LazyLock;

use regex::Regex;

use super::Thought;

/// Case-insensitive substrings that mark reasoning as complete.
pub const COMPLETION_MARKERS: &[&str] = &["done", "finished", "complete"];

// Literal tag, double-quoted payload, no escapes.
static FINISH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^finish\(\s*answer\s*=\s*"([^"]*)""#).expect("finish pattern is valid")
});

/// Whether the reasoning text contains any completion marker.
///
/// This is a plain substring test, so "incomplete" also matches.
pub fn is_completion(reasoning: &str) -> bool {
    let lowered = reasoning.to_lowercase();
    COMPLETION_MARKERS.iter().any(|m| lowered.contains(m))
}

/// The quoted payload of a `finish(answer="...")` action, if present.
pub fn parse_finish_answer(next_action: &str) -> Option<&str> {
    FINISH_PATTERN
        .captures(next_action.trim_start())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// The final answer for a thought: the finish payload when its next action
/// carries one, otherwise the reasoning text verbatim.
pub fn extract_final_answer(thought: &Thought) -> String {
    thought
        .next_action
        .as_deref()
        .and_then(parse_finish_answer)
        .unwrap_or(thought.reasoning.as_str())
        .to_string()
}

/// Result text when the iteration bound is reached without finishing.
pub fn exhaustion_message(max_iterations: usize) -> String {
    format!("[incomplete] Agent did not complete within {max_iterations} iterations")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_markers_case_insensitive() {
        assert!(is_completion("I am DONE here"));
        assert!(is_completion("Task Finished."));
        assert!(is_completion("the work is complete"));
        assert!(!is_completion("still working on it"));
        assert!(!is_completion(""));
    }

    #[test]
    fn test_completion_is_substring_match() {
        assert!(is_completion("this is incomplete"));
        assert!(is_completion("abandoned"));
    }

    #[test]
    fn test_parse_finish_answer() {
        assert_eq!(parse_finish_answer(r#"finish(answer="42")"#), Some("42"));
        assert_eq!(parse_finish_answer(r#"  finish( answer = "a b" )"#), Some("a b"));
        assert_eq!(parse_finish_answer(r#"finish(answer="")"#), Some(""));
        assert_eq!(parse_finish_answer("finish()"), None);
        assert_eq!(parse_finish_answer(r#"search(query="x")"#), None);
        assert_eq!(parse_finish_answer(r#"then finish(answer="x")"#), None);
    }

    #[test]
    fn test_payload_stops_at_first_quote() {
        assert_eq!(
            parse_finish_answer(r#"finish(answer="say \"hi\"")"#),
            Some(r"say \")
        );
    }

    #[test]
    fn test_extract_prefers_finish_payload() {
        let thought = Thought::new("The answer is four").with_next_action(r#"finish(answer="4")"#);
        assert_eq!(extract_final_answer(&thought), "4");
    }

    #[test]
    fn test_extract_falls_back_to_reasoning() {
        let thought = Thought::new("The answer is four");
        assert_eq!(extract_final_answer(&thought), "The answer is four");

        let thought = Thought::new("reasoning").with_next_action("calculator(expression=\"2+2\")");
        assert_eq!(extract_final_answer(&thought), "reasoning");
    }

    #[test]
    fn test_exhaustion_message_mentions_limit() {
        let message = exhaustion_message(7);
        assert!(message.contains("7 iterations"));
        assert!(message.starts_with("[incomplete]"));
    }
}
