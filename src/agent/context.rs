// ABOUTME: Builds the reasoning context for each iteration from the current
// ABOUTME: input and the numbered observation history.

use crate::tool::Observation;

/// Concatenate the input with the prior observations, numbered from 1.
pub fn build_context(input: &str, observations: &[Observation]) -> String {
    if observations.is_empty() {
        return input.to_string();
    }

    let mut context = String::from(input);
    context.push_str("\n\nObservations:");
    for (i, obs) in observations.iter().enumerate() {
        context.push_str(&format!("\n{}. {}", i + 1, obs));
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_observations_is_input() {
        assert_eq!(build_context("What is 2+2?", &[]), "What is 2+2?");
    }

    #[test]
    fn test_numbered_observations() {
        let observations = vec![
            Observation::from_tool("calculator", "4"),
            Observation::new("plain note"),
        ];

        assert_eq!(
            build_context("next", &observations),
            "next\n\nObservations:\n1. tool 'calculator' result: 4\n2. plain note"
        );
    }
}
