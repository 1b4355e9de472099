//! System prompt composition.

/// Fixed instruction appended to every personality's system prompt.
pub const RESPONSE_GUIDELINES: &str =
    "Keep your response to 2-3 sentences maximum. Stay fully in character and be entertaining.";

/// Compose the system prompt for a role and a style.
///
/// Produces `"{role}. {style} {RESPONSE_GUIDELINES}"`. Empty inputs are
/// accepted and yield a degenerate but usable prompt.
pub fn compose_system_prompt(role: &str, style: &str) -> String {
    format!("{role}. {style} {RESPONSE_GUIDELINES}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_and_style_are_verbatim() {
        let prompt = compose_system_prompt("You are a pirate", "Say arr a lot.");
        assert_eq!(
            prompt,
            format!("You are a pirate. Say arr a lot. {RESPONSE_GUIDELINES}")
        );
    }

    #[test]
    fn empty_inputs_still_end_with_guidelines() {
        let prompt = compose_system_prompt("", "");
        assert!(prompt.ends_with(RESPONSE_GUIDELINES));
        assert!(prompt.starts_with('.'));
    }
}
