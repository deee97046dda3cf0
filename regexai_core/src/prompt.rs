use crate::dictionary;

/// Build the instruction text sent to the generation service.
///
/// The output depends only on `description`, so `--dry-run` output is reproducible.
/// The labeled response format requested here is the one [`crate::parser::parse`] accepts.
#[must_use]
pub fn build(description: &str) -> String {
    let mut prompt = format!(
        r#"You are a regex expert. Produce a regex, an explanation, and 2-3 example matches for: "{description}"

Requirements:
- Must be accurate and handle common edge cases
- Should be efficient (avoid catastrophic backtracking)
- Use standard regex syntax without lookaround or backreferences
- Focus on practical, real-world usage

Respond in this EXACT format:
Regex: <the regex pattern only, on a single line>
Explanation: <clear explanation of what it matches>
Examples:
- <first example match>
- <second example match>

Common reference patterns:
"#
    );

    for entry in dictionary::entries() {
        prompt.push_str(&format!("- {}: {}\n", entry.key, entry.pattern));
    }

    prompt.push_str(&format!("\nGenerate for: {description}"));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_is_deterministic() {
        let description = "hex colour codes like #ff00aa";
        assert_eq!(build(description), build(description));
    }

    #[test]
    fn build_embeds_description_verbatim() {
        let prompt = build("  Mixed CASE input ");
        assert!(prompt.contains("for: \"  Mixed CASE input \""));
        assert!(prompt.ends_with("Generate for:   Mixed CASE input "));
    }

    #[test]
    fn build_requests_parser_labels() {
        let prompt = build("anything");
        for label in ["Regex:", "Explanation:", "Examples:"] {
            assert!(prompt.contains(label), "prompt should mention {label}");
        }
    }

    #[test]
    fn build_lists_dictionary_patterns() {
        let prompt = build("anything");
        for entry in dictionary::entries() {
            assert!(prompt.contains(entry.pattern));
        }
    }
}
