//! Strict parser for labeled generation responses.
//!
//! Accepted grammar, one label per line (labels are case-insensitive and may
//! appear in any order, each at most once):
//!
//! ```text
//! Regex: <pattern>
//! Explanation: <text, may continue on following lines>
//! Examples:
//! - <example>
//! - <example>
//! ```
//!
//! Text before the first label is ignored. A section runs until the next label
//! or the end of input. Only the `Regex:` section is mandatory.

use tracing::debug;

use crate::{Error, PatternResult, Result, tester};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Regex,
    Explanation,
    Examples,
}

impl Section {
    const ALL: [Self; 3] = [Self::Regex, Self::Explanation, Self::Examples];

    const fn label(self) -> &'static str {
        match self {
            Self::Regex => "Regex:",
            Self::Explanation => "Explanation:",
            Self::Examples => "Examples:",
        }
    }

    /// Split a trimmed line into its section label and the text after it.
    fn split_label(line: &str) -> Option<(Self, &str)> {
        Self::ALL.into_iter().find_map(|section| {
            let label = section.label();
            let head = line.get(..label.len())?;
            head.eq_ignore_ascii_case(label)
                .then(|| (section, line[label.len()..].trim()))
        })
    }
}

#[derive(Default)]
struct Sections<'a> {
    regex: Option<Vec<&'a str>>,
    explanation: Option<Vec<&'a str>>,
    examples: Option<Vec<&'a str>>,
}

impl<'a> Sections<'a> {
    const fn slot(&mut self, section: Section) -> &mut Option<Vec<&'a str>> {
        match section {
            Section::Regex => &mut self.regex,
            Section::Explanation => &mut self.explanation,
            Section::Examples => &mut self.examples,
        }
    }

    fn collect(raw: &'a str) -> Result<Self> {
        let mut sections = Self::default();
        let mut current = None;

        for line in raw.lines().map(str::trim) {
            if let Some((section, rest)) = Section::split_label(line) {
                let slot = sections.slot(section);
                if slot.is_some() {
                    return Err(Error::unparsable(format!(
                        "duplicate '{}' section",
                        section.label()
                    )));
                }
                *slot = Some(vec![rest]);
                current = Some(section);
            } else if let Some(section) = current {
                if let Some(lines) = sections.slot(section) {
                    lines.push(line);
                }
            }
        }

        Ok(sections)
    }
}

fn is_fence(line: &str) -> bool {
    line.starts_with("```")
}

fn strip_backticks(text: &str) -> &str {
    text.strip_prefix('`')
        .and_then(|inner| inner.strip_suffix('`'))
        .unwrap_or(text)
}

/// Remove a leading list marker such as `-`, `*`, `•`, `1.` or `2)`.
///
/// A marker only counts when followed by whitespace, so `-5` stays intact.
fn strip_list_marker(line: &str) -> &str {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    let rest = if digits > 0 {
        line[digits..]
            .strip_prefix('.')
            .or_else(|| line[digits..].strip_prefix(')'))
    } else {
        line.strip_prefix('-')
            .or_else(|| line.strip_prefix('*'))
            .or_else(|| line.strip_prefix('•'))
    };

    match rest {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    }
}

fn extract_pattern(lines: &[&str]) -> Result<String> {
    let mut candidates = lines
        .iter()
        .copied()
        .filter(|line| !line.is_empty() && !is_fence(line));

    let Some(first) = candidates.next() else {
        return Err(Error::unparsable("the 'Regex:' section is empty"));
    };
    if candidates.next().is_some() {
        return Err(Error::unparsable(
            "the 'Regex:' section spans more than one line",
        ));
    }

    let pattern = strip_backticks(first).trim();
    if pattern.is_empty() {
        return Err(Error::unparsable("the 'Regex:' section is empty"));
    }

    tester::compile(pattern).map_err(|e| {
        Error::unparsable(format!("extracted pattern does not compile ({e})"))
    })?;

    Ok(pattern.to_string())
}

fn extract_explanation(lines: &[&str]) -> String {
    let kept: Vec<&str> = lines.iter().copied().filter(|line| !is_fence(line)).collect();
    kept.join("\n").trim().to_string()
}

fn extract_examples(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| !is_fence(line))
        .map(|line| strip_list_marker(line).trim())
        .filter(|example| !example.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a raw service reply into a [`PatternResult`].
///
/// Fails with [`Error::UnparsableResponse`] when the `Regex:` label is missing,
/// empty, repeated, or holds text that does not compile.
pub fn parse(raw: &str) -> Result<PatternResult> {
    let sections = Sections::collect(raw)?;

    let Some(regex_lines) = sections.regex else {
        return Err(Error::unparsable("missing 'Regex:' section"));
    };

    let pattern = extract_pattern(&regex_lines)?;
    let explanation = sections
        .explanation
        .as_deref()
        .map(extract_explanation)
        .unwrap_or_default();
    let examples = sections
        .examples
        .as_deref()
        .map(extract_examples)
        .unwrap_or_default();

    debug!(
        "Parsed response: pattern_len={}, examples={}",
        pattern.len(),
        examples.len()
    );

    Ok(PatternResult::from_parts(pattern, explanation, examples))
}
