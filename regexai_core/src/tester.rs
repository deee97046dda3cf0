use regex::Regex;
use tracing::debug;

use crate::{Error, MatchOutcome, Result};

pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Apply `pattern` to `input` and report the leftmost match.
///
/// No anchors are added; a pattern without `^`/`$` may match anywhere in `input`.
pub fn test(pattern: &str, input: &str) -> Result<MatchOutcome> {
    let re = compile(pattern)?;

    let outcome = re
        .captures(input)
        .map_or_else(MatchOutcome::default, |caps| MatchOutcome {
            matched: true,
            groups: caps
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect(),
            matched_text: caps.get(0).map(|m| m.as_str().to_string()),
        });

    debug!(
        "Tested pattern against input: matched={}, groups={}",
        outcome.matched,
        outcome.groups.len()
    );
    Ok(outcome)
}
