//! Human-readable rendering of a resolved pattern.

use std::fmt;

use crate::breakdown::breakdown;
use crate::{MatchOutcome, PatternResult};

/// Where a [`PatternResult`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Dictionary,
    Generated,
}

/// A test string together with the outcome of matching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRun {
    pub input: String,
    pub outcome: MatchOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub result: PatternResult,
    pub source: Source,
    pub explain: bool,
    pub test: Option<TestRun>,
}

fn format_groups(groups: &[Option<String>]) -> String {
    let items: Vec<String> = groups
        .iter()
        .map(|group| {
            group
                .as_ref()
                .map_or_else(|| "None".to_string(), |text| format!("'{text}'"))
        })
        .collect();
    format!("({})", items.join(", "))
}

impl fmt::Display for TestRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Testing: '{}'", self.input)?;

        if !self.outcome.matched {
            return write!(f, "   No match found");
        }

        writeln!(f, "   Match found!")?;
        if !self.outcome.groups.is_empty() {
            writeln!(
                f,
                "   Captured groups: {}",
                format_groups(&self.outcome.groups)
            )?;
        }
        write!(
            f,
            "   Matched text: '{}'",
            self.outcome.matched_text.as_deref().unwrap_or_default()
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated Regex:")?;
        write!(f, "   {}", self.result.pattern())?;
        if self.source == Source::Dictionary {
            write!(f, "\nFound in common patterns database!")?;
        }

        if self.explain {
            if !self.result.explanation().is_empty() {
                write!(f, "\n\nExplanation:")?;
                for line in self.result.explanation().lines() {
                    write!(f, "\n   {line}")?;
                }
            }

            let components = breakdown(self.result.pattern());
            if !components.is_empty() {
                write!(f, "\n\nPattern Breakdown:")?;
                for component in components {
                    write!(f, "\n   - {component}")?;
                }
            }
        }

        if !self.result.examples().is_empty() {
            write!(f, "\n\nExample matches:")?;
            for example in self.result.examples() {
                write!(f, "\n   - {example}")?;
            }
        }

        if let Some(test) = &self.test {
            write!(f, "\n\n{test}")?;
        }

        Ok(())
    }
}
