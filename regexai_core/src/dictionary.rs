//! Built-in table of common patterns.
//!
//! Lookup is a case-insensitive containment check of each key against the
//! description. Keys are tried in table order and the first hit wins, so
//! "phone or email" resolves to `email`.

use tracing::debug;

use crate::PatternResult;

/// One precomputed dictionary row.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub key: &'static str,
    pub pattern: &'static str,
    pub explanation: &'static str,
    pub examples: &'static [&'static str],
}

impl Entry {
    fn to_result(self) -> PatternResult {
        PatternResult::from_parts(
            self.pattern.to_string(),
            self.explanation.to_string(),
            self.examples.iter().map(|e| (*e).to_string()).collect(),
        )
    }
}

static ENTRIES: [Entry; 5] = [
    Entry {
        key: "email",
        pattern: r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
        explanation: "Matches standard email addresses with alphanumeric characters, dots, underscores, plus signs and hyphens",
        examples: &[
            "user@example.com",
            "test.email+tag@domain.co.uk",
            "simple@test.org",
        ],
    },
    Entry {
        key: "phone",
        pattern: r"^\+?[1-9]\d{1,14}$",
        explanation: "Matches international phone numbers with optional plus sign and 2-15 digits",
        examples: &["+1234567890", "1234567890", "+441234567890"],
    },
    Entry {
        key: "url",
        pattern: r"^https?://[^\s]+$",
        explanation: "Matches HTTP and HTTPS URLs",
        examples: &[
            "https://example.com",
            "http://test.org/path",
            "https://sub.domain.com/page?query=value",
        ],
    },
    Entry {
        key: "ip",
        pattern: r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$",
        explanation: "Matches IPv4 addresses (basic format validation)",
        examples: &["192.168.1.1", "10.0.0.1", "172.16.254.1"],
    },
    Entry {
        key: "date",
        pattern: r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/\d{4}$",
        explanation: "Matches dates in MM/DD/YYYY format",
        examples: &["01/15/2024", "12/31/2023", "06/08/1990"],
    },
];

/// All entries, in lookup order.
#[must_use]
pub fn entries() -> &'static [Entry] {
    &ENTRIES
}

/// Return the first entry whose key occurs in `description`, ignoring case.
#[must_use]
pub fn lookup(description: &str) -> Option<PatternResult> {
    let needle = description.trim().to_lowercase();
    let hit = ENTRIES.iter().find(|entry| needle.contains(entry.key));

    match hit {
        Some(entry) => {
            debug!("Dictionary hit: key={}", entry.key);
            Some(entry.to_result())
        }
        None => {
            debug!("Dictionary miss");
            None
        }
    }
}
