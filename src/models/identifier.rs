//! # Identifier Normalization
//!
//! Callers address users by an opaque identifier that arrives in several
//! encodings: a canonical 24-hex-character id, a string with such an id
//! embedded somewhere inside it, or an arbitrary literal key. Parsing is
//! total; the only input with no filter at all is an empty one.

use std::sync::LazyLock;

use regex::Regex;
use tracing::error;

/// Matches a canonical 24-hex-character identifier embedded in a longer string.
static EMBEDDED_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[0-9a-fA-F]{24}").unwrap_or_else(|e| {
        error!("Failed to compile embedded identifier regex: {}", e);
        std::process::exit(1);
    })
});

/// A normalized user identifier, tagged by how it was recognized.
///
/// All variants reduce to a single filter key via [`Identifier::key`];
/// canonical and embedded hex keys are lowercased so the same id always
/// produces the same filter regardless of input casing or surroundings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// The trimmed input was itself a canonical 24-hex id.
    Canonical(String),
    /// A canonical 24-hex id was found embedded in the trimmed input.
    Embedded(String),
    /// Fallback: the trimmed input is used as a literal key.
    Literal(String),
}

impl Identifier {
    /// Parses a raw caller-supplied identifier.
    ///
    /// Never fails for non-empty input; whitespace-only input yields `None`,
    /// which callers must answer with a 400-class error.
    pub fn parse(raw: &str) -> Option<Identifier> {
        let clean = raw.trim();
        if clean.is_empty() {
            return None;
        }

        if is_canonical(clean) {
            return Some(Identifier::Canonical(clean.to_ascii_lowercase()));
        }

        if let Some(found) = EMBEDDED_ID_REGEX.find(clean) {
            return Some(Identifier::Embedded(found.as_str().to_ascii_lowercase()));
        }

        Some(Identifier::Literal(clean.to_string()))
    }

    /// The key this identifier filters the user collection by.
    pub fn key(&self) -> &str {
        match self {
            Identifier::Canonical(key) | Identifier::Embedded(key) | Identifier::Literal(key) => {
                key
            }
        }
    }
}

fn is_canonical(value: &str) -> bool {
    value.len() == 24 && value.bytes().all(|b| b.is_ascii_hexdigit())
}
