//! Raw scheme definitions and their lenient line parser.
//!
//! A raw definition is two ordered record lists:
//! - key records: `key/follow,follow,…/lead,lead,…` (third segment optional,
//!   meaning the key produces no lead fragments)
//! - zero-initial records: `code/syllable`
//!
//! Parsing never fails a whole load: a malformed key record degrades to
//! empty fragment sets and a malformed zero record is skipped.

use serde::{Deserialize, Serialize};

use crate::scheme::KeyAssignment;

/// Raw scheme definition as exchanged with the persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScheme {
    /// Ordered key records, `key/follows/leads`.
    pub key_map: Vec<String>,

    /// Ordered zero-initial records, `code/syllable`.
    pub zero_map: Vec<String>,
}

impl RawScheme {
    /// Build a raw definition from two newline-separated blocks, dropping
    /// blank lines.
    pub fn from_text(key_map: &str, zero_map: &str) -> Self {
        let lines = |text: &str| {
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect()
        };
        Self {
            key_map: lines(key_map),
            zero_map: lines(zero_map),
        }
    }

    /// Parse this definition from its JSON representation.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize this definition to JSON.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Parse one key record. Returns `None` only when no key character can be
/// extracted at all; any other defect degrades to empty fragment sets.
pub(crate) fn parse_key_record(line: &str) -> Option<KeyAssignment> {
    let mut segments = line.trim().splitn(3, '/');
    let key = segments.next()?.trim().chars().next()?;
    let follows = parse_fragments(segments.next());
    let leads = parse_fragments(segments.next());
    Some(KeyAssignment {
        key,
        leads,
        follows,
    })
}

fn parse_fragments(segment: Option<&str>) -> Vec<String> {
    segment
        .map(|seg| {
            seg.split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Parse one zero-initial record into (code, syllable).
pub(crate) fn parse_zero_record(line: &str) -> Option<(String, String)> {
    let mut segments = line.trim().splitn(2, '/');
    let code = segments.next()?.trim();
    let syllable = segments.next()?.trim();
    if code.is_empty() || syllable.is_empty() {
        return None;
    }
    Some((code.to_string(), syllable.to_string()))
}
