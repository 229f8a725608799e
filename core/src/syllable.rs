//! Syllable type and spelling decomposition.
//!
//! A syllable is an ordered (lead, follow) pair. The lead is the initial
//! consonant portion and may be empty (zero-initial syllables such as "ang"
//! carry their whole spelling in the follow portion). The canonical spelling
//! is the concatenation `lead + follow`.

use serde::{Deserialize, Serialize};

/// Lead fragments recognised when decomposing a full spelling.
/// Two-letter initials must be tried before their one-letter prefixes.
const MULTI_CHAR_LEADS: &[&str] = &["zh", "ch", "sh"];
const SINGLE_CHAR_LEADS: &[&str] = &[
    "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "r", "z", "c", "s", "y",
    "w",
];

/// A single syllable as a (lead, follow) fragment pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syllable {
    /// Initial consonant portion, empty for zero-initial syllables.
    pub lead: String,

    /// Vowel/final portion.
    pub follow: String,
}

impl Syllable {
    pub fn new<L: Into<String>, F: Into<String>>(lead: L, follow: F) -> Self {
        Self {
            lead: lead.into(),
            follow: follow.into(),
        }
    }

    /// A zero-initial syllable: empty lead, whole spelling as follow.
    pub fn zero_initial<F: Into<String>>(follow: F) -> Self {
        Self::new("", follow)
    }

    /// Canonical spelling, `lead + follow`.
    pub fn spelling(&self) -> String {
        format!("{}{}", self.lead, self.follow)
    }

    /// True if the syllable has no consonant lead.
    pub fn is_zero_initial(&self) -> bool {
        self.lead.is_empty()
    }

    /// Decompose a full spelling into (lead, follow) by longest-prefix
    /// match against the known initials. Spellings without a recognised
    /// initial become zero-initial syllables.
    pub fn split(spelling: &str) -> Self {
        let spelling = spelling.trim();
        for lead in MULTI_CHAR_LEADS.iter().chain(SINGLE_CHAR_LEADS) {
            if let Some(rest) = spelling.strip_prefix(lead) {
                if !rest.is_empty() {
                    return Self::new(*lead, rest);
                }
            }
        }
        Self::zero_initial(spelling)
    }
}

impl std::fmt::Display for Syllable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.lead, self.follow)
    }
}
