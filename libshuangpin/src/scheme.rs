//! Scheme data structure: key assignments plus the derived bidirectional
//! syllable ↔ code indices.
//!
//! A `Scheme` is produced once by `SchemeBuilder` and read-only afterwards.
//! All lookup surfaces needed by the match engine and by keyboard-layout
//! rendering live here.

use std::sync::Arc;

use ahash::AHashMap;
use libshuangpin_core::SyllableInventory;

/// One input key and the fragment sets it can produce. Either set may be
/// empty (vowel keys usually carry no lead fragments).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAssignment {
    pub key: char,
    pub leads: Vec<String>,
    pub follows: Vec<String>,
}

/// A named, completely built scheme. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Scheme {
    pub(crate) name: String,
    pub(crate) keys: Vec<KeyAssignment>,
    pub(crate) by_key: AHashMap<char, usize>,
    pub(crate) lead_index: AHashMap<String, char>,
    pub(crate) follow_index: AHashMap<String, char>,
    pub(crate) syllable_to_code: AHashMap<String, String>,
    pub(crate) code_to_syllable: AHashMap<String, String>,
    pub(crate) zero_codes: Vec<(String, String)>,
    pub(crate) inventory: Arc<SyllableInventory>,
}

impl Scheme {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key assignments in declaration order.
    pub fn keys(&self) -> &[KeyAssignment] {
        &self.keys
    }

    pub fn key(&self, key: char) -> Option<&KeyAssignment> {
        self.by_key.get(&key).map(|&idx| &self.keys[idx])
    }

    /// Lead fragments a key can produce; empty for unknown keys.
    pub fn leads_of(&self, key: char) -> &[String] {
        self.key(key).map(|k| k.leads.as_slice()).unwrap_or(&[])
    }

    /// Follow fragments a key can produce; empty for unknown keys.
    pub fn follows_of(&self, key: char) -> &[String] {
        self.key(key).map(|k| k.follows.as_slice()).unwrap_or(&[])
    }

    /// The key producing a lead fragment (last declaration wins).
    pub fn lead_key_of(&self, fragment: &str) -> Option<char> {
        self.lead_index.get(fragment).copied()
    }

    /// The key producing a follow fragment (last declaration wins).
    pub fn follow_key_of(&self, fragment: &str) -> Option<char> {
        self.follow_index.get(fragment).copied()
    }

    /// Two-keystroke code assigned to a syllable spelling.
    pub fn code_for(&self, syllable: &str) -> Option<&str> {
        self.syllable_to_code.get(syllable).map(String::as_str)
    }

    /// Syllable spelling a code resolves to.
    pub fn syllable_for(&self, code: &str) -> Option<&str> {
        self.code_to_syllable.get(code).map(String::as_str)
    }

    /// Complete syllable → code index.
    pub fn syllable_codes(&self) -> &AHashMap<String, String> {
        &self.syllable_to_code
    }

    /// Complete code → syllable index.
    pub fn code_syllables(&self) -> &AHashMap<String, String> {
        &self.code_to_syllable
    }

    /// Zero-initial (code, syllable) records in declaration order.
    pub fn zero_codes(&self) -> &[(String, String)] {
        &self.zero_codes
    }

    /// The inventory this scheme was validated against.
    pub fn inventory(&self) -> &Arc<SyllableInventory> {
        &self.inventory
    }
}
