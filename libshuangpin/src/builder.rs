//! Combination builder: derives every reachable (syllable, code) pair.
//!
//! Construction runs in two phases matching the loader/builder split:
//! `SchemeBuilder::new` parses the raw records into a skeleton (key indices
//! populated, syllable ↔ code indices empty), and `build` closes the scheme
//! by cross-producting every ordered key pair against the fragment pairs
//! and filtering through the syllable inventory.
//!
//! Iteration order is declaration order of keys, then declaration order of
//! fragments. Collisions are resolved last-write-wins in that order; this
//! is a data-quality property of the input scheme, never an error.

use std::sync::Arc;

use ahash::AHashMap;
use libshuangpin_core::SyllableInventory;
use tracing::debug;

use crate::loader::{parse_key_record, parse_zero_record, RawScheme};
use crate::scheme::{KeyAssignment, Scheme};

/// Builder owning the parsed skeleton of a scheme.
#[derive(Debug)]
pub struct SchemeBuilder {
    name: String,
    keys: Vec<KeyAssignment>,
    zero_codes: Vec<(String, String)>,
    inventory: Arc<SyllableInventory>,
}

impl SchemeBuilder {
    /// Parse a raw definition into a scheme skeleton.
    ///
    /// Lenient by design: malformed key records degrade to empty fragment
    /// sets and malformed zero records are dropped. A key declared twice
    /// keeps its original position but takes the later assignment.
    pub fn new(name: &str, raw: &RawScheme, inventory: Arc<SyllableInventory>) -> Self {
        let mut keys: Vec<KeyAssignment> = Vec::new();

        for line in &raw.key_map {
            let Some(assignment) = parse_key_record(line) else {
                continue;
            };
            match keys.iter_mut().find(|k| k.key == assignment.key) {
                Some(existing) => *existing = assignment,
                None => keys.push(assignment),
            }
        }

        let zero_codes = raw
            .zero_map
            .iter()
            .filter_map(|line| parse_zero_record(line))
            .collect();

        Self {
            name: name.to_string(),
            keys,
            zero_codes,
            inventory,
        }
    }

    /// Close the scheme: register zero-initial codes, then cross-product
    /// all key pairs against their fragment pairs and keep every pair the
    /// inventory accepts.
    pub fn build(self) -> Scheme {
        let mut by_key = AHashMap::new();
        let mut lead_index = AHashMap::new();
        let mut follow_index = AHashMap::new();

        for (idx, assignment) in self.keys.iter().enumerate() {
            by_key.insert(assignment.key, idx);
            for lead in &assignment.leads {
                lead_index.insert(lead.clone(), assignment.key);
            }
            for follow in &assignment.follows {
                follow_index.insert(follow.clone(), assignment.key);
            }
        }

        let mut syllable_to_code: AHashMap<String, String> = AHashMap::new();
        let mut code_to_syllable: AHashMap<String, String> = AHashMap::new();

        // Zero-initial records first, both directions. The cross-product
        // below may overwrite them; that ordering is part of the contract.
        for (code, syllable) in &self.zero_codes {
            syllable_to_code.insert(syllable.clone(), code.clone());
            code_to_syllable.insert(code.clone(), syllable.clone());
        }

        for lead_key in &self.keys {
            for follow_key in &self.keys {
                let code: String = [lead_key.key, follow_key.key].iter().collect();
                for lead in &lead_key.leads {
                    for follow in &follow_key.follows {
                        if !self.inventory.is_valid(lead, follow) {
                            continue;
                        }
                        let syllable = format!("{}{}", lead, follow);
                        syllable_to_code.insert(syllable.clone(), code.clone());
                        code_to_syllable.insert(code.clone(), syllable);
                    }
                }
            }
        }

        debug!(
            scheme = %self.name,
            keys = self.keys.len(),
            codes = code_to_syllable.len(),
            syllables = syllable_to_code.len(),
            "built scheme indices"
        );

        Scheme {
            name: self.name,
            keys: self.keys,
            by_key,
            lead_index,
            follow_index,
            syllable_to_code,
            code_to_syllable,
            zero_codes: self.zero_codes,
            inventory: self.inventory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> Arc<SyllableInventory> {
        Arc::new(SyllableInventory::from_pairs([
            ("ch", "u"),
            ("ch", "i"),
            ("sh", "u"),
            ("sh", "i"),
        ]))
    }

    #[test]
    fn cross_product_records_both_directions() {
        let raw = RawScheme::from_text("i/i/ch\nu/u/sh", "");
        let scheme = SchemeBuilder::new("test", &raw, inventory()).build();

        assert_eq!(scheme.code_for("chi"), Some("ii"));
        assert_eq!(scheme.code_for("chu"), Some("iu"));
        assert_eq!(scheme.code_for("shu"), Some("uu"));
        assert_eq!(scheme.syllable_for("ui"), Some("shi"));
        assert_eq!(scheme.syllable_codes().len(), 4);
        assert_eq!(scheme.code_syllables().len(), 4);
    }

    #[test]
    fn invalid_combinations_receive_no_code() {
        let raw = RawScheme::from_text("i/a/ch", "");
        let scheme = SchemeBuilder::new("test", &raw, inventory()).build();
        // "cha" is not in the inventory, so the only key pair produces nothing.
        assert!(scheme.syllable_codes().is_empty());
    }

    #[test]
    fn collisions_resolve_last_write_wins_in_declaration_order() {
        // Both keys produce lead "ch"; the later declaration of follow "i"
        // on key u makes "ui" the surviving code for "chi".
        let inv = Arc::new(SyllableInventory::from_pairs([("ch", "i")]));
        let raw = RawScheme::from_text("i/i/ch\nu/i/ch", "");
        let scheme = SchemeBuilder::new("test", &raw, inv).build();

        assert_eq!(scheme.code_for("chi"), Some("uu"));
        // Earlier codes for the same syllable keep their stale reverse
        // entries; every one of them still resolves to a valid syllable.
        assert_eq!(scheme.syllable_for("ii"), Some("chi"));
        assert_eq!(scheme.syllable_for("uu"), Some("chi"));
    }

    #[test]
    fn zero_codes_registered_before_cross_product() {
        let inv = Arc::new(SyllableInventory::from_pairs([("", "ai")]));
        let raw = RawScheme::from_text("a//\ni//", "ai/ai");
        let scheme = SchemeBuilder::new("test", &raw, inv).build();

        assert_eq!(scheme.code_for("ai"), Some("ai"));
        assert_eq!(scheme.syllable_for("ai"), Some("ai"));
        assert_eq!(scheme.zero_codes(), [("ai".to_string(), "ai".to_string())]);
    }

    #[test]
    fn duplicate_key_records_keep_position_take_last_assignment() {
        let raw = RawScheme::from_text("i/i/ch\nu/u/sh\ni/i/sh", "");
        let scheme = SchemeBuilder::new("test", &raw, inventory()).build();

        assert_eq!(scheme.keys()[0].key, 'i');
        assert_eq!(scheme.keys()[0].leads, ["sh"]);
        assert_eq!(scheme.code_for("shi"), Some("ii"));
    }

    #[test]
    fn fragment_key_indices_follow_declaration_order() {
        let raw = RawScheme::from_text("i/i/ch\nu/u/sh", "");
        let scheme = SchemeBuilder::new("test", &raw, inventory()).build();
        assert_eq!(scheme.lead_key_of("ch"), Some('i'));
        assert_eq!(scheme.follow_key_of("u"), Some('u'));
        assert_eq!(scheme.lead_key_of("zh"), None);
    }
}
