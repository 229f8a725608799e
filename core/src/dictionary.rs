//! Character ↔ pronunciation dictionary.
//!
//! Two mutual indices built from parallel `hanzi` / `pinyin` arrays: one
//! from a character to its pronunciations and one from a pronunciation back
//! to the characters that carry it. The syllable inventory can be derived
//! from the pronunciation set (`SyllableInventory::from_dictionary`).

use ahash::AHashMap;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::normalize;

/// On-disk dictionary format: parallel arrays where `pinyin[i]` lists the
/// pronunciations of `hanzi[i]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictTable {
    pub hanzi: Vec<String>,
    pub pinyin: Vec<Vec<String>>,
}

/// Character ↔ pronunciation lookup.
#[derive(Debug, Clone, Default)]
pub struct CharacterDict {
    h2p: AHashMap<String, Vec<String>>,
    p2h: AHashMap<String, Vec<String>>,
    // Pronunciations in first-seen order, for reproducible derivations.
    pron_order: Vec<String>,
}

impl CharacterDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the mutual indices from a parsed table.
    pub fn from_table(table: &DictTable) -> Self {
        let mut dict = Self::new();
        for (hanzi, prons) in table.hanzi.iter().zip(table.pinyin.iter()) {
            for pron in prons {
                dict.insert(hanzi, pron);
            }
        }
        debug!(
            characters = dict.h2p.len(),
            pronunciations = dict.pron_order.len(),
            "built character dictionary"
        );
        dict
    }

    /// Parse a dictionary from its JSON representation.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let table: DictTable =
            serde_json::from_str(content).context("parse character dictionary")?;
        Ok(Self::from_table(&table))
    }

    /// Load a dictionary from a JSON file.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read dictionary {}", path.display()))?;
        Self::from_json_str(&content)
    }

    /// Register one (character, pronunciation) pairing in both directions.
    pub fn insert(&mut self, hanzi: &str, pronunciation: &str) {
        let hanzi = normalize(hanzi);
        let pron = pronunciation.trim().to_ascii_lowercase();
        if hanzi.is_empty() || pron.is_empty() {
            return;
        }

        let prons = self.h2p.entry(hanzi.clone()).or_default();
        if !prons.contains(&pron) {
            prons.push(pron.clone());
        }

        match self.p2h.get_mut(&pron) {
            Some(chars) => {
                if !chars.contains(&hanzi) {
                    chars.push(hanzi);
                }
            }
            None => {
                self.pron_order.push(pron.clone());
                self.p2h.insert(pron, vec![hanzi]);
            }
        }
    }

    /// Pronunciations of a character; empty for unknown characters.
    pub fn pronunciations_of(&self, hanzi: &str) -> &[String] {
        self.h2p.get(hanzi).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Characters carrying a pronunciation; empty for unknown spellings.
    pub fn characters_of(&self, pronunciation: &str) -> &[String] {
        self.p2h
            .get(pronunciation)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Distinct pronunciations in first-seen order.
    pub fn pronunciations(&self) -> impl Iterator<Item = &str> {
        self.pron_order.iter().map(String::as_str)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.h2p.len()
    }

    pub fn is_empty(&self) -> bool {
        self.h2p.is_empty()
    }
}
