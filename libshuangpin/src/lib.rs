//! libshuangpin crate root
//!
//! Shuangpin (two-keystroke shorthand) codec for a typing trainer: parses
//! per-key fragment assignments into schemes, derives the bidirectional
//! syllable ↔ code indices against the canonical inventory, and resolves
//! partial keystroke input against target syllables in real time.
//!
//! Public API exported here:
//! - `RawScheme` and the loader from `loader`
//! - `Scheme`, `KeyAssignment` and `SchemeBuilder` from `scheme`/`builder`
//! - `match_keys` and `MatchResult` from `matcher`
//! - `SchemeRegistry` from `registry`

pub mod builder;
pub mod data;
pub mod loader;
pub mod matcher;
pub mod registry;
pub mod scheme;

// Convenience re-exports for common types used by callers.
pub use builder::SchemeBuilder;
pub use loader::RawScheme;
pub use matcher::{match_keys, MatchResult};
pub use registry::{standard_inventory, SchemeRegistry};
pub use scheme::{KeyAssignment, Scheme};

// Shared core types, so downstream callers need only this crate.
pub use libshuangpin_core::{
    CharacterDict, Config, DictTable, InventorySummary, Syllable, SyllableInventory,
};
