//! Scheme registry: lazily builds and memoizes schemes by name.
//!
//! The registry is an explicit value owned by the hosting layer; nothing
//! here is global. Construction is not internally synchronized — callers
//! that might build the same name from several threads must guard `get`
//! with their own lock, after which the returned `Arc<Scheme>` is read-only
//! and freely shared.

use std::cell::RefCell;
use std::sync::Arc;

use ahash::AHashMap;
use once_cell::sync::Lazy;
use tracing::warn;

use libshuangpin_core::SyllableInventory;

use crate::builder::SchemeBuilder;
use crate::data::builtin_schemes;
use crate::loader::RawScheme;
use crate::scheme::Scheme;

static STANDARD_INVENTORY: Lazy<Arc<SyllableInventory>> =
    Lazy::new(|| Arc::new(SyllableInventory::standard()));

/// The shared standard inventory built from the embedded reference table.
pub fn standard_inventory() -> Arc<SyllableInventory> {
    Arc::clone(&STANDARD_INVENTORY)
}

/// Registry from scheme identifier to built scheme.
///
/// Built-ins are fixed at construction; user-supplied definitions are
/// insertable at runtime through the same lookup interface. User entries
/// shadow built-ins on lookup, matching how locally saved definitions
/// behave in the trainer.
#[derive(Debug)]
pub struct SchemeRegistry {
    builtin: Vec<(String, RawScheme)>,
    user: Vec<(String, RawScheme)>,
    inventory: Arc<SyllableInventory>,
    cache: RefCell<AHashMap<String, Arc<Scheme>>>,
}

impl SchemeRegistry {
    /// Registry over the standard inventory with the built-in schemes.
    pub fn new() -> Self {
        Self::with_inventory(standard_inventory())
    }

    /// Registry over a caller-supplied inventory (e.g. one derived from a
    /// character dictionary).
    pub fn with_inventory(inventory: Arc<SyllableInventory>) -> Self {
        let builtin = builtin_schemes()
            .into_iter()
            .map(|(name, raw)| (name.to_string(), raw))
            .collect();
        Self {
            builtin,
            user: Vec::new(),
            inventory,
            cache: RefCell::new(AHashMap::new()),
        }
    }

    /// All known scheme names: built-ins first, then user entries, in
    /// declaration order.
    pub fn names(&self) -> Vec<String> {
        self.builtin
            .iter()
            .chain(self.user.iter())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Name of the fallback scheme (the first built-in).
    pub fn default_name(&self) -> &str {
        &self.builtin[0].0
    }

    /// True if a name denotes a built-in or user scheme.
    pub fn contains(&self, name: &str) -> bool {
        self.raw_scheme(name).is_some()
    }

    /// The raw definition behind a name, for the persistence layer.
    pub fn raw_scheme(&self, name: &str) -> Option<&RawScheme> {
        self.user
            .iter()
            .chain(self.builtin.iter())
            .find(|(n, _)| n == name)
            .map(|(_, raw)| raw)
    }

    /// Get a scheme by name, building and memoizing it on first use.
    ///
    /// An unknown name falls back to the first built-in; callers detect
    /// the substitution by comparing the requested name against
    /// `scheme.name()`.
    pub fn get(&self, name: &str) -> Arc<Scheme> {
        let resolved = if self.contains(name) {
            name
        } else {
            warn!(requested = name, fallback = self.default_name(), "unknown scheme name");
            self.default_name()
        };

        if let Some(scheme) = self.cache.borrow().get(resolved) {
            return Arc::clone(scheme);
        }

        // contains() held above, so the raw definition must exist.
        let raw = self
            .raw_scheme(resolved)
            .cloned()
            .unwrap_or_default();
        let scheme = Arc::new(
            SchemeBuilder::new(resolved, &raw, Arc::clone(&self.inventory)).build(),
        );
        self.cache
            .borrow_mut()
            .insert(resolved.to_string(), Arc::clone(&scheme));
        scheme
    }

    /// Insert a user-supplied definition and return the name it was stored
    /// under. A name colliding with a known scheme is stored with a
    /// " (copy)" suffix instead of overwriting.
    pub fn insert(&mut self, name: &str, raw: RawScheme) -> String {
        let mut stored = name.to_string();
        while self.contains(&stored) {
            stored.push_str(" (copy)");
        }
        self.user.push((stored.clone(), raw));
        stored
    }

    /// Remove a user definition (built-ins cannot be removed). Returns
    /// whether anything was deleted.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.user.len();
        self.user.retain(|(n, _)| n != name);
        let removed = self.user.len() != before;
        if removed {
            self.cache.borrow_mut().remove(name);
        }
        removed
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
