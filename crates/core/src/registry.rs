// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered registry with alias lookup and an independent display order.
//!
//! Entries iterate in registration order. Each entry is addressable by its
//! primary key and by any number of aliases (command names, option
//! shortcuts). Display order starts out equal to registration order and can
//! be overridden per entry with an explicit index.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::{DefinitionError, EntryKind};

#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: IndexMap<String, T>,
    aliases: HashMap<String, usize>,
    display: Vec<usize>,
    key_kind: EntryKind,
    alias_kind: EntryKind,
}

impl<T> Registry<T> {
    /// `key_kind` and `alias_kind` label duplicates in error messages.
    pub fn new(key_kind: EntryKind, alias_kind: EntryKind) -> Self {
        Self {
            entries: IndexMap::new(),
            aliases: HashMap::new(),
            display: Vec::new(),
            key_kind,
            alias_kind,
        }
    }

    /// Register `value` under `key` and `aliases`.
    ///
    /// Fails without mutating anything if the key or any alias is already
    /// taken, or if `aliases` repeats itself. `index` places the entry at
    /// that display position; `None` or an index past the end appends.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        aliases: &[String],
        value: T,
        index: Option<usize>,
    ) -> Result<usize, DefinitionError> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(DefinitionError::DuplicateKey {
                kind: self.key_kind,
                key,
            });
        }
        for (i, alias) in aliases.iter().enumerate() {
            if self.aliases.contains_key(alias) || aliases[..i].contains(alias) {
                return Err(DefinitionError::DuplicateKey {
                    kind: self.alias_kind,
                    key: alias.clone(),
                });
            }
        }

        let (slot, _) = self.entries.insert_full(key, value);
        for alias in aliases {
            self.aliases.insert(alias.clone(), slot);
        }
        match index {
            Some(at) if at <= self.display.len() => self.display.insert(at, slot),
            _ => self.display.push(slot),
        }
        Ok(slot)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.entries.get_mut(key)
    }

    /// Look up an entry by alias.
    pub fn resolve(&self, alias: &str) -> Option<&T> {
        let slot = *self.aliases.get(alias)?;
        self.entries.get_index(slot).map(|(_, v)| v)
    }

    pub fn resolve_mut(&mut self, alias: &str) -> Option<&mut T> {
        let slot = *self.aliases.get(alias)?;
        self.entries.get_index_mut(slot).map(|(_, v)| v)
    }

    /// Primary key of the entry an alias points at.
    pub fn key_of(&self, alias: &str) -> Option<&str> {
        let slot = *self.aliases.get(alias)?;
        self.entries.get_index(slot).map(|(k, _)| k.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.values_mut()
    }

    /// Entries in display order.
    pub fn display(&self) -> impl Iterator<Item = &T> {
        self.display
            .iter()
            .filter_map(|&slot| self.entries.get_index(slot).map(|(_, v)| v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
