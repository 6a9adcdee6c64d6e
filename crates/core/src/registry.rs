// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Name interning for sender and event ids

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Id that never refers to a registered name
pub const INVALID_ID: u32 = u32::MAX;

/// Maps sender/event names to integer ids and back
pub trait IdRegistry: Clone + Send + Sync + 'static {
    /// Look up the id of a known name
    fn resolve(&self, name: &str) -> Option<u32>;

    /// Look up the id of a name, interning it if unknown
    fn resolve_or_create(&self, name: &str) -> u32;

    /// Name registered under `id`
    fn name_of(&self, id: u32) -> Option<String>;
}

#[derive(Default)]
struct Table {
    names: Vec<String>,
    ids: HashMap<String, u32>,
}

/// In-process string table; clones share the same table
#[derive(Clone, Default)]
pub struct InternRegistry {
    table: Arc<RwLock<Table>>,
}

impl InternRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of interned names
    pub fn len(&self) -> usize {
        self.table
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .names
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IdRegistry for InternRegistry {
    fn resolve(&self, name: &str) -> Option<u32> {
        self.table
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .ids
            .get(name)
            .copied()
    }

    fn resolve_or_create(&self, name: &str) -> u32 {
        if let Some(id) = self.resolve(name) {
            return id;
        }

        let mut table = self.table.write().unwrap_or_else(|e| e.into_inner());
        // Another writer may have interned it between the read and the write lock
        if let Some(id) = table.ids.get(name) {
            return *id;
        }
        let id = u32::try_from(table.names.len()).unwrap_or(INVALID_ID);
        if id == INVALID_ID {
            tracing::warn!(name, "id registry is full");
            return INVALID_ID;
        }
        table.names.push(name.to_string());
        table.ids.insert(name.to_string(), id);
        id
    }

    fn name_of(&self, id: u32) -> Option<String> {
        self.table
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .names
            .get(id as usize)
            .cloned()
    }
}
