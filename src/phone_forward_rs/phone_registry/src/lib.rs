/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Named, independent sets of phone number redirections.
//!
//! A [`Registry`] maps identifiers to [`PhoneForward`] bases and keeps track
//! of the *active* base, the one operations apply to. Bases are created the
//! first time they are selected and live until they are removed.

use std::collections::hash_map::Entry;

use phone_forward::{PhoneForward, Result};
use rustc_hash::FxHashMap;
use tracing::debug;

/// A collection of [`PhoneForward`] bases indexed by identifier.
#[derive(Debug, Default)]
pub struct Registry {
    /// Mapping from identifier to base.
    bases: FxHashMap<Box<str>, PhoneForward>,
    /// Identifier of the active base. Always a key of `bases`.
    active: Option<Box<str>>,
}

impl Registry {
    /// Create a registry with no base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `id` the active base, creating an empty base if none exists
    /// under that identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneForwardError::Allocation`](phone_forward::PhoneForwardError::Allocation)
    /// if the base cannot be created. The registry is then left unchanged.
    pub fn select(&mut self, id: &str) -> Result<&mut PhoneForward> {
        let created = if self.bases.contains_key(id) {
            None
        } else {
            self.bases.try_reserve(1)?;
            Some(PhoneForward::try_new()?)
        };
        let key = owned_id(id)?;
        let active = owned_id(id)?;

        self.active = Some(active);
        let base = match self.bases.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                debug!(id, "created base");
                entry.insert(created.unwrap_or_default())
            }
        };
        Ok(base)
    }

    /// Destroy the base stored under `id`.
    ///
    /// Returns `false` if there is no such base. Removing the active base
    /// leaves the registry without an active base.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(base) = self.bases.remove(id) else {
            return false;
        };
        let was_active = self.active.as_deref() == Some(id);
        if was_active {
            self.active = None;
        }
        debug!(
            id,
            was_active,
            n_redirections = base.n_redirections(),
            "removed base"
        );
        true
    }

    /// The active base, if any.
    pub fn active(&self) -> Option<&PhoneForward> {
        self.bases.get(self.active.as_deref()?)
    }

    /// The active base, if any.
    pub fn active_mut(&mut self) -> Option<&mut PhoneForward> {
        self.bases.get_mut(self.active.as_deref()?)
    }

    /// Identifier of the active base, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether a base is stored under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.bases.contains_key(id)
    }

    /// Get the base stored under `id`.
    pub fn get(&self, id: &str) -> Option<&PhoneForward> {
        self.bases.get(id)
    }

    /// Number of bases.
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

fn owned_id(id: &str) -> Result<Box<str>> {
    let mut owned = String::new();
    owned.try_reserve_exact(id.len())?;
    owned.push_str(id);
    Ok(owned.into_boxed_str())
}
