//! Lift registry: the canonical name -> 1RM mapping.
//!
//! The registry owns the in-memory mapping and writes the whole mapping to
//! its store after every successful mutation. Rejected edits never touch
//! the mapping or the store.

use std::collections::BTreeMap;

use super::types::{
    validate_max, LiftEntry, RegistryError, RenameCollisionPolicy, DEFAULT_LIFTS, LIFTS_KEY,
};
use crate::storage::KeyValueStore;

/// Name -> 1RM mapping as persisted.
pub type LiftMap = BTreeMap<String, f64>;

/// The default mapping used to seed an empty store.
pub fn default_lifts() -> LiftMap {
    DEFAULT_LIFTS
        .iter()
        .map(|(name, max)| (name.to_string(), *max))
        .collect()
}

/// Read the persisted mapping, if any.
pub fn read_persisted<S: KeyValueStore>(store: &S) -> Result<Option<LiftMap>, RegistryError> {
    match store.get(LIFTS_KEY)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(RegistryError::Corrupt),
        None => Ok(None),
    }
}

/// Read the persisted mapping, falling back to the defaults when nothing is stored.
///
/// A stored mapping is returned as-is, never merged with the defaults.
pub fn load_lifts<S: KeyValueStore>(store: &S) -> Result<LiftMap, RegistryError> {
    Ok(read_persisted(store)?.unwrap_or_else(default_lifts))
}

/// Serialize `lifts` and write it under the lifts key, replacing the prior value.
pub fn save_lifts<S: KeyValueStore>(store: &mut S, lifts: &LiftMap) -> Result<(), RegistryError> {
    let json = serde_json::to_string(lifts).map_err(RegistryError::Serialization)?;
    store.set(LIFTS_KEY, &json)?;
    Ok(())
}

/// Registry of lifts backed by a key-value store.
pub struct LiftRegistry<S: KeyValueStore> {
    store: S,
    lifts: LiftMap,
    policy: RenameCollisionPolicy,
}

impl<S: KeyValueStore> LiftRegistry<S> {
    /// Open the registry over `store`.
    ///
    /// On first use (nothing stored) the default lifts are seeded and persisted.
    pub fn open(mut store: S, policy: RenameCollisionPolicy) -> Result<Self, RegistryError> {
        let lifts = match read_persisted(&store)? {
            Some(lifts) => {
                tracing::info!("Loaded {} lifts from storage", lifts.len());
                lifts
            }
            None => {
                let lifts = default_lifts();
                save_lifts(&mut store, &lifts)?;
                tracing::info!("Seeded registry with {} default lifts", lifts.len());
                lifts
            }
        };

        Ok(Self {
            store,
            lifts,
            policy,
        })
    }

    /// Wrap `store` around an already-loaded mapping without reading or writing it.
    pub fn with_lifts(store: S, lifts: LiftMap, policy: RenameCollisionPolicy) -> Self {
        Self {
            store,
            lifts,
            policy,
        }
    }

    /// Close the registry and hand back its store.
    pub fn close(self) -> S {
        self.store
    }

    /// Persist the full mapping.
    pub fn save(&mut self) -> Result<(), RegistryError> {
        save_lifts(&mut self.store, &self.lifts).map_err(|e| {
            tracing::warn!("Failed to persist lifts: {}", e);
            e
        })?;
        tracing::debug!("Persisted {} lifts", self.lifts.len());
        Ok(())
    }

    /// Add a new lift.
    pub fn add(&mut self, name: &str, max: f64) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.lifts.contains_key(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        validate_max(max)?;

        self.lifts.insert(name.to_string(), max);
        tracing::debug!("Added lift '{}' ({})", name, max);
        self.save()
    }

    /// Replace the lift at `old_name` with `new_name -> new_max`.
    ///
    /// When `new_name` already belongs to another lift, the registry's
    /// [`RenameCollisionPolicy`] decides between replacing that entry and
    /// rejecting the call. An `old_name` that is not present is simply
    /// inserted under `new_name`.
    pub fn rename(
        &mut self,
        old_name: &str,
        new_name: &str,
        new_max: f64,
    ) -> Result<(), RegistryError> {
        if new_name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        validate_max(new_max)?;

        if new_name != old_name && self.lifts.contains_key(new_name) {
            match self.policy {
                RenameCollisionPolicy::Reject => {
                    return Err(RegistryError::NameCollision(new_name.to_string()));
                }
                RenameCollisionPolicy::Overwrite => {
                    tracing::warn!(
                        "Renaming '{}' to '{}' replaces the existing '{}' entry",
                        old_name,
                        new_name,
                        new_name
                    );
                }
            }
        }

        self.lifts.remove(old_name);
        self.lifts.insert(new_name.to_string(), new_max);
        tracing::debug!("Renamed lift '{}' to '{}' ({})", old_name, new_name, new_max);
        self.save()
    }

    /// Remove a lift. Removing an unknown name is a no-op.
    ///
    /// Returns whether an entry was removed.
    pub fn remove(&mut self, name: &str) -> Result<bool, RegistryError> {
        if self.lifts.remove(name).is_none() {
            return Ok(false);
        }

        tracing::debug!("Removed lift '{}'", name);
        self.save()?;
        Ok(true)
    }

    /// All lifts, sorted by name ignoring case; exact name breaks ties.
    pub fn snapshot(&self) -> Vec<LiftEntry> {
        let mut entries: Vec<LiftEntry> = self
            .lifts
            .iter()
            .map(|(name, max)| LiftEntry::new(name.clone(), *max))
            .collect();
        entries.sort_by_cached_key(|entry| (entry.name.to_lowercase(), entry.name.clone()));
        entries
    }

    /// The current mapping.
    pub fn lifts(&self) -> &LiftMap {
        &self.lifts
    }

    /// 1RM of the named lift.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.lifts.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lifts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.lifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lifts.is_empty()
    }

    /// Current rename collision policy.
    pub fn policy(&self) -> RenameCollisionPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: RenameCollisionPolicy) {
        self.policy = policy;
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
