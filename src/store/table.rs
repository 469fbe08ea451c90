//! Store implementation
//!
//! Sharded HashMap store with one Mutex per shard.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use parking_lot::Mutex;

use super::{Key, Value};
use crate::config::Config;
use crate::error::{Result, TallyError};

/// Default number of shards when none is configured
const DEFAULT_SHARDS: usize = 16;

type Shard = Mutex<HashMap<Key, Value>>;

/// In-memory key to value store
///
/// ## Concurrency Model
///
/// - Each key belongs to exactly one shard.
/// - Every operation locks only that shard, does its check and its
///   mutation, and drops the guard before returning. Nothing awaits or
///   performs I/O while a guard is held.
/// - Create/increment/decrement never wait for a key to appear; they
///   fail immediately.
pub struct Store {
    shards: Box<[Shard]>,
}

impl Store {
    /// Create a store with the default shard count
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARDS)
    }

    /// Create a store split over `count` shards (at least one)
    pub fn with_shards(count: usize) -> Self {
        let shards = (0..count.max(1))
            .map(|_| Mutex::new(HashMap::new()))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self { shards }
    }

    /// Create a store sized from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_shards(config.shard_count))
    }

    /// Current value of `key`, or zero when no entry exists
    pub fn read(&self, key: &Key) -> Value {
        let shard = self.shard(key).lock();
        shard.get(key).copied().unwrap_or(0.0)
    }

    /// Create the entry for `key` with `value`
    ///
    /// Never overwrites: fails with `AlreadyExists` if the key has an
    /// entry, leaving it untouched.
    pub fn create_if_absent(&self, key: Key, value: Value) -> Result<Value> {
        let mut shard = self.shard(&key).lock();
        match shard.entry(key) {
            Entry::Occupied(_) => Err(TallyError::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(value)
            }
        }
    }

    /// Add one to an existing entry, returning the new value
    pub fn increment(&self, key: &Key) -> Result<Value> {
        self.apply(key, 1.0)
    }

    /// Subtract one from an existing entry, returning the new value
    pub fn decrement(&self, key: &Key) -> Result<Value> {
        self.apply(key, -1.0)
    }

    /// Whether an entry exists for `key`
    pub fn contains(&self, key: &Key) -> bool {
        self.shard(key).lock().contains_key(key)
    }

    /// Total number of entries across all shards
    ///
    /// Shards are locked one at a time, so under concurrent creates the
    /// count is only a snapshot.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.lock().is_empty())
    }

    /// Number of independently locked shards
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn apply(&self, key: &Key, delta: Value) -> Result<Value> {
        let mut shard = self.shard(key).lock();
        let entry = shard.get_mut(key).ok_or(TallyError::NotFound)?;
        *entry += delta;
        Ok(*entry)
    }

    fn shard(&self, key: &Key) -> &Shard {
        let (high, low) = key.as_u64_pair();
        let index = (high ^ low) % self.shards.len() as u64;
        &self.shards[index as usize]
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("shards", &self.shard_count())
            .field("entries", &self.len())
            .finish()
    }
}
