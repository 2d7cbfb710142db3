use std::hash::Hasher;

mod error;
pub use error::StoreError;

mod config;
pub use config::StoreConfig;

pub mod pack;
pub use pack::{pack, unpack};

/// Sentinel key marking an empty slot. No real RSID encodes to it under
/// the `rsN`/`iN` scheme (`rs0` is not an RSID 23andMe ever assigns), so it
/// is safe to reserve.
const EMPTY: i32 = 0;

/// Mix an RSID key across the table's buckets. Delegates to `ahash`'s
/// finalizer rather than hand-rolling a mixer, the same way the rest of
/// this codebase reaches for an existing crate at an ambient concern
/// instead of reimplementing one. Two's-complement bit patterns differ
/// between `+N` and `-N`, so `rsN` and `iN` of equal magnitude hash
/// distinctly without any special-casing here.
fn hash_key(key: i32) -> u64 {
    let mut hasher = ahash::AHasher::default();
    hasher.write_i32(key);
    hasher.finish()
}

/// A fixed-capacity, open-addressed hash table specialized for `i32` RSID
/// keys and packed `u64` SNP values.
///
/// Built purpose-specifically for this workload rather than wrapping a
/// general-purpose `HashMap`: keys are a single small-integer type, the
/// table is write-once during parsing and read-only afterward, and no
/// tombstones are ever needed since nothing is removed. Linear probing
/// keeps the probe sequence simple and identical for insertion and
/// lookup, as required.
#[derive(Debug, Clone)]
pub struct SnpStore {
    keys: Vec<i32>,
    values: Vec<u64>,
    len: usize,
}

impl SnpStore {
    /// Construct an empty store sized per `config`. Capacity is fixed for
    /// the lifetime of the store; it never grows.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        let capacity = config.capacity();
        Self { keys: vec![EMPTY; capacity], values: vec![0; capacity], len: 0 }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Insert or overwrite `key` with `value`. Last write wins on
    /// duplicate keys, matching the parser's requirement to silently
    /// overwrite late duplicate RSIDs in a 23andMe file.
    ///
    /// # Errors
    /// Returns [`StoreError::Full`] if no empty or matching slot is found
    /// within `capacity()` probes.
    pub fn insert(&mut self, key: i32, value: u64) -> Result<(), StoreError> {
        let mask = self.capacity() - 1;
        let mut idx = (hash_key(key) as usize) & mask;

        for _ in 0..self.capacity() {
            match self.keys[idx] {
                EMPTY => {
                    self.keys[idx] = key;
                    self.values[idx] = value;
                    self.len += 1;
                    return Ok(());
                }
                existing if existing == key => {
                    self.values[idx] = value;
                    return Ok(());
                }
                _ => idx = (idx + 1) & mask,
            }
        }
        log::warn!("SNP store exhausted all {} probes inserting key {key}; rejecting insert", self.capacity());
        Err(StoreError::Full(self.capacity()))
    }

    /// O(1) expected lookup of a previously inserted value.
    #[must_use]
    pub fn lookup(&self, key: i32) -> Option<u64> {
        let mask = self.capacity() - 1;
        let mut idx = (hash_key(key) as usize) & mask;

        for _ in 0..self.capacity() {
            match self.keys[idx] {
                EMPTY => return None,
                existing if existing == key => return Some(self.values[idx]),
                _ => idx = (idx + 1) & mask,
            }
        }
        None
    }

    #[must_use]
    pub fn contains(&self, key: i32) -> bool {
        self.lookup(key).is_some()
    }

    /// Iterate occupied slots in arbitrary, insertion-independent but
    /// stable (table-order) sequence.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        self.keys.iter().zip(self.values.iter()).filter_map(|(&k, &v)| (k != EMPTY).then_some((k, v)))
    }
}
