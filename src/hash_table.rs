//! A fixed-size hash table with separate chaining.
//!
//! The bucket count is chosen once and never grows, so a small table makes
//! collisions easy to observe: every key lands in `hash(key) % buckets` and
//! shares that bucket's vector with whatever else hashed there.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

#[derive(Debug, Clone)]
pub struct ChainedHashTable<K, V, S = RandomState> {
    buckets: Vec<Vec<(K, V)>>,
    hasher: S,
    len: usize,
}

impl<K: Hash + Eq, V> ChainedHashTable<K, V> {
    /// Table with `buckets` chains (at least one).
    pub fn new(buckets: usize) -> Self {
        Self::with_hasher(buckets, RandomState::new())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ChainedHashTable<K, V, S> {
    pub fn with_hasher(buckets: usize, hasher: S) -> Self {
        let buckets = buckets.max(1);
        Self {
            buckets: (0..buckets).map(|_| Vec::new()).collect(),
            hasher,
            len: 0,
        }
    }

    #[inline]
    fn bucket_of(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Insert or update. Returns the previous value when the key existed.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_of(&key);
        let bucket = &mut self.buckets[index];

        if let Some((_, slot)) = bucket.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, value));
        }

        bucket.push((key, value));
        self.len += 1;
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.buckets[self.bucket_of(key)]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.bucket_of(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|(k, _)| k == key)?;
        self.len -= 1;
        Some(bucket.remove(position).1)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of each chain, in bucket order.
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }
}
