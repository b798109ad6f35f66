use std::{
    borrow::Borrow,
    fmt,
    hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash},
};

use log::debug;

use super::TableError;
use crate::linked_list::{self, List};

/// Number of buckets a table starts with unless told otherwise.
pub const DEFAULT_BUCKET_SIZE: usize = 101;

/// The table grows before an insert that would add a key
/// while `items / buckets` is above this.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

pub const GROWTH_FACTOR: usize = 2;

/// Unseeded std hasher, so bucket placement (and therefore iteration order)
/// is the same on every run.
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

/// A separate chaining hash table.
///
/// Each bucket is a [`List`] owning its entries, new entries are linked in
/// at the head of their chain. The bucket for a key is `hash(key) % buckets`.
///
/// # Iteration order
///
/// Iteration walks the buckets in index order and each chain head to tail.
/// When the table grows, the old buckets are drained in index order, each
/// chain head to tail, and every entry is pushed onto the head of its new
/// chain. The resulting order is deterministic for a given sequence of
/// operations but is not something callers should depend on.
pub struct HashTable<K, V, S = DefaultHashBuilder> {
    buckets: Vec<List<K, V>>,
    items: usize,
    hash_builder: S,
}

impl<K, V> HashTable<K, V> {
    /// Creates an empty table with [`DEFAULT_BUCKET_SIZE`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUCKET_SIZE)
    }

    /// Creates an empty table with `size` buckets (at least one).
    pub fn with_capacity(size: usize) -> Self {
        Self::with_capacity_and_hasher(size, DefaultHashBuilder::default())
    }
}

impl<K, V, S: Default> Default for HashTable<K, V, S> {
    fn default() -> Self {
        Self::with_capacity_and_hasher(DEFAULT_BUCKET_SIZE, S::default())
    }
}

impl<K, V, S> HashTable<K, V, S> {
    pub fn with_capacity_and_hasher(size: usize, hash_builder: S) -> Self {
        // a zero sized bucket array has no valid bucket index
        let size = size.max(1);
        Self {
            buckets: (0..size).map(|_| List::new()).collect(),
            items: 0,
            hash_builder,
        }
    }

    /// Returns the number of entries in the table
    pub fn len(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Returns the number of buckets, or "slots" of the hash table
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the load factor of the hash table
    /// computed as num of items / num of buckets
    pub fn load_factor(&self) -> f64 {
        self.items as f64 / self.bucket_count() as f64
    }

    /// Drops every entry. The bucket count is kept as is.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.items = 0;
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: &self.buckets,
            chain: self.buckets[0].iter(),
            bucket_idx: 0,
            remaining: self.items,
        }
    }

    /// Every key exactly once, in iteration order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts a key-value pair, returning the previous value if the key
    /// was already present. Replacing a value never changes `len()`.
    ///
    /// # Panics
    ///
    /// Panics if the table needs to grow and the new bucket array cannot be
    /// allocated. Use [`try_insert`](Self::try_insert) to handle that case.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.try_insert(key, value) {
            Ok(old) => old,
            Err(e) => panic!("{e}"),
        }
    }

    /// Like [`insert`](Self::insert), but reports a failed bucket array
    /// allocation instead of panicking. On error nothing was inserted.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>, TableError> {
        let i = self.bucket_index(&key);
        if let Some(node) = self.buckets[i].find_mut(&key) {
            return Ok(Some(std::mem::replace(node.value_mut(), value)));
        }

        if self.load_factor() > MAX_LOAD_FACTOR {
            self.grow()?;
        }

        let i = self.bucket_index(&key);
        self.buckets[i].push(key, value);
        self.items += 1;
        Ok(None)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_key_value(key).map(|(_, v)| v)
    }

    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let i = self.bucket_index(key);
        self.buckets[i]
            .find(key)
            .map(|node| (node.key(), node.value()))
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let i = self.bucket_index(key);
        self.buckets[i].find_mut(key).map(|node| node.value_mut())
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Unlinks the entry for `key` and returns its value.
    /// Removing an absent key is a no-op returning `None`.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let i = self.bucket_index(key);
        let node = self.buckets[i].remove(key)?;
        self.items -= 1;
        Some(node.into_value())
    }

    // [private]

    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        (hash % self.buckets.len() as u64) as usize
    }

    /// Doubles the bucket count and moves every node into the new array.
    ///
    /// The new array is fully allocated before anything is moved, so a
    /// failed allocation leaves the table untouched.
    fn grow(&mut self) -> Result<(), TableError> {
        let old_cap = self.bucket_count();
        let new_cap = old_cap * GROWTH_FACTOR;

        let mut new_buckets = Vec::new();
        new_buckets
            .try_reserve_exact(new_cap)
            .map_err(|source| TableError::Alloc {
                buckets: new_cap,
                source,
            })?;
        new_buckets.extend((0..new_cap).map(|_| List::new()));

        let old_buckets = std::mem::replace(&mut self.buckets, new_buckets);
        for mut bucket in old_buckets {
            while let Some(node) = bucket.pop_boxed() {
                let i = self.bucket_index(node.key());
                self.buckets[i].push_boxed(node);
            }
        }

        debug!(target: "rehash", "grew from {old_cap} to {new_cap} buckets, {} items", self.items);
        Ok(())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashTable<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> Extend<(K, V)> for HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashTable<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// [iterators]

pub struct Iter<'a, K, V> {
    buckets: &'a [List<K, V>],
    chain: linked_list::Iter<'a, K, V>,
    bucket_idx: usize,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.chain.next() {
                self.remaining -= 1;
                return Some((&node.key, &node.value));
            }
            self.bucket_idx += 1;
            self.chain = self.buckets.get(self.bucket_idx)?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
