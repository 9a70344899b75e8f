use std::{
    borrow::Borrow,
    collections::{hash_map::Entry, HashMap, HashSet},
    fmt,
    hash::Hash,
    sync::atomic::{AtomicU64, Ordering},
};

use log::{debug, warn};
use once_cell::unsync::OnceCell;

use crate::{
    error::{check_room, MapError},
    iter::{Cursor, Iter},
    view::ReadOnlyView,
};

/// A map whose contents live in two parallel sequences, `keys` and `values`,
/// so that a serializer can walk them without knowing anything about hashing.
///
/// `values[i]` is paired with `keys[i]`. A key → position index sits beside
/// the sequences; it is never persisted and is built the first time an
/// operation needs it, which lets a deserializer fill the sequences directly
/// (see [`IndexedMap::from_raw_parts`]).
///
/// Removal moves the last pair into the vacated slot, so storage order is only
/// insertion order until the first removal. Nothing in the public API exposes
/// positions.
pub struct IndexedMap<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
    index: OnceCell<HashMap<K, usize>>,
    version: u64,
    identity: u64,
}

// Distinguishes maps for cursors; a fresh value per constructed or cloned map.
static NEXT_IDENTITY: AtomicU64 = AtomicU64::new(0);

fn next_identity() -> u64 {
    NEXT_IDENTITY.fetch_add(1, Ordering::Relaxed)
}

impl<K, V> IndexedMap<K, V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            index: OnceCell::new(),
            version: 0,
            identity: next_identity(),
        }
    }

    /// Builds a map over sequences filled by someone else, usually a
    /// deserializer. The index is left unbuilt.
    ///
    /// Repeated keys are not checked here. Lookups and removals on such a map
    /// are unspecified until [`IndexedMap::validate`] has accepted it.
    pub fn from_raw_parts(keys: Vec<K>, values: Vec<V>) -> Result<Self, MapError> {
        if keys.len() != values.len() {
            return Err(MapError::InvalidArgument(
                "raw key and value sequences must have equal length",
            ));
        }
        Ok(Self {
            keys,
            values,
            index: OnceCell::new(),
            version: 0,
            identity: next_identity(),
        })
    }

    pub fn into_raw_parts(self) -> (Vec<K>, Vec<V>) {
        (self.keys, self.values)
    }

    /// The backing key sequence, in storage order.
    pub fn raw_keys(&self) -> &[K] {
        &self.keys
    }

    /// The backing value sequence, in storage order.
    pub fn raw_values(&self) -> &[V] {
        &self.values
    }

    /// Hands both backing sequences to `f` for direct editing.
    ///
    /// The index is discarded and rebuilt on next use, and the version is
    /// bumped so live cursors fail. If `f` leaves the sequences with unequal
    /// lengths, both are truncated to the shorter one and an error is
    /// returned.
    pub fn with_raw_parts_mut<R>(
        &mut self,
        f: impl FnOnce(&mut Vec<K>, &mut Vec<V>) -> R,
    ) -> Result<R, MapError> {
        self.index = OnceCell::new();
        self.version += 1;

        let output = f(&mut self.keys, &mut self.values);

        if self.keys.len() != self.values.len() {
            let len = self.keys.len().min(self.values.len());
            warn!(
                "raw edit left {} keys and {} values, truncating both to {}",
                self.keys.len(),
                self.values.len(),
                len
            );
            self.keys.truncate(len);
            self.values.truncate(len);
            return Err(MapError::InvalidArgument(
                "raw key and value sequences must have equal length",
            ));
        }

        Ok(output)
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.keys.len(), self.values.len());
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Counter bumped by every structural mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn identity(&self) -> u64 {
        self.identity
    }

    /// Whether the lookup index currently exists.
    pub fn index_is_built(&self) -> bool {
        self.index.get().is_some()
    }

    /// Read-only view over the live key sequence.
    pub fn keys(&self) -> ReadOnlyView<'_, K> {
        ReadOnlyView::new(&self.keys)
    }

    /// Read-only view over the live value sequence.
    pub fn values(&self) -> ReadOnlyView<'_, V> {
        ReadOnlyView::new(&self.values)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.keys, &self.values)
    }

    /// Starts a version-checked pass over the map. See [`Cursor`].
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.identity, self.version)
    }

    pub(crate) fn entry_at(&self, position: usize) -> Option<(&K, &V)> {
        Some((self.keys.get(position)?, self.values.get(position)?))
    }

    /// Copies every pair into `buffer` starting at `offset`.
    pub fn copy_into(&self, buffer: &mut [(K, V)], offset: usize) -> Result<(), MapError>
    where
        K: Clone,
        V: Clone,
    {
        check_room(buffer.len(), offset, self.len())?;
        for (slot, (key, value)) in buffer[offset..].iter_mut().zip(self.iter()) {
            *slot = (key.clone(), value.clone());
        }
        Ok(())
    }
}

impl<K: Eq + Hash + Clone, V> IndexedMap<K, V> {
    /// Builds a map by inserting each pair in turn; fails on the first
    /// repeated key.
    pub fn from_pairs<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Result<Self, MapError> {
        let mut map = Self::new();
        map.try_extend(pairs)?;
        Ok(map)
    }

    /// Inserts each pair in turn. Pairs inserted before a duplicate stay in
    /// the map.
    pub fn try_extend<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) -> Result<(), MapError> {
        for (key, value) in pairs {
            self.insert(key, value)?;
        }
        Ok(())
    }

    fn index(&self) -> &HashMap<K, usize> {
        self.index.get_or_init(|| build_index(&self.keys))
    }

    /// Removes the index from its cell for a mutation, building it if absent.
    /// Pair with [`Self::restore_index`].
    fn take_index(&mut self) -> HashMap<K, usize> {
        match self.index.take() {
            Some(index) => index,
            None => build_index(&self.keys),
        }
    }

    fn restore_index(&mut self, index: HashMap<K, usize>) {
        self.index = OnceCell::with_value(index);
    }

    /// Discards the index and builds it again from the key sequence.
    pub fn rebuild_index(&mut self) {
        let index = build_index(&self.keys);
        self.restore_index(index);
    }

    /// Checks the raw sequences for repeated keys.
    pub fn validate(&self) -> Result<(), MapError> {
        let mut seen = HashSet::with_capacity(self.keys.len());
        if self.keys.iter().all(|key| seen.insert(key)) {
            Ok(())
        } else {
            Err(MapError::DuplicateKey)
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index().contains_key(key)
    }

    /// Whether `key` is present and paired with a value equal to `value`.
    pub fn contains_entry<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: PartialEq,
    {
        self.try_get(key) == Some(value)
    }

    pub fn get<Q>(&self, key: &Q) -> Result<&V, MapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.try_get(key).ok_or(MapError::KeyNotFound)
    }

    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = *self.index().get(key)?;
        Some(&self.values[position])
    }

    /// Mutable access to a value. Counts as an overwrite, so live cursors
    /// fail afterwards.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = *self.index().get(key)?;
        self.version += 1;
        Some(&mut self.values[position])
    }

    /// Adds a new pair. Fails without touching the map if `key` is present.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), MapError> {
        let mut index = self.take_index();
        let result = match index.entry(key) {
            Entry::Occupied(_) => Err(MapError::DuplicateKey),
            Entry::Vacant(entry) => {
                let key = entry.key().clone();
                entry.insert(self.keys.len());
                self.push(key, value);
                Ok(())
            }
        };
        self.restore_index(index);
        result
    }

    /// Overwrites the value for `key`, inserting the pair if it is absent.
    pub fn set(&mut self, key: K, value: V) {
        let mut index = self.take_index();
        match index.entry(key) {
            Entry::Occupied(entry) => {
                self.values[*entry.get()] = value;
                self.version += 1;
            }
            Entry::Vacant(entry) => {
                let key = entry.key().clone();
                entry.insert(self.keys.len());
                self.push(key, value);
            }
        }
        self.restore_index(index);
    }

    fn push(&mut self, key: K, value: V) {
        self.keys.push(key);
        self.values.push(value);
        self.version += 1;
    }

    /// Removes `key`, returning whether it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes `key` and returns its value.
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut index = self.take_index();
        let removed = index
            .remove(key)
            .map(|position| self.swap_remove_at(&mut index, position));
        self.restore_index(index);
        removed
    }

    /// Removes `key` only if it is paired with a value equal to `value`.
    pub fn remove_entry<Q>(&mut self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: PartialEq,
    {
        if !self.contains_entry(key, value) {
            return false;
        }
        self.take(key).is_some()
    }

    // The caller has already dropped the removed key from `index`.
    fn swap_remove_at(&mut self, index: &mut HashMap<K, usize>, position: usize) -> V {
        self.keys.swap_remove(position);
        let value = self.values.swap_remove(position);

        // the old last pair now sits at `position`, unless it was the one removed
        if let Some(moved) = self.keys.get(position) {
            if let Some(slot) = index.get_mut(moved) {
                *slot = position;
            }
        }

        self.version += 1;
        value
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
        match self.index.get_mut() {
            Some(index) => index.clear(),
            None => self.restore_index(HashMap::new()),
        }
        self.version += 1;
    }
}

fn build_index<K: Eq + Hash + Clone>(keys: &[K]) -> HashMap<K, usize> {
    let mut index = HashMap::with_capacity(keys.len());
    let mut duplicates = 0;
    for (position, key) in keys.iter().enumerate() {
        match index.entry(key.clone()) {
            Entry::Vacant(entry) => {
                entry.insert(position);
            }
            Entry::Occupied(_) => duplicates += 1,
        }
    }
    if duplicates > 0 {
        warn!(
            "key sequence holds {} repeated key(s); lookups resolve to the first occurrence",
            duplicates
        );
    }
    debug!("built index over {} key(s)", keys.len());
    index
}

impl<K, V> Default for IndexedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for IndexedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            values: self.values.clone(),
            index: self.index.clone(),
            version: self.version,
            identity: next_identity(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IndexedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Maps are equal when they hold the same pairs, whatever their storage order.
impl<K: Eq + Hash + Clone, V: PartialEq> PartialEq for IndexedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.try_get(key) == Some(value))
    }
}

impl<K: Eq + Hash + Clone, V: Eq> Eq for IndexedMap<K, V> {}

impl<'a, K, V> IntoIterator for &'a IndexedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
