use std::{iter::FusedIterator, slice};

use crate::{error::MapError, map::IndexedMap};

/// Borrowing iterator over the `(key, value)` pairs of an [`IndexedMap`], in
/// storage order.
pub struct Iter<'a, K, V> {
    keys: slice::Iter<'a, K>,
    values: slice::Iter<'a, V>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(keys: &'a [K], values: &'a [V]) -> Self {
        Self {
            keys: keys.iter(),
            values: values.iter(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.keys.next()?, self.values.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// A detached position in an [`IndexedMap`].
///
/// Unlike [`Iter`], a cursor does not borrow the map between steps, so the
/// owner is free to mutate the map while a pass is in progress. The cursor
/// records which map it was created from and that map's version, and every
/// call to [`Cursor::next`] compares both against the map it is given. Any
/// mutation in between, or stepping a different map (including a clone),
/// makes the step fail with [`MapError::ConcurrentModification`].
///
/// A cursor is single pass. Once it has reported the end it keeps returning
/// `Ok(None)` (while the version still matches); call
/// [`IndexedMap::cursor`] again for a fresh pass.
#[derive(Debug, Clone)]
pub struct Cursor {
    position: usize,
    identity: u64,
    version: u64,
}

impl Cursor {
    pub(crate) fn new(identity: u64, version: u64) -> Self {
        Self {
            position: 0,
            identity,
            version,
        }
    }

    /// Advances the cursor, returning the pair at its position or `None` at
    /// the end.
    pub fn next<'m, K, V>(
        &mut self,
        map: &'m IndexedMap<K, V>,
    ) -> Result<Option<(&'m K, &'m V)>, MapError> {
        if map.identity() != self.identity || map.version() != self.version {
            return Err(MapError::ConcurrentModification);
        }

        let entry = map.entry_at(self.position);
        if entry.is_some() {
            self.position += 1;
        }
        Ok(entry)
    }

    /// Number of pairs this cursor has yielded.
    pub fn position(&self) -> usize {
        self.position
    }
}
