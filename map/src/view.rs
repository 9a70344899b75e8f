use std::slice;

use crate::error::{check_room, MapError};

/// Read-only access to one of an [`IndexedMap`](crate::IndexedMap)'s backing
/// sequences.
///
/// The view borrows the live sequence rather than copying it. Mutating calls
/// only exist on the dynamic [`DynCollection`](crate::DynCollection) surface,
/// where they always fail with [`MapError::Unsupported`].
#[derive(Debug)]
pub struct ReadOnlyView<'a, T> {
    items: &'a [T],
}

impl<'a, T> ReadOnlyView<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.items.iter()
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(item)
    }

    /// Copies the sequence into `buffer` starting at `offset`.
    pub fn copy_into(&self, buffer: &mut [T], offset: usize) -> Result<(), MapError>
    where
        T: Clone,
    {
        check_room(buffer.len(), offset, self.len())?;
        buffer[offset..offset + self.len()].clone_from_slice(self.items);
        Ok(())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }
}

impl<T> Clone for ReadOnlyView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReadOnlyView<'_, T> {}

impl<'a, T> IntoIterator for ReadOnlyView<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &ReadOnlyView<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
