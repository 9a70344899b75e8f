//! Loosely typed access for code that walks collections without knowing
//! their key and value types, such as a generic inspector or scene walker.
//!
//! Every call downcasts its arguments to the concrete types and hands off to
//! the typed [`IndexedMap`] API.

use std::{
    any::{type_name, Any},
    hash::Hash,
};

use crate::{error::MapError, map::IndexedMap, view::ReadOnlyView};

fn mismatch<T>() -> MapError {
    MapError::TypeMismatch {
        expected: type_name::<T>(),
    }
}

fn downcast_ref<T: 'static>(item: &dyn Any) -> Result<&T, MapError> {
    item.downcast_ref::<T>().ok_or_else(mismatch::<T>)
}

fn downcast_box<T: 'static>(item: Box<dyn Any>) -> Result<T, MapError> {
    item.downcast::<T>()
        .map(|boxed| *boxed)
        .map_err(|_| mismatch::<T>())
}

/// A sequence reachable through `dyn Any` items.
pub trait DynCollection {
    fn len_dyn(&self) -> usize;
    fn is_read_only(&self) -> bool;
    fn contains_dyn(&self, item: &dyn Any) -> Result<bool, MapError>;
    fn iter_dyn(&self) -> Box<dyn Iterator<Item = &dyn Any> + '_>;
    fn push_dyn(&mut self, item: Box<dyn Any>) -> Result<(), MapError>;
    fn remove_dyn(&mut self, item: &dyn Any) -> Result<bool, MapError>;
    fn clear_dyn(&mut self) -> Result<(), MapError>;
}

/// A map reachable through `dyn Any` keys and values.
pub trait DynMap {
    fn key_type_name(&self) -> &'static str;
    fn value_type_name(&self) -> &'static str;
    fn len_dyn(&self) -> usize;
    fn contains_key_dyn(&self, key: &dyn Any) -> Result<bool, MapError>;
    fn get_dyn(&self, key: &dyn Any) -> Result<&dyn Any, MapError>;
    fn insert_dyn(&mut self, key: Box<dyn Any>, value: Box<dyn Any>) -> Result<(), MapError>;
    fn set_dyn(&mut self, key: Box<dyn Any>, value: Box<dyn Any>) -> Result<(), MapError>;
    fn remove_dyn(&mut self, key: &dyn Any) -> Result<bool, MapError>;
    fn clear_dyn(&mut self);
    fn keys_dyn(&self) -> Box<dyn DynCollection + '_>;
    fn values_dyn(&self) -> Box<dyn DynCollection + '_>;
    fn entries_dyn(&self) -> Box<dyn Iterator<Item = (&dyn Any, &dyn Any)> + '_>;
}

const READ_ONLY: &str = "the collection is read-only";

impl<T: PartialEq + 'static> DynCollection for ReadOnlyView<'_, T> {
    fn len_dyn(&self) -> usize {
        self.len()
    }

    fn is_read_only(&self) -> bool {
        true
    }

    fn contains_dyn(&self, item: &dyn Any) -> Result<bool, MapError> {
        Ok(self.contains(downcast_ref::<T>(item)?))
    }

    fn iter_dyn(&self) -> Box<dyn Iterator<Item = &dyn Any> + '_> {
        Box::new(self.iter().map(|item| item as &dyn Any))
    }

    fn push_dyn(&mut self, _: Box<dyn Any>) -> Result<(), MapError> {
        Err(MapError::Unsupported(READ_ONLY))
    }

    fn remove_dyn(&mut self, _: &dyn Any) -> Result<bool, MapError> {
        Err(MapError::Unsupported(READ_ONLY))
    }

    fn clear_dyn(&mut self) -> Result<(), MapError> {
        Err(MapError::Unsupported(READ_ONLY))
    }
}

impl<K, V> DynMap for IndexedMap<K, V>
where
    K: Eq + Hash + Clone + 'static,
    V: PartialEq + 'static,
{
    fn key_type_name(&self) -> &'static str {
        type_name::<K>()
    }

    fn value_type_name(&self) -> &'static str {
        type_name::<V>()
    }

    fn len_dyn(&self) -> usize {
        self.len()
    }

    fn contains_key_dyn(&self, key: &dyn Any) -> Result<bool, MapError> {
        Ok(self.contains_key(downcast_ref::<K>(key)?))
    }

    fn get_dyn(&self, key: &dyn Any) -> Result<&dyn Any, MapError> {
        let value = self.get(downcast_ref::<K>(key)?)?;
        Ok(value as &dyn Any)
    }

    fn insert_dyn(&mut self, key: Box<dyn Any>, value: Box<dyn Any>) -> Result<(), MapError> {
        let key = downcast_box::<K>(key)?;
        let value = downcast_box::<V>(value)?;
        self.insert(key, value)
    }

    fn set_dyn(&mut self, key: Box<dyn Any>, value: Box<dyn Any>) -> Result<(), MapError> {
        let key = downcast_box::<K>(key)?;
        let value = downcast_box::<V>(value)?;
        self.set(key, value);
        Ok(())
    }

    fn remove_dyn(&mut self, key: &dyn Any) -> Result<bool, MapError> {
        Ok(self.remove(downcast_ref::<K>(key)?))
    }

    fn clear_dyn(&mut self) {
        self.clear();
    }

    fn keys_dyn(&self) -> Box<dyn DynCollection + '_> {
        Box::new(self.keys())
    }

    fn values_dyn(&self) -> Box<dyn DynCollection + '_> {
        Box::new(self.values())
    }

    fn entries_dyn(&self) -> Box<dyn Iterator<Item = (&dyn Any, &dyn Any)> + '_> {
        Box::new(
            self.iter()
                .map(|(key, value)| (key as &dyn Any, value as &dyn Any)),
        )
    }
}
