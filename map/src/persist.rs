use std::hash::Hash;

use log::warn;

use crate::{
    map::IndexedMap,
    serde::{BitReader, BitWrite, Serde, SerdeErr, UnsignedVariableInteger},
};

// Each sequence is written exactly as a `Vec` would be, keys first.
fn ser_sequence<T: Serde>(items: &[T], writer: &mut dyn BitWrite) {
    UnsignedVariableInteger::<5>::new(items.len() as u64).ser(writer);
    for item in items {
        item.ser(writer);
    }
}

impl<K: Serde + Eq + Hash + Clone, V: Serde> Serde for IndexedMap<K, V> {
    fn ser(&self, writer: &mut dyn BitWrite) {
        ser_sequence(self.raw_keys(), writer);
        ser_sequence(self.raw_values(), writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let keys = Vec::<K>::de(reader)?;
        let values = Vec::<V>::de(reader)?;
        let (key_count, value_count) = (keys.len(), values.len());

        let map = IndexedMap::from_raw_parts(keys, values).map_err(|_| {
            warn!(
                "rejecting persisted map with {} keys and {} values",
                key_count, value_count
            );
            SerdeErr::InvalidValue("map key and value sequences differ in length")
        })?;

        map.validate().map_err(|_| {
            warn!("rejecting persisted map whose {} keys repeat a key", key_count);
            SerdeErr::InvalidValue("map key sequence repeats a key")
        })?;
        Ok(map)
    }
}
