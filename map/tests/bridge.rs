use std::any::type_name;

use indexed_map::{DynCollection, DynMap, IndexedMap, MapError};

fn scene_tags() -> IndexedMap<u32, String> {
    IndexedMap::from_pairs([(1, "player".to_string()), (2, "enemy".to_string())]).unwrap()
}

#[test]
fn dynamic_lookup_delegates_to_typed_map() {
    let map = scene_tags();
    let dyn_map: &dyn DynMap = &map;

    assert_eq!(dyn_map.len_dyn(), 2);
    assert_eq!(dyn_map.contains_key_dyn(&1_u32), Ok(true));
    assert_eq!(dyn_map.contains_key_dyn(&7_u32), Ok(false));

    let value = dyn_map.get_dyn(&2_u32).unwrap();
    assert_eq!(value.downcast_ref::<String>().unwrap(), "enemy");

    assert_eq!(dyn_map.get_dyn(&9_u32).err(), Some(MapError::KeyNotFound));
}

#[test]
fn wrong_key_type_is_a_type_mismatch() {
    let mut map = scene_tags();
    let dyn_map: &mut dyn DynMap = &mut map;

    assert_eq!(
        dyn_map.contains_key_dyn(&1_i64),
        Err(MapError::TypeMismatch {
            expected: type_name::<u32>()
        })
    );
    assert!(matches!(
        dyn_map.insert_dyn(Box::new(3_u32), Box::new(3_u8)),
        Err(MapError::TypeMismatch { .. })
    ));
    assert!(matches!(
        dyn_map.remove_dyn(&"player"),
        Err(MapError::TypeMismatch { .. })
    ));
    assert_eq!(dyn_map.len_dyn(), 2);
}

#[test]
fn dynamic_mutation_goes_through_core_rules() {
    let mut map = scene_tags();
    {
        let dyn_map: &mut dyn DynMap = &mut map;

        dyn_map
            .insert_dyn(Box::new(3_u32), Box::new("pickup".to_string()))
            .unwrap();
        assert_eq!(
            dyn_map.insert_dyn(Box::new(3_u32), Box::new("again".to_string())),
            Err(MapError::DuplicateKey)
        );
        dyn_map
            .set_dyn(Box::new(1_u32), Box::new("hero".to_string()))
            .unwrap();
        assert_eq!(dyn_map.remove_dyn(&2_u32), Ok(true));
    }

    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&1).map(String::as_str), Ok("hero"));
    assert_eq!(map.get(&3).map(String::as_str), Ok("pickup"));

    DynMap::clear_dyn(&mut map);
    assert!(map.is_empty());
}

#[test]
fn dynamic_views_are_read_only() {
    let map = scene_tags();
    let mut keys = map.keys_dyn();

    assert!(keys.is_read_only());
    assert_eq!(keys.len_dyn(), 2);
    assert_eq!(keys.contains_dyn(&2_u32), Ok(true));
    assert!(matches!(
        keys.contains_dyn(&"2"),
        Err(MapError::TypeMismatch { .. })
    ));

    assert!(matches!(
        keys.push_dyn(Box::new(5_u32)),
        Err(MapError::Unsupported(_))
    ));
    assert!(matches!(
        keys.remove_dyn(&1_u32),
        Err(MapError::Unsupported(_))
    ));
    assert!(matches!(keys.clear_dyn(), Err(MapError::Unsupported(_))));

    let collected: Vec<u32> = keys
        .iter_dyn()
        .map(|key| *key.downcast_ref::<u32>().unwrap())
        .collect();
    assert_eq!(collected, vec![1, 2]);
    assert_eq!(map.len(), 2);
}

#[test]
fn entries_pair_keys_with_values() {
    let map = scene_tags();

    let entries: Vec<(u32, String)> = map
        .entries_dyn()
        .map(|(key, value)| {
            (
                *key.downcast_ref::<u32>().unwrap(),
                value.downcast_ref::<String>().unwrap().clone(),
            )
        })
        .collect();

    assert_eq!(
        entries,
        vec![(1, "player".to_string()), (2, "enemy".to_string())]
    );
    assert_eq!(map.key_type_name(), type_name::<u32>());
    assert_eq!(map.value_type_name(), type_name::<String>());
}
