#[macro_use]
extern crate log;

use log::LevelFilter;
use simple_logger::SimpleLogger;

use indexed_map::{
    serde::{BitReader, BitWriter, Serde, SerdeErr},
    DynMap, IndexedMap, InspectorConfig, InspectorLayout, MapError,
};

mod scene;
use scene::SpawnTable;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .expect("A logger was already initialized");

    let mut table = SpawnTable::sample()?;
    table.weights.set("swamp".to_string(), 0.1);
    table.weights.remove("cave");
    info!("authored table: {:?}", table);

    let restored = round_trip(&table)?;
    info!(
        "restored {} weights, index built: {}",
        restored.weights.len(),
        restored.weights.index_is_built()
    );
    assert_eq!(table, restored);

    let layout = InspectorLayout::new(InspectorConfig::default());
    info!(
        "inspector height for {} rows: {}",
        restored.weights.len(),
        layout.height(restored.weights.len())
    );
    for row in layout.rows(&restored.weights) {
        info!("  row {} at y={}: {} => {}", row.slot, row.y, row.key, row.value);
    }

    if let Err(err) = edit_during_pass(restored.weights.clone()) {
        warn!("{}", err);
    }

    let dyn_map: &dyn DynMap = &restored.labels;
    info!(
        "labels map is {} -> {} with {} entries",
        dyn_map.key_type_name(),
        dyn_map.value_type_name(),
        dyn_map.len_dyn()
    );

    Ok(())
}

fn round_trip(table: &SpawnTable) -> Result<SpawnTable, SerdeErr> {
    let mut writer = BitWriter::new();
    table.ser(&mut writer);
    let bytes = writer.to_bytes();
    info!("persisted spawn table in {} bytes", bytes.len());

    SpawnTable::de(&mut BitReader::new(&bytes))
}

fn edit_during_pass(mut weights: IndexedMap<String, f32>) -> Result<(), MapError> {
    let mut cursor = weights.cursor();
    if let Some((biome, weight)) = cursor.next(&weights)? {
        info!("first biome {} has weight {}", biome, weight);
    }
    weights.set("desert".to_string(), 0.5);
    cursor.next(&weights)?;
    Ok(())
}
