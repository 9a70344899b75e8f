use indexed_map::{serde::Serde, IndexedMap, MapError};

/// Where a prefab may spawn and how often, as stored in a scene file.
#[derive(Debug, PartialEq, Serde)]
pub struct SpawnTable {
    pub prefab: String,
    pub weights: IndexedMap<String, f32>,
    pub labels: IndexedMap<u16, String>,
}

impl SpawnTable {
    pub fn sample() -> Result<Self, MapError> {
        Ok(Self {
            prefab: "goblin".to_string(),
            weights: IndexedMap::from_pairs([
                ("forest".to_string(), 0.6),
                ("cave".to_string(), 0.3),
                ("ruins".to_string(), 0.1),
            ])?,
            labels: IndexedMap::from_pairs([(1, "hostile".to_string()), (2, "small".to_string())])?,
        })
    }
}
