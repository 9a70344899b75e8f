use crate::map::IndexedMap;

#[derive(Clone, Copy, Debug)]
pub struct InspectorConfig {
    /// Height of a single key/value row, and of the header row.
    pub row_height: f32,
    /// Collapsed inspectors show only the header row.
    pub expanded: bool,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            row_height: 18.0,
            expanded: true,
        }
    }
}

/// One key/value pair as an inspector draws it, read from the same slot of
/// both backing sequences.
#[derive(Debug)]
pub struct InspectorRow<'m, K, V> {
    pub slot: usize,
    pub key: &'m K,
    pub value: &'m V,
    /// Offset from the top of the inspector, below the header row.
    pub y: f32,
}

/// Lays out an [`IndexedMap`] as a header row followed by one row per pair.
pub struct InspectorLayout {
    config: InspectorConfig,
}

impl InspectorLayout {
    pub fn new(config: InspectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    pub fn height(&self, len: usize) -> f32 {
        if self.config.expanded {
            self.config.row_height * (1 + len) as f32
        } else {
            self.config.row_height
        }
    }

    pub fn rows<'m, K, V>(
        &self,
        map: &'m IndexedMap<K, V>,
    ) -> impl Iterator<Item = InspectorRow<'m, K, V>> + 'm {
        let row_height = self.config.row_height;
        let visible = if self.config.expanded { map.len() } else { 0 };
        map.keys()
            .into_iter()
            .zip(map.values())
            .take(visible)
            .enumerate()
            .map(move |(slot, (key, value))| InspectorRow {
                slot,
                key,
                value,
                y: row_height * (1 + slot) as f32,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{InspectorConfig, InspectorLayout};
    use crate::IndexedMap;

    #[test]
    fn height_grows_with_rows_when_expanded() {
        let layout = InspectorLayout::new(InspectorConfig {
            row_height: 10.0,
            expanded: true,
        });
        assert_eq!(layout.height(0), 10.0);
        assert_eq!(layout.height(3), 40.0);
    }

    #[test]
    fn collapsed_shows_header_only() {
        let map = IndexedMap::from_pairs([(1, 'a'), (2, 'b')]).unwrap();
        let layout = InspectorLayout::new(InspectorConfig {
            expanded: false,
            ..Default::default()
        });

        assert_eq!(layout.height(map.len()), 18.0);
        assert_eq!(layout.rows(&map).count(), 0);
    }

    #[test]
    fn rows_pair_keys_with_values() {
        let map = IndexedMap::from_pairs([(7, "seven"), (8, "eight")]).unwrap();
        let layout = InspectorLayout::new(InspectorConfig::default());

        let rows: Vec<_> = layout
            .rows(&map)
            .map(|row| (row.slot, *row.key, *row.value, row.y))
            .collect();

        assert_eq!(rows, vec![(0, 7, "seven", 18.0), (1, 8, "eight", 36.0)]);
    }
}
