//! # Indexed Map
//! A key/value map stored as two parallel sequences, for data that has to be
//! persisted by serializers which only understand ordered lists.
//!
//! [`IndexedMap`] keeps a key → position index beside its `keys` and `values`
//! sequences. The index is never persisted; it is built on first use, so a map
//! restored straight from its sequences costs nothing until it is queried.
//! Lookups, inserts and removals are O(1) on average, removal moving the last
//! pair into the vacated slot.
//!
//! Mutation while a pass is in progress is caught by [`Cursor`], which checks
//! the map's version counter at every step.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use indexed_map_serde as serde;

mod bridge;
mod error;
mod inspector;
mod iter;
mod map;
mod persist;
mod view;

pub use bridge::{DynCollection, DynMap};
pub use error::MapError;
pub use inspector::{InspectorConfig, InspectorLayout, InspectorRow};
pub use iter::{Cursor, Iter};
pub use map::IndexedMap;
pub use view::ReadOnlyView;
