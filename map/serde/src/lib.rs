//! # Indexed Map Serde
//! The bit-level codec `indexed-map` persists its key and value sequences
//! with.
//!
//! Values implement [`Serde`], writing themselves into any [`BitWrite`]
//! sink and reading back out of a [`BitReader`]. Aggregates get the impl
//! from `#[derive(Serde)]`.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use indexed_map_serde_derive::{Serde, SerdeInternal};

mod bit_reader;
mod bit_writer;
mod error;
mod impls;
mod integer;
mod serde;

pub use bit_reader::BitReader;
pub use bit_writer::{BitCounter, BitWrite, BitWriter};
pub use error::SerdeErr;
pub use integer::{
    SerdeInteger, SerdeIntegerConversion, SignedInteger, SignedVariableInteger, UnsignedInteger,
    UnsignedVariableInteger,
};
pub use serde::Serde;
