mod enumeration;
mod structure;

pub use enumeration::derive_serde_enum;
pub use structure::derive_serde_struct;
