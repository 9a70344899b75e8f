use crate::{
    bit_reader::BitReader,
    bit_writer::{BitCounter, BitWrite},
    error::SerdeErr,
};

/// A trait for objects that can be serialized to a bitstream.
pub trait Serde: Sized {
    /// Serialize Self to a BitWrite
    fn ser(&self, writer: &mut dyn BitWrite);

    /// Parse Self from a BitReader
    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr>;

    /// Return length of value in bits
    fn bit_length(&self) -> u32 {
        let mut counter = BitCounter::new();
        self.ser(&mut counter);
        counter.bits_needed()
    }
}
