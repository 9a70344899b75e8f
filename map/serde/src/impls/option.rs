use crate::{bit_reader::BitReader, bit_writer::BitWrite, error::SerdeErr, serde::Serde};

// One presence bit, then the payload when present.
impl<T: Serde> Serde for Option<T> {
    fn ser(&self, writer: &mut dyn BitWrite) {
        writer.write_bit(self.is_some());
        if let Some(value) = self {
            value.ser(writer);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        match reader.read_bit()? {
            true => T::de(reader).map(Some),
            false => Ok(None),
        }
    }

    fn bit_length(&self) -> u32 {
        1 + self.as_ref().map_or(0, Serde::bit_length)
    }
}
