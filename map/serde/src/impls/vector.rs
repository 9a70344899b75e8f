use crate::{
    bit_reader::BitReader, bit_writer::BitWrite, error::SerdeErr, integer::SerdeIntegerConversion,
    serde::Serde, UnsignedVariableInteger,
};

impl<T: Serde> Serde for Vec<T> {
    fn ser(&self, writer: &mut dyn BitWrite) {
        let length = UnsignedVariableInteger::<5>::new(self.len() as u64);
        length.ser(writer);
        for item in self {
            item.ser(writer);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let length = usize::from_serde(UnsignedVariableInteger::<5>::de(reader)?)?;
        // a corrupt length must not turn into a huge allocation up front
        let mut output: Vec<T> = Vec::with_capacity(length.min(reader.bytes_remaining() * 8));
        for _ in 0..length {
            output.push(T::de(reader)?)
        }
        Ok(output)
    }

    fn bit_length(&self) -> u32 {
        let length = UnsignedVariableInteger::<5>::new(self.len() as u64);
        self.iter()
            .fold(length.bit_length(), |output, item| output + item.bit_length())
    }
}

// Tests
