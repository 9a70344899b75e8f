use crate::{
    bit_reader::BitReader, bit_writer::BitWrite, error::SerdeErr, integer::SerdeIntegerConversion,
    serde::Serde, UnsignedVariableInteger,
};

impl Serde for String {
    fn ser(&self, writer: &mut dyn BitWrite) {
        let length = UnsignedVariableInteger::<7>::new(self.len() as u64);
        length.ser(writer);
        for byte in self.as_bytes() {
            writer.write_byte(*byte);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let length = usize::from_serde(UnsignedVariableInteger::<7>::de(reader)?)?;
        if length > reader.bytes_remaining() {
            return Err(SerdeErr::UnexpectedEnd);
        }
        let mut bytes: Vec<u8> = Vec::with_capacity(length);
        for _ in 0..length {
            bytes.push(reader.read_byte()?);
        }

        String::from_utf8(bytes).map_err(|_| SerdeErr::InvalidUtf8)
    }
}

// Tests

#[cfg(test)]
mod tests {
    use crate::{bit_reader::BitReader, bit_writer::BitWriter, serde::Serde};

    #[test]
    fn read_write() {
        // Write
        let mut writer = BitWriter::new();

        let in_1 = "Hello world!".to_string();
        let in_2 = "x".repeat(600);
        let in_3 = String::new();

        in_1.ser(&mut writer);
        in_2.ser(&mut writer);
        in_3.ser(&mut writer);

        let buffer = writer.to_bytes();

        // Read
        let mut reader = BitReader::new(&buffer);

        let out_1: String = Serde::de(&mut reader).unwrap();
        let out_2: String = Serde::de(&mut reader).unwrap();
        let out_3: String = Serde::de(&mut reader).unwrap();

        assert_eq!(in_1, out_1);
        assert_eq!(in_2, out_2);
        assert_eq!(in_3, out_3);
    }
}
