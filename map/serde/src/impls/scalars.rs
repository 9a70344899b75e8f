use crate::{bit_reader::BitReader, bit_writer::BitWrite, error::SerdeErr, serde::Serde};

// Unit //

impl Serde for () {
    fn ser(&self, _: &mut dyn BitWrite) {}

    fn de(_: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(())
    }

    fn bit_length(&self) -> u32 {
        0
    }
}

// Boolean //

impl Serde for bool {
    fn ser(&self, writer: &mut dyn BitWrite) {
        writer.write_bit(*self);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        reader.read_bit()
    }

    fn bit_length(&self) -> u32 {
        1
    }
}

// Characters //

impl Serde for char {
    fn ser(&self, writer: &mut dyn BitWrite) {
        for byte in (*self as u32).to_le_bytes() {
            writer.write_byte(byte);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let mut bytes = [0_u8; 4];
        for byte in &mut bytes {
            *byte = reader.read_byte()?;
        }
        char::from_u32(u32::from_le_bytes(bytes)).ok_or(SerdeErr::InvalidChar)
    }

    fn bit_length(&self) -> u32 {
        32
    }
}

// Numbers //

macro_rules! impl_serde_for_number {
    ($($t:ty),*) => {
        $(
            impl Serde for $t {
                fn ser(&self, writer: &mut dyn BitWrite) {
                    for byte in self.to_le_bytes() {
                        writer.write_byte(byte);
                    }
                }

                fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
                    let mut bytes = [0_u8; std::mem::size_of::<$t>()];
                    for byte in &mut bytes {
                        *byte = reader.read_byte()?;
                    }
                    Ok(<$t>::from_le_bytes(bytes))
                }

                fn bit_length(&self) -> u32 {
                    (std::mem::size_of::<$t>() * 8) as u32
                }
            }
        )*
    };
}

impl_serde_for_number!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

// usize/isize are written as 64 bits so data moves between platforms

impl Serde for usize {
    fn ser(&self, writer: &mut dyn BitWrite) {
        (*self as u64).ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        usize::try_from(u64::de(reader)?)
            .map_err(|_| SerdeErr::InvalidValue("usize out of range for this platform"))
    }

    fn bit_length(&self) -> u32 {
        64
    }
}

impl Serde for isize {
    fn ser(&self, writer: &mut dyn BitWrite) {
        (*self as i64).ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        isize::try_from(i64::de(reader)?)
            .map_err(|_| SerdeErr::InvalidValue("isize out of range for this platform"))
    }

    fn bit_length(&self) -> u32 {
        64
    }
}

// Tests

#[cfg(test)]
mod tests {
    use crate::{bit_reader::BitReader, bit_writer::BitWriter, serde::Serde, SerdeErr};

    #[test]
    fn read_write_mixed_scalars() {
        // Write
        let mut writer = BitWriter::new();

        true.ser(&mut writer);
        'Ω'.ser(&mut writer);
        (-12_i16).ser(&mut writer);
        40_000_u32.ser(&mut writer);
        1.5_f32.ser(&mut writer);
        (-0.25_f64).ser(&mut writer);
        usize::MAX.ser(&mut writer);

        let buffer = writer.to_bytes();

        // Read
        let mut reader = BitReader::new(&buffer);

        assert!(bool::de(&mut reader).unwrap());
        assert_eq!('Ω', char::de(&mut reader).unwrap());
        assert_eq!(-12, i16::de(&mut reader).unwrap());
        assert_eq!(40_000, u32::de(&mut reader).unwrap());
        assert_eq!(1.5, f32::de(&mut reader).unwrap());
        assert_eq!(-0.25, f64::de(&mut reader).unwrap());
        assert_eq!(usize::MAX, usize::de(&mut reader).unwrap());
    }

    #[test]
    fn invalid_char_is_rejected() {
        let mut writer = BitWriter::new();
        0xD800_u32.ser(&mut writer);
        let buffer = writer.to_bytes();

        let mut reader = BitReader::new(&buffer);
        assert_eq!(char::de(&mut reader), Err(SerdeErr::InvalidChar));
    }
}
