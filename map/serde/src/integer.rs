use crate::{bit_reader::BitReader, bit_writer::BitWrite, error::SerdeErr, serde::Serde};

pub type UnsignedInteger<const BITS: u8> = SerdeInteger<false, false, BITS>;
pub type SignedInteger<const BITS: u8> = SerdeInteger<true, false, BITS>;
pub type UnsignedVariableInteger<const BITS: u8> = SerdeInteger<false, true, BITS>;
pub type SignedVariableInteger<const BITS: u8> = SerdeInteger<true, true, BITS>;

/// An integer written with an explicit bit width.
///
/// Fixed integers always take `BITS` bits (plus a sign bit when signed).
/// Variable integers are written in `BITS`-sized groups, each preceded by a
/// continuation bit, so small values stay small on the wire.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SerdeInteger<const SIGNED: bool, const VARIABLE: bool, const BITS: u8> {
    inner: i128,
}

impl<const SIGNED: bool, const VARIABLE: bool, const BITS: u8>
    SerdeInteger<SIGNED, VARIABLE, BITS>
{
    /// # Panics
    ///
    /// When a negative value is given to an unsigned integer, when `BITS` is
    /// outside `1..=127`, or when a fixed integer cannot hold the value.
    pub fn new<T: Into<i128>>(value: T) -> Self {
        let inner = Into::<i128>::into(value);

        if inner < 0 && !SIGNED {
            panic!("can't encode a negative number with an Unsigned Integer!");
        }

        if BITS == 0 {
            panic!("can't create an integer with 0 bits...");
        }
        if BITS > 127 {
            panic!("can't create an integer with more than 127 bits...");
        }

        if !VARIABLE {
            let max_value: u128 = 1 << BITS;
            if inner.unsigned_abs() >= max_value {
                panic!(
                    "with {} bits, can't encode a number with magnitude {} or more",
                    BITS, max_value
                );
            }
        }

        Self { inner }
    }

    pub fn get(&self) -> i128 {
        self.inner
    }

    fn read_group(reader: &mut BitReader, output: &mut u128, shift: &mut u32) -> Result<(), SerdeErr> {
        for _ in 0..BITS {
            let bit = reader.read_bit()?;
            if bit {
                if *shift >= 128 {
                    return Err(SerdeErr::InvalidValue("integer wider than 128 bits"));
                }
                *output |= 1u128 << *shift;
            }
            *shift += 1;
        }
        Ok(())
    }
}

impl<const SIGNED: bool, const VARIABLE: bool, const BITS: u8> Serde
    for SerdeInteger<SIGNED, VARIABLE, BITS>
{
    fn ser(&self, writer: &mut dyn BitWrite) {
        if SIGNED {
            // 1 if negative, 0 if positive
            writer.write_bit(self.inner < 0);
        }

        let mut value = self.inner.unsigned_abs();

        if VARIABLE {
            loop {
                let proceed = value >= 1u128 << BITS;
                writer.write_bit(proceed);

                for _ in 0..BITS {
                    writer.write_bit(value & 1 != 0);
                    value >>= 1;
                }
                if !proceed {
                    return;
                }
            }
        } else {
            for _ in 0..BITS {
                writer.write_bit(value & 1 != 0);
                value >>= 1;
            }
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let negative = SIGNED && reader.read_bit()?;

        let mut output: u128 = 0;
        let mut shift: u32 = 0;

        if VARIABLE {
            loop {
                let proceed = reader.read_bit()?;
                Self::read_group(reader, &mut output, &mut shift)?;
                if !proceed {
                    break;
                }
            }
        } else {
            Self::read_group(reader, &mut output, &mut shift)?;
        }

        let value = i128::try_from(output)
            .map_err(|_| SerdeErr::InvalidValue("integer does not fit in 127 bits"))?;
        Ok(Self {
            inner: if negative { -value } else { value },
        })
    }
}

/// Conversion between a [`SerdeInteger`] and the primitive it carries.
pub trait SerdeIntegerConversion<const SIGNED: bool, const VARIABLE: bool, const BITS: u8>:
    Sized
{
    fn from_serde(integer: SerdeInteger<SIGNED, VARIABLE, BITS>) -> Result<Self, SerdeErr>;
}

macro_rules! impl_integer_conversion {
    ($($t:ty),*) => {
        $(
            impl<const SIGNED: bool, const VARIABLE: bool, const BITS: u8>
                SerdeIntegerConversion<SIGNED, VARIABLE, BITS> for $t
            {
                fn from_serde(integer: SerdeInteger<SIGNED, VARIABLE, BITS>) -> Result<Self, SerdeErr> {
                    <$t>::try_from(integer.get())
                        .map_err(|_| SerdeErr::InvalidValue(concat!("integer out of range for ", stringify!($t))))
                }
            }
        )*
    };
}

impl_integer_conversion!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
