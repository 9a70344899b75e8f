use indexed_map_serde::{
    BitReader, BitWriter, Serde, SerdeIntegerConversion, SignedInteger, UnsignedInteger,
    UnsignedVariableInteger,
};

#[test]
fn read_write_unsigned() {
    // Write
    let mut writer = BitWriter::new();

    let in_1 = UnsignedInteger::<7>::new(123);
    let in_2 = UnsignedInteger::<20>::new(535221);
    let in_3 = UnsignedInteger::<2>::new(3);

    in_1.ser(&mut writer);
    in_2.ser(&mut writer);
    in_3.ser(&mut writer);

    let buffer = writer.to_bytes();

    // Read
    let mut reader = BitReader::new(&buffer);

    assert_eq!(in_1, UnsignedInteger::<7>::de(&mut reader).unwrap());
    assert_eq!(in_2, UnsignedInteger::<20>::de(&mut reader).unwrap());
    assert_eq!(in_3, UnsignedInteger::<2>::de(&mut reader).unwrap());
}

#[test]
fn read_write_signed() {
    // Write
    let mut writer = BitWriter::new();

    let in_1 = SignedInteger::<10>::new(-668);
    let in_2 = SignedInteger::<20>::new(53);
    let in_3 = SignedInteger::<2>::new(-3);

    in_1.ser(&mut writer);
    in_2.ser(&mut writer);
    in_3.ser(&mut writer);

    let buffer = writer.to_bytes();

    // Read
    let mut reader = BitReader::new(&buffer);

    assert_eq!(in_1, SignedInteger::<10>::de(&mut reader).unwrap());
    assert_eq!(in_2, SignedInteger::<20>::de(&mut reader).unwrap());
    assert_eq!(in_3, SignedInteger::<2>::de(&mut reader).unwrap());
}

#[test]
fn read_write_variable_unsigned() {
    // Write
    let mut writer = BitWriter::new();

    let in_1 = UnsignedVariableInteger::<3>::new(23);
    let in_2 = UnsignedVariableInteger::<5>::new(153);
    let in_3 = UnsignedVariableInteger::<2>::new(3);

    in_1.ser(&mut writer);
    in_2.ser(&mut writer);
    in_3.ser(&mut writer);

    let buffer = writer.to_bytes();

    // Read
    let mut reader = BitReader::new(&buffer);

    assert_eq!(in_1, UnsignedVariableInteger::<3>::de(&mut reader).unwrap());
    assert_eq!(in_2, UnsignedVariableInteger::<5>::de(&mut reader).unwrap());
    assert_eq!(in_3, UnsignedVariableInteger::<2>::de(&mut reader).unwrap());
}

#[test]
fn conversion_checks_range() {
    let big = UnsignedVariableInteger::<5>::new(300u16);

    assert_eq!(u16::from_serde(big), Ok(300));
    assert!(u8::from_serde(big).is_err());
}
