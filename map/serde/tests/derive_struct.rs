use indexed_map_serde::{BitReader, BitWriter, Serde, SerdeInternal};

#[derive(Debug, PartialEq, SerdeInternal)]
pub struct SomeStruct {
    pub some_string: String,
    pub some_int: i16,
    pub some_bool: bool,
}

#[derive(Debug, PartialEq, SerdeInternal)]
pub struct SomeTupleStruct(Option<u32>, Vec<String>);

#[derive(Debug, PartialEq, SerdeInternal)]
pub struct SomeUnitStruct;

#[derive(Debug, PartialEq, SerdeInternal)]
pub struct Wrapper<T> {
    pub inner: T,
}

#[test]
fn read_write_struct() {
    // Write
    let mut writer = BitWriter::new();

    let in_1 = SomeStruct {
        some_string: "Hello world!".to_string(),
        some_int: 42,
        some_bool: true,
    };
    let in_2 = SomeStruct {
        some_string: "Goodbye world!".to_string(),
        some_int: -42,
        some_bool: false,
    };

    in_1.ser(&mut writer);
    in_2.ser(&mut writer);

    let buffer = writer.to_bytes();

    // Read
    let mut reader = BitReader::new(&buffer);

    let out_1 = SomeStruct::de(&mut reader).unwrap();
    let out_2 = SomeStruct::de(&mut reader).unwrap();

    assert_eq!(in_1, out_1);
    assert_eq!(in_2, out_2);
}

#[test]
fn read_write_tuple_and_unit_struct() {
    // Write
    let mut writer = BitWriter::new();

    let in_1 = SomeTupleStruct(Some(7), vec!["a".to_string(), "bc".to_string()]);
    let in_2 = SomeUnitStruct;

    in_1.ser(&mut writer);
    in_2.ser(&mut writer);

    assert_eq!(in_2.bit_length(), 0);

    let buffer = writer.to_bytes();

    // Read
    let mut reader = BitReader::new(&buffer);

    assert_eq!(in_1, SomeTupleStruct::de(&mut reader).unwrap());
    assert_eq!(in_2, SomeUnitStruct::de(&mut reader).unwrap());
}

#[test]
fn read_write_generic_struct() {
    // Write
    let mut writer = BitWriter::new();

    let in_1 = Wrapper { inner: 'q' };
    in_1.ser(&mut writer);

    let buffer = writer.to_bytes();

    // Read
    let mut reader = BitReader::new(&buffer);

    assert_eq!(in_1, Wrapper::<char>::de(&mut reader).unwrap());
}
