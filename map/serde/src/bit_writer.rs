// BitWrite
pub trait BitWrite {
    fn write_bit(&mut self, bit: bool);
    fn write_byte(&mut self, byte: u8);
}

// BitWriter

/// Packs bits least-significant first into a growable byte buffer.
pub struct BitWriter {
    scratch: u8,
    scratch_index: u8,
    buffer: Vec<u8>,
    current_bits: u32,
}

impl BitWriter {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a writer with room for `byte_capacity` bytes before reallocating.
    pub fn with_capacity(byte_capacity: usize) -> Self {
        Self {
            scratch: 0,
            scratch_index: 0,
            buffer: Vec::with_capacity(byte_capacity),
            current_bits: 0,
        }
    }

    /// Number of bits written so far.
    pub fn bits_written(&self) -> u32 {
        self.current_bits
    }

    /// Flushes any partial byte and returns the finished buffer.
    pub fn to_bytes(mut self) -> Box<[u8]> {
        if self.scratch_index > 0 {
            self.buffer.push(self.scratch);
        }
        self.buffer.into_boxed_slice()
    }
}

impl BitWrite for BitWriter {
    fn write_bit(&mut self, bit: bool) {
        if bit {
            self.scratch |= 1 << self.scratch_index;
        }

        self.scratch_index += 1;
        self.current_bits += 1;

        if self.scratch_index >= 8 {
            self.buffer.push(self.scratch);
            self.scratch_index = 0;
            self.scratch = 0;
        }
    }

    fn write_byte(&mut self, byte: u8) {
        let mut temp = byte;
        for _ in 0..8 {
            self.write_bit(temp & 1 != 0);
            temp >>= 1;
        }
    }
}

// BitCounter

/// A sink that only counts the bits written to it.
pub struct BitCounter {
    count: u32,
}

impl BitCounter {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self { count: 0 }
    }

    pub fn bits_needed(&self) -> u32 {
        self.count
    }
}

impl BitWrite for BitCounter {
    fn write_bit(&mut self, _: bool) {
        self.count += 1;
    }

    fn write_byte(&mut self, _: u8) {
        self.count += 8;
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        bit_reader::BitReader,
        bit_writer::{BitCounter, BitWrite, BitWriter},
    };

    #[test]
    fn read_write_3_bits() {
        let mut writer = BitWriter::new();

        writer.write_bit(false);
        writer.write_bit(true);
        writer.write_bit(true);

        let buffer = writer.to_bytes();
        assert_eq!(buffer.len(), 1);

        let mut reader = BitReader::new(&buffer);

        assert!(!reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
    }

    #[test]
    fn read_write_13_bits() {
        let pattern = [
            false, true, false, true, true, false, false, false, true, false, true, true, true,
        ];

        let mut writer = BitWriter::new();
        for bit in pattern {
            writer.write_bit(bit);
        }
        assert_eq!(writer.bits_written(), 13);

        let buffer = writer.to_bytes();
        assert_eq!(buffer.len(), 2);

        let mut reader = BitReader::new(&buffer);
        for bit in pattern {
            assert_eq!(bit, reader.read_bit().unwrap());
        }
    }

    #[test]
    fn read_write_bytes_after_odd_bit() {
        let mut writer = BitWriter::new();

        writer.write_bit(true);
        writer.write_byte(48);
        writer.write_byte(151);
        writer.write_byte(2);

        let buffer = writer.to_bytes();

        let mut reader = BitReader::new(&buffer);

        assert!(reader.read_bit().unwrap());
        assert_eq!(48, reader.read_byte().unwrap());
        assert_eq!(151, reader.read_byte().unwrap());
        assert_eq!(2, reader.read_byte().unwrap());
    }

    #[test]
    fn counter_matches_writer() {
        let mut writer = BitWriter::new();
        let mut counter = BitCounter::new();

        for sink in [&mut writer as &mut dyn BitWrite, &mut counter] {
            sink.write_bit(true);
            sink.write_byte(7);
            sink.write_bit(false);
        }

        assert_eq!(counter.bits_needed(), 10);
        assert_eq!(writer.bits_written(), counter.bits_needed());
    }
}
