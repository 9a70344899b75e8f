use crate::SerdeErr;

// BitReader

/// Reads bits back out of a buffer produced by [`BitWriter`](crate::BitWriter).
pub struct BitReader<'b> {
    scratch: u8,
    scratch_index: u8,
    buffer_index: usize,
    buffer: &'b [u8],
}

impl<'b> BitReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            scratch: 0,
            scratch_index: 0,
            buffer_index: 0,
            buffer,
        }
    }

    /// Number of whole bytes not yet touched by the reader.
    pub fn bytes_remaining(&self) -> usize {
        self.buffer.len() - self.buffer_index
    }

    pub fn read_bit(&mut self) -> Result<bool, SerdeErr> {
        if self.scratch_index == 0 {
            if self.buffer_index == self.buffer.len() {
                return Err(SerdeErr::UnexpectedEnd);
            }

            self.scratch = self.buffer[self.buffer_index];

            self.buffer_index += 1;
            self.scratch_index += 8;
        }

        let value = self.scratch & 1;

        self.scratch >>= 1;

        self.scratch_index -= 1;

        Ok(value != 0)
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        let mut output = 0;
        for offset in 0..8 {
            if self.read_bit()? {
                output |= 1 << offset;
            }
        }
        Ok(output)
    }
}
