use crate::error::BufferError;

/// Fixed-capacity byte buffer with independent read and write cursors.
///
/// All multi-byte values use network byte order. Reads consume at the read
/// cursor, writes overwrite at the write cursor; the two never affect each
/// other. Storage never grows; an access that does not fit returns
/// [`BufferError::OutOfBounds`].
#[derive(Debug)]
pub struct ByteBuffer {
    storage: Box<[u8]>,
    read_cursor: usize,
    write_cursor: usize,
}

macro_rules! number_rw {
    ($type:ty, $read:ident, $write:ident) => {
        pub fn $read(&mut self) -> Result<$type, BufferError> {
            Ok(<$type>::from_be_bytes(self.read_exact()?))
        }
        pub fn $write(&mut self, value: $type) -> Result<(), BufferError> {
            self.write_all(&value.to_be_bytes())
        }
    };
}

impl ByteBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            storage: vec![0u8; capacity].into_boxed_slice(),
            read_cursor: 0,
            write_cursor: 0,
        }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            storage: bytes.into_boxed_slice(),
            read_cursor: 0,
            write_cursor: 0,
        }
    }

    fn span(&self, offset: usize, needed: usize) -> Result<usize, BufferError> {
        match offset.checked_add(needed) {
            Some(end) if end <= self.storage.len() => Ok(end),
            _ => Err(BufferError::OutOfBounds {
                offset,
                needed,
                capacity: self.storage.len(),
            }),
        }
    }

    fn read_exact<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let end = self.span(self.read_cursor, N)?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.storage[self.read_cursor..end]);
        self.read_cursor = end;
        Ok(bytes)
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        let end = self.span(self.write_cursor, bytes.len())?;
        self.storage[self.write_cursor..end].copy_from_slice(bytes);
        self.write_cursor = end;
        Ok(())
    }

    number_rw!(i8, read_i8, write_i8);
    number_rw!(i16, read_i16, write_i16);
    number_rw!(i32, read_i32, write_i32);
    number_rw!(i64, read_i64, write_i64);
    number_rw!(f32, read_f32, write_f32);

    /// Only the exact byte `1` maps to true; every other value, including
    /// `2` and `0xFF`, maps to false.
    pub fn read_bool(&mut self) -> Result<bool, BufferError> {
        Ok(self.read_i8()? == 1)
    }

    pub fn write_bool(&mut self, value: bool) -> Result<(), BufferError> {
        self.write_i8(value as i8)
    }

    /// Reads an unsigned byte stored in the shifted encoding: the wire byte
    /// holds the value minus 128 as a two's-complement signed byte, so 0 is
    /// stored as `0x80` and 255 as `0x7F`. Peers using the conventional
    /// encoding must use [`Self::read_byte`] instead.
    pub fn read_u8(&mut self) -> Result<u8, BufferError> {
        Ok(self.read_byte()?.wrapping_add(128))
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), BufferError> {
        self.write_byte(value.wrapping_sub(128))
    }

    /// Reads one byte with the conventional unsigned encoding, no shift.
    pub fn read_byte(&mut self) -> Result<u8, BufferError> {
        Ok(self.read_exact::<1>()?[0])
    }

    pub fn write_byte(&mut self, value: u8) -> Result<(), BufferError> {
        self.write_all(&[value])
    }

    pub fn read_bytes(&mut self, length: usize) -> Result<Vec<u8>, BufferError> {
        let end = self.span(self.read_cursor, length)?;
        let bytes = self.storage[self.read_cursor..end].to_vec();
        self.read_cursor = end;
        Ok(bytes)
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        self.write_all(bytes)
    }

    /// Reads a 4-byte big-endian signed length prefix, then that many bytes,
    /// one character per byte. The result carries codepoints 0-255 and is not
    /// text in any standard encoding. On any failure the read cursor is left
    /// where it started.
    pub fn read_string(&mut self) -> Result<String, BufferError> {
        let start = self.read_cursor;
        match self.read_prefixed_chars() {
            Ok(value) => Ok(value),
            Err(error) => {
                self.read_cursor = start;
                Err(error)
            }
        }
    }

    fn read_prefixed_chars(&mut self) -> Result<String, BufferError> {
        let prefix = self.read_i32()?;
        let length = usize::try_from(prefix).map_err(|_| BufferError::InvalidLength {
            length: i64::from(prefix),
        })?;
        let bytes = self.read_bytes(length)?;
        Ok(bytes.into_iter().map(char::from).collect())
    }

    /// Writes the character count as a 4-byte big-endian signed prefix, then
    /// each character's codepoint as one byte. Characters above U+00FF do not
    /// fit and fail without touching the storage.
    pub fn write_string(&mut self, value: &str) -> Result<(), BufferError> {
        let count = value.chars().count();
        let prefix = i32::try_from(count).map_err(|_| BufferError::InvalidLength {
            length: count as i64,
        })?;
        let mut encoded = Vec::with_capacity(4 + count);
        encoded.extend_from_slice(&prefix.to_be_bytes());
        for character in value.chars() {
            let codepoint = u32::from(character);
            let byte = u8::try_from(codepoint)
                .map_err(|_| BufferError::UnsupportedCodepoint { codepoint })?;
            encoded.push(byte);
        }
        self.write_all(&encoded)
    }

    pub fn read_cursor(&self) -> usize {
        self.read_cursor
    }

    pub fn write_cursor(&self) -> usize {
        self.write_cursor
    }

    /// Positions are not validated here; one past the end of storage is
    /// reported by the next read.
    pub fn set_read_cursor(&mut self, position: usize) {
        self.read_cursor = position;
    }

    pub fn set_write_cursor(&mut self, position: usize) {
        self.write_cursor = position;
    }

    pub fn skip_read(&mut self, count: isize) -> Result<(), BufferError> {
        self.read_cursor = Self::displaced(self.read_cursor, count)?;
        Ok(())
    }

    pub fn skip_write(&mut self, count: isize) -> Result<(), BufferError> {
        self.write_cursor = Self::displaced(self.write_cursor, count)?;
        Ok(())
    }

    fn displaced(position: usize, count: isize) -> Result<usize, BufferError> {
        position
            .checked_add_signed(count)
            .ok_or(BufferError::CursorOutOfRange { position, count })
    }

    /// The full backing storage, independent of the cursor positions.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn remaining_read(&self) -> usize {
        self.storage.len().saturating_sub(self.read_cursor)
    }

    pub fn remaining_write(&self) -> usize {
        self.storage.len().saturating_sub(self.write_cursor)
    }

    pub fn reset(&mut self) {
        self.read_cursor = 0;
        self.write_cursor = 0;
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}
