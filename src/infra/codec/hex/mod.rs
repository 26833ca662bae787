//! Low-level components dedicated to the ASCII hex nibbles of the SLCAN
//! grammar. Decoding is case-insensitive, encoding always emits uppercase.
use crate::error::{HexReaderError, HexWriterError};

/// Uppercase digit for the low nibble of `value`.
#[inline]
pub const fn nibble_to_ascii(value: u8) -> u8 {
    let nibble = value & 0x0F;
    if nibble < 10 {
        b'0' + nibble
    } else {
        b'A' + (nibble - 10)
    }
}

/// Value of a hex digit (`0-9`, `A-F`, `a-f`), `None` for anything else.
#[inline]
pub const fn ascii_to_nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}

//==================================================================================HEXREADER

/// Cursor over a received ASCII line. Every read reports the position where
/// the input stopped matching the grammar, so callers can tell a short read
/// from a bad digit at any field boundary.
pub struct HexReader<'a> {
    /// Borrowed source line.
    buffer: &'a [u8],
    /// Index of the next byte to read.
    cursor: usize,
}

impl<'a> HexReader<'a> {
    /// Create a reader positioned at the start of the provided buffer.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Index of the next byte to read.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Bytes left after the cursor.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Ensure `count` bytes are available from the cursor.
    fn require(&self, count: usize) -> Result<(), HexReaderError> {
        if count > self.remaining() {
            return Err(HexReaderError::OutOfBounds {
                position: self.cursor,
                asked: count,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    /// Read one raw byte without interpreting it.
    pub fn read_byte(&mut self) -> Result<u8, HexReaderError> {
        self.require(1)?;
        let byte = self.buffer[self.cursor];
        self.cursor += 1;
        Ok(byte)
    }

    /// Read a single hex digit.
    pub fn read_nibble(&mut self) -> Result<u8, HexReaderError> {
        self.require(1)?;
        let byte = self.buffer[self.cursor];
        let nibble = ascii_to_nibble(byte).ok_or(HexReaderError::InvalidDigit {
            position: self.cursor,
            byte,
        })?;
        self.cursor += 1;
        Ok(nibble)
    }

    /// Read two hex digits, high nibble first.
    pub fn read_u8(&mut self) -> Result<u8, HexReaderError> {
        let high = self.read_nibble()?;
        let low = self.read_nibble()?;
        Ok((high << 4) | low)
    }

    /// Read `nibbles` hex digits (1 to 8), most significant first.
    pub fn read_u32(&mut self, nibbles: u8) -> Result<u32, HexReaderError> {
        debug_assert!((1..=8).contains(&nibbles));
        let mut value: u32 = 0;
        for _ in 0..nibbles.min(8) {
            value = (value << 4) | self.read_nibble()? as u32;
        }
        Ok(value)
    }
}

//==================================================================================HEXWRITER

/// Cursor appending ASCII bytes into a caller-owned `&mut [u8]`.
///
/// This is the response cursor handed to command handlers: the buffer stays
/// owned by the caller and `len()` tells how many bytes are valid.
pub struct HexWriter<'a> {
    /// Target buffer.
    buffer: &'a mut [u8],
    /// Number of bytes written.
    cursor: usize,
}

impl<'a> HexWriter<'a> {
    /// Create a writer positioned at the start of the buffer.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// Checks whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Free space left in the buffer.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Drop everything written after `len` bytes.
    pub fn truncate(&mut self, len: usize) {
        self.cursor = self.cursor.min(len);
    }

    /// Immutable view over the written bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer[..self.cursor]
    }

    fn require(&self, count: usize) -> Result<(), HexWriterError> {
        if count > self.remaining() {
            return Err(HexWriterError::OutOfBounds {
                asked: count,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    /// Append one raw byte.
    pub fn push_byte(&mut self, byte: u8) -> Result<(), HexWriterError> {
        self.require(1)?;
        self.buffer[self.cursor] = byte;
        self.cursor += 1;
        Ok(())
    }

    /// Append raw bytes, all or nothing.
    pub fn push_slice(&mut self, bytes: &[u8]) -> Result<(), HexWriterError> {
        self.require(bytes.len())?;
        self.buffer[self.cursor..self.cursor + bytes.len()].copy_from_slice(bytes);
        self.cursor += bytes.len();
        Ok(())
    }

    /// Append one uppercase hex digit.
    pub fn push_nibble(&mut self, value: u8) -> Result<(), HexWriterError> {
        self.push_byte(nibble_to_ascii(value))
    }

    /// Append two hex digits, high nibble first.
    pub fn push_u8(&mut self, value: u8) -> Result<(), HexWriterError> {
        self.require(2)?;
        self.push_nibble(value >> 4)?;
        self.push_nibble(value)
    }

    /// Append the low `nibbles` hex digits of `value`, most significant first.
    pub fn push_u32(&mut self, value: u32, nibbles: u8) -> Result<(), HexWriterError> {
        let nibbles = nibbles.min(8);
        self.require(nibbles as usize)?;
        for shift in (0..nibbles).rev() {
            self.push_nibble((value >> (shift * 4)) as u8)?;
        }
        Ok(())
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
