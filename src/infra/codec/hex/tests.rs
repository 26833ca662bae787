//! Hex reader/writer edge cases.
use super::*;

#[test]
/// Every nibble value maps to an uppercase digit and back.
fn test_nibble_mapping_is_uppercase() {
    let expected = b"0123456789ABCDEF";
    for value in 0..16u8 {
        let ascii = nibble_to_ascii(value);
        assert_eq!(ascii, expected[value as usize]);
        assert_eq!(ascii_to_nibble(ascii), Some(value));
    }
    // Only the low nibble is encoded.
    assert_eq!(nibble_to_ascii(0xA7), b'7');
}

#[test]
/// Lowercase digits decode, anything outside the hex alphabet does not.
fn test_ascii_to_nibble_case_insensitive() {
    assert_eq!(ascii_to_nibble(b'a'), Some(10));
    assert_eq!(ascii_to_nibble(b'f'), Some(15));
    assert_eq!(ascii_to_nibble(b'g'), None);
    assert_eq!(ascii_to_nibble(b'G'), None);
    assert_eq!(ascii_to_nibble(b'\r'), None);
    assert_eq!(ascii_to_nibble(b' '), None);
}

#[test]
/// Multi-nibble reads accumulate most significant digit first.
fn test_read_u32() {
    let mut reader = HexReader::new(b"1aBcDe");
    assert_eq!(reader.read_u32(6).unwrap(), 0x1A_BCDE);
    assert_eq!(reader.remaining(), 0);
}

#[test]
/// A short read reports where the missing field starts.
fn test_read_out_of_bounds() {
    let mut reader = HexReader::new(b"8A1");
    assert_eq!(reader.read_u8().unwrap(), 0x8A);
    assert_eq!(
        reader.read_u8(),
        Err(HexReaderError::OutOfBounds {
            position: 3,
            asked: 1,
            available: 0
        })
    );
}

#[test]
/// A bad digit reports its own position and leaves the cursor on it.
fn test_read_invalid_digit() {
    let mut reader = HexReader::new(b"1X");
    assert_eq!(reader.read_nibble().unwrap(), 1);
    assert_eq!(
        reader.read_nibble(),
        Err(HexReaderError::InvalidDigit {
            position: 1,
            byte: b'X'
        })
    );
    assert_eq!(reader.position(), 1);
}

#[test]
/// Writes emit uppercase digits and refuse to overflow.
fn test_writer_hex_and_overflow() {
    let mut buffer = [0u8; 5];
    let mut writer = HexWriter::new(&mut buffer);
    writer.push_byte(b'F').unwrap();
    writer.push_u8(0xab).unwrap();
    assert_eq!(writer.as_slice(), b"FAB");

    assert_eq!(
        writer.push_u32(0x1234, 4),
        Err(HexWriterError::OutOfBounds {
            asked: 4,
            available: 2
        })
    );
    // Nothing partial was written.
    assert_eq!(writer.len(), 3);

    writer.truncate(1);
    assert_eq!(writer.as_slice(), b"F");
}

#[test]
/// Fixed-width hex keeps leading zeros.
fn test_push_u32_pads_with_zeros() {
    let mut buffer = [0u8; 8];
    let mut writer = HexWriter::new(&mut buffer);
    writer.push_u32(0x1ABCDE, 8).unwrap();
    assert_eq!(writer.as_slice(), b"001ABCDE");
}
