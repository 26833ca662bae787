//! Translation between [`CanFrame`] and its SLCAN line.
//!
//! ```text
//! t iii L dd..dd \r     standard data frame
//! T iiiiiiii L dd..dd \r  extended data frame
//! r iii L \r            standard remote frame
//! R iiiiiiii L \r       extended remote frame
//! ```
//!
//! The encoder always emits uppercase digits and a trailing CR. The decoder
//! accepts either case and stops after the last field it needs: terminator,
//! timestamp or anything else that follows is left to the caller. A CR met
//! before the last field ends the line early.
use super::hex::{HexReader, HexWriter};
use crate::core::{CR, MAX_ENCODED_FRAME_LEN};
use crate::error::{DecodeError, FrameBuildError, HexWriterError};
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::can_id::CanId;

//==================================================================================FRAME_KIND
/// Leading byte of a frame line for the `(extended, remote)` layout.
pub const fn frame_kind_byte(extended: bool, remote: bool) -> u8 {
    match (extended, remote) {
        (false, false) => b't',
        (true, false) => b'T',
        (false, true) => b'r',
        (true, true) => b'R',
    }
}

/// `(extended, remote)` layout selected by a leading byte.
pub const fn frame_layout(byte: u8) -> Option<(bool, bool)> {
    match byte {
        b't' => Some((false, false)),
        b'T' => Some((true, false)),
        b'r' => Some((false, true)),
        b'R' => Some((true, true)),
        _ => None,
    }
}

//==================================================================================ENCODED_FRAME
/// One encoded frame line, CR included, held on the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodedFrame {
    bytes: [u8; MAX_ENCODED_FRAME_LEN],
    len: usize,
}

impl EncodedFrame {
    /// Valid bytes of the line.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Length of the line, CR included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the line holds no byte.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for EncodedFrame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

//==================================================================================ENCODE
/// Number of bytes [`encode`] produces for `frame`.
pub fn encoded_len(frame: &CanFrame) -> usize {
    let payload = if frame.is_remote() {
        0
    } else {
        frame.dlc() as usize * 2
    };
    1 + frame.id().nibbles() as usize + 1 + payload + 1
}

/// Encode a frame into its CR-terminated SLCAN line.
pub fn encode(frame: &CanFrame) -> EncodedFrame {
    let mut bytes = [0u8; MAX_ENCODED_FRAME_LEN];
    let mut writer = HexWriter::new(&mut bytes);
    // Never fails: MAX_ENCODED_FRAME_LEN covers the longest extended data frame.
    let len = match encode_into(frame, &mut writer) {
        Ok(()) => writer.len(),
        Err(_) => 0,
    };
    EncodedFrame { bytes, len }
}

/// Append the SLCAN line of `frame` to a caller cursor.
///
/// Fails without writing anything when the cursor lacks room for the whole
/// line.
pub fn encode_into(frame: &CanFrame, writer: &mut HexWriter<'_>) -> Result<(), HexWriterError> {
    let needed = encoded_len(frame);
    if needed > writer.remaining() {
        return Err(HexWriterError::OutOfBounds {
            asked: needed,
            available: writer.remaining(),
        });
    }
    let id = frame.id();
    writer.push_byte(frame_kind_byte(id.is_extended(), frame.is_remote()))?;
    writer.push_u32(id.raw(), id.nibbles())?;
    writer.push_nibble(frame.dlc())?;
    for byte in frame.data() {
        writer.push_u8(*byte)?;
    }
    writer.push_byte(CR)
}

//==================================================================================DECODE
/// Decode the leading frame of an SLCAN line.
///
/// Every field boundary is checked: a line that ends inside the identifier,
/// the DLC or the payload is [`DecodeError::Truncated`], never a partial frame.
pub fn decode(line: &[u8]) -> Result<CanFrame, DecodeError> {
    let line = match line.iter().position(|byte| *byte == CR) {
        Some(end) => &line[..end],
        None => line,
    };
    let mut reader = HexReader::new(line);
    let kind = reader.read_byte()?;
    let (extended, remote) =
        frame_layout(kind).ok_or(DecodeError::UnknownFrameKind { byte: kind })?;

    let raw_id = reader.read_u32(if extended { 8 } else { 3 })?;
    let id = CanId::new(raw_id, extended)?;
    let dlc = reader.read_nibble()?;

    if remote {
        return Ok(CanFrame::remote_frame(id, dlc)?);
    }

    // Reject a bad DLC before reading the payload it announces.
    let mut data = [0u8; 8];
    let payload = data
        .get_mut(..dlc as usize)
        .ok_or(FrameBuildError::DlcOutOfRange { dlc })?;
    for byte in payload.iter_mut() {
        *byte = reader.read_u8()?;
    }
    Ok(CanFrame::data_frame(id, &data[..dlc as usize])?)
}
