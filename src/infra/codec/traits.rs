//! Public traits exposed by the codec engine. They let upper layers (and
//! firmware code) treat the SLCAN line as just another representation of a
//! frame type.
use super::engine::{self, EncodedFrame};
use super::hex::HexWriter;
use crate::error::{DecodeError, HexWriterError};
use crate::protocol::transport::can_frame::CanFrame;

//==================================================================================TO_SLCAN
/// Types with an SLCAN line representation.
pub trait ToSlcan {
    /// Encode into a stack-held line.
    fn to_slcan(&self) -> EncodedFrame;

    /// Append the line to a caller cursor.
    fn write_slcan(&self, writer: &mut HexWriter<'_>) -> Result<(), HexWriterError>;
}

//==================================================================================FROM_SLCAN
/// Types that can be rebuilt from an SLCAN line.
pub trait FromSlcan: Sized {
    fn from_slcan(line: &[u8]) -> Result<Self, DecodeError>;
}

impl ToSlcan for CanFrame {
    fn to_slcan(&self) -> EncodedFrame {
        engine::encode(self)
    }

    fn write_slcan(&self, writer: &mut HexWriter<'_>) -> Result<(), HexWriterError> {
        engine::encode_into(self, writer)
    }
}

impl FromSlcan for CanFrame {
    fn from_slcan(line: &[u8]) -> Result<Self, DecodeError> {
        engine::decode(line)
    }
}
