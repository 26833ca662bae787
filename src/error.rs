//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (frame construction, hex
//! decoding, command routing, host/controller plumbing, etc.).
use thiserror_no_std::Error;

//==================================================================================ERROR_KIND
/// Coarse classification of every failure the bridge can observe.
///
/// Hosts only ever see a terminator, so the kind is what gets logged and
/// what tests assert on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Unrecognized frame kind, invalid hex digit, or out-of-range field.
    MalformedFrame,
    /// Input ended before the declared field layout was complete.
    TruncatedFrame,
    /// No command table entry for the leading byte.
    UnknownCommand,
    /// Input does not end with the terminator.
    IncompleteLine,
    /// Command argument missing or outside its accepted range.
    InvalidArgument,
    /// Response does not fit into the caller's buffer.
    ResponseOverflow,
    /// The CAN controller or host link reported a failure.
    Controller,
}

//==================================================================================FRAME_BUILD_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors that can occur while building a CAN frame or identifier.
pub enum FrameBuildError {
    /// Identifier does not fit the 11-bit (standard) or 29-bit (extended) range.
    #[error("Identifier out of range: {id:#X} (extended: {extended})")]
    IdOutOfRange { id: u32, extended: bool },
    /// Data length code above 8.
    #[error("Data length code out of range: {dlc}")]
    DlcOutOfRange { dlc: u8 },
}

//==================================================================================HEX_ERRORS
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised while reading hex nibbles from an ASCII buffer.
pub enum HexReaderError {
    /// Attempted to read past the end of the buffer.
    #[error("Attempted to read out of bounds at {position} -> asked: {asked}, available: {available}")]
    OutOfBounds {
        position: usize,
        asked: usize,
        available: usize,
    },
    /// Byte at `position` is not `0-9`, `A-F` or `a-f`.
    #[error("Invalid hex digit {byte:#04X} at position {position}")]
    InvalidDigit { position: usize, byte: u8 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised while appending ASCII bytes into a buffer.
pub enum HexWriterError {
    /// Attempted to write beyond the provided capacity.
    #[error("Attempted to write out of bounds -> asked: {asked}, available: {available}")]
    OutOfBounds { asked: usize, available: usize },
}

//==================================================================================DECODE_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Failures while turning an SLCAN frame line into a [`CanFrame`](crate::protocol::transport::can_frame::CanFrame).
pub enum DecodeError {
    /// Leading byte is not `t`, `T`, `r` or `R`.
    #[error("Unknown frame kind {byte:#04X}")]
    UnknownFrameKind { byte: u8 },
    /// A nibble of the identifier, DLC or payload is not a hex digit.
    #[error("Invalid hex digit {byte:#04X} at position {position}")]
    InvalidHexDigit { position: usize, byte: u8 },
    /// Identifier or DLC outside the classic CAN ranges.
    #[error(transparent)]
    OutOfRange(#[from] FrameBuildError),
    /// Input ended in the middle of a field.
    #[error("Truncated frame: field at position {position} needs more input")]
    Truncated { position: usize },
}

impl DecodeError {
    /// Classify the failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::Truncated { .. } => ErrorKind::TruncatedFrame,
            _ => ErrorKind::MalformedFrame,
        }
    }
}

impl From<HexReaderError> for DecodeError {
    fn from(err: HexReaderError) -> Self {
        match err {
            HexReaderError::OutOfBounds { position, .. } => DecodeError::Truncated { position },
            HexReaderError::InvalidDigit { position, byte } => {
                DecodeError::InvalidHexDigit { position, byte }
            }
        }
    }
}

//==================================================================================COMMAND_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised while parsing the arguments of a command line.
pub enum CommandError {
    /// Argument is missing or not a hex digit.
    #[error("Invalid argument: {source}")]
    Argument { source: HexReaderError },
    /// Argument parsed but outside the accepted range.
    #[error("Argument out of range: {value}")]
    ArgumentOutOfRange { value: u32 },
    /// Frame line could not be decoded.
    #[error("Frame decode failed: {0}")]
    Decode(#[from] DecodeError),
    /// Decoded frame layout does not match the command table entry.
    #[error("Frame layout does not match command {command:#04X}")]
    FrameKindMismatch { command: u8 },
}

impl CommandError {
    /// Classify the failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::Decode(err) => err.kind(),
            CommandError::FrameKindMismatch { .. } => ErrorKind::MalformedFrame,
            CommandError::Argument { .. } | CommandError::ArgumentOutOfRange { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

impl From<HexReaderError> for CommandError {
    fn from(source: HexReaderError) -> Self {
        CommandError::Argument { source }
    }
}

//==================================================================================DISPATCH_ERROR
#[derive(Error, Debug)]
/// Outcome of a line the dispatcher could not complete.
pub enum DispatchError<E: core::fmt::Debug> {
    /// Line does not end with `\r`.
    #[error("Incomplete line")]
    IncompleteLine,
    /// No table entry for the leading byte.
    #[error("Unknown command {command:#04X}")]
    UnknownCommand { command: u8 },
    /// Arguments or frame of a known command are invalid.
    #[error(transparent)]
    Command(#[from] CommandError),
    /// Handler output does not fit the response buffer.
    #[error("Response overflow: {0}")]
    ResponseOverflow(HexWriterError),
    /// CAN controller refused the request.
    #[error("CAN controller error: {0:?}")]
    Controller(E),
}

impl<E: core::fmt::Debug> DispatchError<E> {
    /// Classify the failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DispatchError::IncompleteLine => ErrorKind::IncompleteLine,
            DispatchError::UnknownCommand { .. } => ErrorKind::UnknownCommand,
            DispatchError::Command(err) => err.kind(),
            DispatchError::ResponseOverflow(_) => ErrorKind::ResponseOverflow,
            DispatchError::Controller(_) => ErrorKind::Controller,
        }
    }
}

impl<E: core::fmt::Debug> From<HexWriterError> for DispatchError<E> {
    fn from(err: HexWriterError) -> Self {
        DispatchError::ResponseOverflow(err)
    }
}

//==================================================================================BRIDGE_ERROR
#[derive(Error, Debug)]
/// Errors surfaced by the bridge driver entry points.
pub enum BridgeError<E: core::fmt::Debug> {
    /// Host link refused the outbound bytes.
    #[error("Host link send error: {0:?}")]
    Host(E),
    /// Hardware handed over an invalid frame.
    #[error("Invalid received frame: {0}")]
    Frame(#[from] FrameBuildError),
    /// The shared bridge is already borrowed by the other entry point.
    #[error("Bridge busy")]
    Busy,
}

//==================================================================================RELAY_ERROR
#[derive(Error, Debug)]
/// Errors raised by the queued frame relay.
pub enum RelayError<E: core::fmt::Debug> {
    /// The frame queue is full; the frame was dropped.
    #[error("Frame queue full")]
    QueueFull,
    /// Host link failed while draining the queue.
    #[error("Host link send error: {0:?}")]
    Host(E),
}
