//! Command table lookup and argument parsing.
//!
//! The table itself is generated by `build.rs` from the command manifest;
//! this module only reads it. A command byte absent from the manifest is
//! unknown to the build, whatever the protocol defines.
use crate::core::{CommandEntry, CommandKind};
use crate::error::CommandError;
use crate::infra::codec::engine::decode;
use crate::infra::codec::hex::HexReader;
use crate::protocol::transport::bitrate::Bitrate;
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::settings::{BusMode, Setting};

include!(concat!(env!("OUT_DIR"), "/generated_commands.rs"));

/// Table row for a leading command byte (exact match).
pub fn lookup(command: u8) -> Option<&'static CommandEntry> {
    COMMAND_TABLE.iter().find(|entry| entry.command == command)
}

//==================================================================================COMMAND
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// A fully parsed command line, ready to run against a controller.
pub enum Command {
    Setup(Bitrate),
    SetBitTiming(u16),
    Open(BusMode),
    Close,
    Transmit(CanFrame),
    Configure(Setting),
    ReadStatus,
    Version,
    SerialNumber,
}

impl Command {
    /// Parse `line` (command byte included) as a command of `kind`.
    ///
    /// Arguments start right after the command byte; anything after the
    /// last argument is ignored.
    pub fn parse(kind: CommandKind, line: &[u8]) -> Result<Self, CommandError> {
        let mut args = HexReader::new(line.get(1..).unwrap_or(&[]));
        let command = match kind {
            CommandKind::Setup => Command::Setup(Bitrate::try_from(args.read_nibble()?)?),
            CommandKind::SetupBitTiming => Command::SetBitTiming(args.read_u32(4)? as u16),
            CommandKind::Open => Command::Open(BusMode::Normal),
            CommandKind::ListenOnly => Command::Open(BusMode::ListenOnly),
            CommandKind::Close => Command::Close,
            CommandKind::TransmitStandard
            | CommandKind::TransmitExtended
            | CommandKind::RequestStandard
            | CommandKind::RequestExtended => Command::Transmit(parse_frame(kind, line)?),
            CommandKind::PollingMode => Command::Configure(Setting::PollingMode),
            CommandKind::AutoSend => Command::Configure(Setting::AutoSend),
            CommandKind::ReadStatus => Command::ReadStatus,
            CommandKind::TimestampMode => {
                Command::Configure(Setting::Timestamp(read_flag(&mut args)?))
            }
            CommandKind::FilterMode => {
                Command::Configure(Setting::FilterMode(args.read_nibble()?))
            }
            CommandKind::AcceptanceCode => {
                Command::Configure(Setting::AcceptanceCode(args.read_u32(8)?))
            }
            CommandKind::AcceptanceMask => {
                Command::Configure(Setting::AcceptanceMask(args.read_u32(8)?))
            }
            CommandKind::SerialBaud => {
                Command::Configure(Setting::SerialBaud(args.read_nibble()?))
            }
            CommandKind::Version => Command::Version,
            CommandKind::SerialNumber => Command::SerialNumber,
            CommandKind::AutoReply => {
                Command::Configure(Setting::AutoReply(read_flag(&mut args)?))
            }
            CommandKind::FlowControl => {
                Command::Configure(Setting::FlowControl(read_flag(&mut args)?))
            }
        };
        Ok(command)
    }
}

/// Decode the frame of a transmit line and check it has the layout the
/// table entry promises.
fn parse_frame(kind: CommandKind, line: &[u8]) -> Result<CanFrame, CommandError> {
    let frame = decode(line)?;
    if kind.frame_layout() != Some((frame.is_extended(), frame.is_remote())) {
        return Err(CommandError::FrameKindMismatch {
            command: line.first().copied().unwrap_or_default(),
        });
    }
    Ok(frame)
}

/// `0` or `1` switch argument.
fn read_flag(args: &mut HexReader<'_>) -> Result<bool, CommandError> {
    match args.read_nibble()? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(CommandError::ArgumentOutOfRange {
            value: other as u32,
        }),
    }
}
