//! Defines the "data contract" between `build.rs` (the scribe) and
//! the command dispatcher (the interpreter).
//!
//! `build.rs` reads the command manifest and emits a static table of
//! [`CommandEntry`] values. The dispatcher resolves the first byte of every
//! inbound line against that table and routes on the [`CommandKind`].
//!
//! This file is compiled twice (library and build script): it must not
//! depend on any crate.

// Some items are only used by one of the two compilation units.
#![allow(dead_code)]

/// Line terminator, also the "command accepted" acknowledgement.
pub const CR: u8 = b'\r';
/// Error acknowledgement used by most SLCAN adapters (ASCII BEL).
pub const BELL: u8 = 0x07;
/// Largest chunk the USB transport hands over in one receive callback.
pub const MAX_LINE_LEN: usize = 64;
/// Longest encoded classic CAN frame: `T` + 8 id + dlc + 16 data + CR.
pub const MAX_ENCODED_FRAME_LEN: usize = 27;

/// Handler selected by a command character.
///
/// Variant names are the vocabulary of the command manifest consumed by
/// `build.rs`; renaming one is a manifest-breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `Sn`: set up one of the nine standard bit-rates.
    Setup,
    /// `sxxyy`: set up raw BTR0/BTR1 bit-timing registers.
    SetupBitTiming,
    /// `O`: open the channel.
    Open,
    /// `L`: open the channel in listen-only mode.
    ListenOnly,
    /// `C`: close the channel.
    Close,
    /// `tiiil...`: transmit a standard data frame.
    TransmitStandard,
    /// `Tiiiiiiiil...`: transmit an extended data frame.
    TransmitExtended,
    /// `riiil`: transmit a standard remote frame.
    RequestStandard,
    /// `Riiiiiiiil`: transmit an extended remote frame.
    RequestExtended,
    /// `P`: switch to polling mode.
    PollingMode,
    /// `A`: switch to auto-send mode.
    AutoSend,
    /// `F`: read status flags.
    ReadStatus,
    /// `Xn`: timestamp mode.
    TimestampMode,
    /// `Wn`: acceptance filter mode.
    FilterMode,
    /// `Mxxxxxxxx`: acceptance code.
    AcceptanceCode,
    /// `mxxxxxxxx`: acceptance mask.
    AcceptanceMask,
    /// `Un`: serial baud rate.
    SerialBaud,
    /// `V`: version string.
    Version,
    /// `N`: serial number.
    SerialNumber,
    /// `Zn`: auto-reply mode.
    AutoReply,
    /// `Qn`: flow-control mode.
    FlowControl,
}

impl CommandKind {
    /// Every kind, in manifest order.
    pub const ALL: [CommandKind; 21] = [
        CommandKind::Setup,
        CommandKind::SetupBitTiming,
        CommandKind::Open,
        CommandKind::ListenOnly,
        CommandKind::Close,
        CommandKind::TransmitStandard,
        CommandKind::TransmitExtended,
        CommandKind::RequestStandard,
        CommandKind::RequestExtended,
        CommandKind::PollingMode,
        CommandKind::AutoSend,
        CommandKind::ReadStatus,
        CommandKind::TimestampMode,
        CommandKind::FilterMode,
        CommandKind::AcceptanceCode,
        CommandKind::AcceptanceMask,
        CommandKind::SerialBaud,
        CommandKind::Version,
        CommandKind::SerialNumber,
        CommandKind::AutoReply,
        CommandKind::FlowControl,
    ];

    /// Manifest name of the kind (identical to the variant name).
    pub const fn name(&self) -> &'static str {
        match self {
            CommandKind::Setup => "Setup",
            CommandKind::SetupBitTiming => "SetupBitTiming",
            CommandKind::Open => "Open",
            CommandKind::ListenOnly => "ListenOnly",
            CommandKind::Close => "Close",
            CommandKind::TransmitStandard => "TransmitStandard",
            CommandKind::TransmitExtended => "TransmitExtended",
            CommandKind::RequestStandard => "RequestStandard",
            CommandKind::RequestExtended => "RequestExtended",
            CommandKind::PollingMode => "PollingMode",
            CommandKind::AutoSend => "AutoSend",
            CommandKind::ReadStatus => "ReadStatus",
            CommandKind::TimestampMode => "TimestampMode",
            CommandKind::FilterMode => "FilterMode",
            CommandKind::AcceptanceCode => "AcceptanceCode",
            CommandKind::AcceptanceMask => "AcceptanceMask",
            CommandKind::SerialBaud => "SerialBaud",
            CommandKind::Version => "Version",
            CommandKind::SerialNumber => "SerialNumber",
            CommandKind::AutoReply => "AutoReply",
            CommandKind::FlowControl => "FlowControl",
        }
    }

    /// Resolve a manifest name back to its kind.
    pub fn from_name(name: &str) -> Option<CommandKind> {
        CommandKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// `(extended, remote)` layout of the frame carried by a transmit kind.
    pub const fn frame_layout(&self) -> Option<(bool, bool)> {
        match self {
            CommandKind::TransmitStandard => Some((false, false)),
            CommandKind::TransmitExtended => Some((true, false)),
            CommandKind::RequestStandard => Some((false, true)),
            CommandKind::RequestExtended => Some((true, true)),
            _ => None,
        }
    }
}

/// One row of the static command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    /// Leading ASCII byte selecting the command.
    pub command: u8,
    /// Handler the dispatcher runs for this command.
    pub kind: CommandKind,
    /// Human-readable description (diagnostics only).
    pub summary: &'static str,
}
