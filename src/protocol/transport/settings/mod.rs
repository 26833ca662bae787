//! Values exchanged with the CAN controller collaborator: open mode,
//! configuration toggles, status flags, and the device serial number.
use crate::infra::codec::hex::nibble_to_ascii;

//==================================================================================BUS_MODE
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// How the channel participates on the bus once opened.
pub enum BusMode {
    /// Transmit and acknowledge (`O`).
    Normal,
    /// Receive only, never drive the bus (`L`).
    ListenOnly,
}

//==================================================================================SETTING
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Configuration toggle forwarded to the controller. Hardware without
/// support for a toggle may ignore it.
pub enum Setting {
    /// `P`: deliver received frames only when polled.
    PollingMode,
    /// `A`: deliver received frames as they arrive.
    AutoSend,
    /// `Xn`: append a time-stamp to received frames.
    Timestamp(bool),
    /// `Wn`: acceptance filter mode.
    FilterMode(u8),
    /// `Mxxxxxxxx`: acceptance code register.
    AcceptanceCode(u32),
    /// `mxxxxxxxx`: acceptance mask register.
    AcceptanceMask(u32),
    /// `Un`: serial baud rate index.
    SerialBaud(u8),
    /// `Zn`: auto-reply to remote frames.
    AutoReply(bool),
    /// `Qn`: flow control.
    FlowControl(bool),
}

//==================================================================================STATUS_FLAGS
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Status byte reported by the `F` command (SJA1000-style bit layout).
pub struct StatusFlags(pub u8);

impl StatusFlags {
    pub const RX_QUEUE_FULL: u8 = 1 << 0;
    pub const TX_QUEUE_FULL: u8 = 1 << 1;
    pub const ERROR_WARNING: u8 = 1 << 2;
    pub const DATA_OVERRUN: u8 = 1 << 3;
    pub const ERROR_PASSIVE: u8 = 1 << 5;
    pub const ARBITRATION_LOST: u8 = 1 << 6;
    pub const BUS_ERROR: u8 = 1 << 7;

    /// No flag raised.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Checks whether every bit of `flag` is raised.
    pub const fn contains(&self, flag: u8) -> bool {
        self.0 & flag == flag
    }

    /// Copy with `flag` raised.
    pub const fn with(self, flag: u8) -> Self {
        Self(self.0 | flag)
    }

    /// Raw status byte.
    pub const fn bits(&self) -> u8 {
        self.0
    }
}

//==================================================================================SERIAL_NUMBER
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Eight ASCII hex characters identifying the adapter (`N` command).
pub struct SerialNumber([u8; 8]);

impl SerialNumber {
    /// Wrap characters already rendered by the hardware layer.
    pub const fn from_ascii(chars: [u8; 8]) -> Self {
        Self(chars)
    }

    /// Render a 32-bit hardware unique word as uppercase hex, most
    /// significant nibble first.
    pub const fn from_unique_id(unique_id: u32) -> Self {
        let mut chars = [0u8; 8];
        let mut i = 0;
        while i < 8 {
            chars[7 - i] = nibble_to_ascii((unique_id >> (4 * i)) as u8);
            i += 1;
        }
        Self(chars)
    }

    /// The eight characters sent to the host.
    pub const fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}
