//! The nine CAN bit-rate presets selectable with the `Sn` command.
use crate::error::CommandError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Standard SLCAN bit-rate index.
///
/// ```text
/// S0   10 kbit/s    S3  100 kbit/s    S6  500 kbit/s
/// S1   20 kbit/s    S4  125 kbit/s    S7  800 kbit/s
/// S2   50 kbit/s    S5  250 kbit/s    S8    1 Mbit/s
/// ```
pub enum Bitrate {
    Kbps10,
    Kbps20,
    Kbps50,
    Kbps100,
    Kbps125,
    Kbps250,
    Kbps500,
    Kbps800,
    Mbps1,
}

impl Bitrate {
    /// Nominal bus speed in bit/s.
    pub const fn bits_per_second(&self) -> u32 {
        match self {
            Bitrate::Kbps10 => 10_000,
            Bitrate::Kbps20 => 20_000,
            Bitrate::Kbps50 => 50_000,
            Bitrate::Kbps100 => 100_000,
            Bitrate::Kbps125 => 125_000,
            Bitrate::Kbps250 => 250_000,
            Bitrate::Kbps500 => 500_000,
            Bitrate::Kbps800 => 800_000,
            Bitrate::Mbps1 => 1_000_000,
        }
    }

    /// Preset index as used on the wire (`0..=8`).
    pub const fn index(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Bitrate {
    type Error = CommandError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bitrate::Kbps10),
            1 => Ok(Bitrate::Kbps20),
            2 => Ok(Bitrate::Kbps50),
            3 => Ok(Bitrate::Kbps100),
            4 => Ok(Bitrate::Kbps125),
            5 => Ok(Bitrate::Kbps250),
            6 => Ok(Bitrate::Kbps500),
            7 => Ok(Bitrate::Kbps800),
            8 => Ok(Bitrate::Mbps1),
            _ => Err(CommandError::ArgumentOutOfRange {
                value: value as u32,
            }),
        }
    }
}
