//! Standard (11-bit) and extended (29-bit) CAN identifiers as carried by the
//! SLCAN grammar.
use crate::error::FrameBuildError;
use embedded_can::{ExtendedId, Id, StandardId};

/// Highest 11-bit identifier.
pub const STANDARD_ID_MAX: u32 = 0x7FF;
/// Highest 29-bit identifier.
pub const EXTENDED_ID_MAX: u32 = 0x1FFF_FFFF;

//==================================================================================CAN_ID
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// CAN identifier tagged with its frame format. The range is checked at
/// construction, so every value is representable on the wire.
pub struct CanId {
    raw: u32,
    extended: bool,
}

impl CanId {
    /// Build a standard identifier; rejects values above `0x7FF`.
    pub const fn standard(raw: u32) -> Result<Self, FrameBuildError> {
        if raw > STANDARD_ID_MAX {
            return Err(FrameBuildError::IdOutOfRange {
                id: raw,
                extended: false,
            });
        }
        Ok(Self {
            raw,
            extended: false,
        })
    }

    /// Build an extended identifier; rejects values above `0x1FFFFFFF`.
    pub const fn extended(raw: u32) -> Result<Self, FrameBuildError> {
        if raw > EXTENDED_ID_MAX {
            return Err(FrameBuildError::IdOutOfRange {
                id: raw,
                extended: true,
            });
        }
        Ok(Self {
            raw,
            extended: true,
        })
    }

    /// Build from the hardware representation (raw value + IDE flag).
    pub const fn new(raw: u32, extended: bool) -> Result<Self, FrameBuildError> {
        if extended {
            Self::extended(raw)
        } else {
            Self::standard(raw)
        }
    }

    /// Numeric identifier value.
    pub const fn raw(&self) -> u32 {
        self.raw
    }

    /// `true` for 29-bit identifiers.
    pub const fn is_extended(&self) -> bool {
        self.extended
    }

    /// Number of hex nibbles the identifier takes on the wire.
    pub const fn nibbles(&self) -> u8 {
        if self.extended {
            8
        } else {
            3
        }
    }
}

impl From<CanId> for Id {
    fn from(id: CanId) -> Self {
        // Both ranges were validated when the `CanId` was built.
        if id.extended {
            Id::Extended(ExtendedId::new(id.raw).unwrap_or(ExtendedId::MAX))
        } else {
            Id::Standard(StandardId::new(id.raw as u16).unwrap_or(StandardId::MAX))
        }
    }
}

impl From<Id> for CanId {
    fn from(id: Id) -> Self {
        match id {
            Id::Standard(std_id) => CanId {
                raw: std_id.as_raw() as u32,
                extended: false,
            },
            Id::Extended(ext_id) => CanId {
                raw: ext_id.as_raw(),
                extended: true,
            },
        }
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
