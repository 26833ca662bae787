//! In-memory representation of a classic CAN 2.0 frame, shared by the SLCAN
//! codec, the CAN controller collaborator, and the bridge driver.
use crate::error::FrameBuildError;
use crate::protocol::transport::can_id::CanId;

/// Largest classic CAN payload (and data length code).
pub const MAX_DLC: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Immutable CAN frame.
///
/// Built fresh for every decoded line or received hardware frame and consumed
/// once. Bytes past `dlc` are always zero, and remote frames never carry data,
/// so two frames compare equal exactly when they look the same on the bus.
pub struct CanFrame {
    id: CanId,
    remote: bool,
    dlc: u8,
    data: [u8; 8],
}

impl CanFrame {
    /// Data frame carrying `payload` (0 to 8 bytes).
    pub fn data_frame(id: CanId, payload: &[u8]) -> Result<Self, FrameBuildError> {
        if payload.len() > MAX_DLC as usize {
            return Err(FrameBuildError::DlcOutOfRange {
                dlc: payload.len().min(u8::MAX as usize) as u8,
            });
        }
        let mut data = [0u8; 8];
        data[..payload.len()].copy_from_slice(payload);
        Ok(Self {
            id,
            remote: false,
            dlc: payload.len() as u8,
            data,
        })
    }

    /// Remote transmission request advertising `dlc` bytes.
    pub fn remote_frame(id: CanId, dlc: u8) -> Result<Self, FrameBuildError> {
        if dlc > MAX_DLC {
            return Err(FrameBuildError::DlcOutOfRange { dlc });
        }
        Ok(Self {
            id,
            remote: true,
            dlc,
            data: [0; 8],
        })
    }

    /// Build from the fields a CAN controller reports on receive.
    ///
    /// `data` must hold at least `dlc` bytes for data frames; it is ignored
    /// for remote frames.
    pub fn from_raw(
        raw_id: u32,
        extended: bool,
        remote: bool,
        dlc: u8,
        data: &[u8],
    ) -> Result<Self, FrameBuildError> {
        let id = CanId::new(raw_id, extended)?;
        if remote {
            return Self::remote_frame(id, dlc);
        }
        if dlc > MAX_DLC || data.len() < dlc as usize {
            return Err(FrameBuildError::DlcOutOfRange { dlc });
        }
        Self::data_frame(id, &data[..dlc as usize])
    }

    /// Frame identifier.
    pub fn id(&self) -> CanId {
        self.id
    }

    /// Numeric identifier value.
    pub fn raw_id(&self) -> u32 {
        self.id.raw()
    }

    /// `true` for 29-bit identifiers.
    pub fn is_extended(&self) -> bool {
        self.id.is_extended()
    }

    /// `true` for remote transmission requests.
    pub fn is_remote(&self) -> bool {
        self.remote
    }

    /// Data length code (0 to 8).
    pub fn dlc(&self) -> u8 {
        self.dlc
    }

    /// Meaningful payload bytes; empty for remote frames.
    pub fn data(&self) -> &[u8] {
        if self.remote {
            &[]
        } else {
            &self.data[..self.dlc as usize]
        }
    }
}

impl embedded_can::Frame for CanFrame {
    fn new(id: impl Into<embedded_can::Id>, data: &[u8]) -> Option<Self> {
        CanFrame::data_frame(CanId::from(id.into()), data).ok()
    }

    fn new_remote(id: impl Into<embedded_can::Id>, dlc: usize) -> Option<Self> {
        let dlc = u8::try_from(dlc).ok()?;
        CanFrame::remote_frame(CanId::from(id.into()), dlc).ok()
    }

    fn is_extended(&self) -> bool {
        self.id.is_extended()
    }

    fn is_remote_frame(&self) -> bool {
        self.remote
    }

    fn id(&self) -> embedded_can::Id {
        self.id.into()
    }

    fn dlc(&self) -> usize {
        self.dlc as usize
    }

    fn data(&self) -> &[u8] {
        CanFrame::data(self)
    }
}
