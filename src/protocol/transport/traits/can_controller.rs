//! Contract for the CAN controller driver the dispatcher drives.
//!
//! Calls are synchronous and must not block: the dispatcher runs in the
//! transport receive callback, usually interrupt context.
use crate::protocol::transport::bitrate::Bitrate;
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::settings::{BusMode, SerialNumber, Setting, StatusFlags};

/// Hardware operations reachable from SLCAN commands.
pub trait CanController {
    type Error: core::fmt::Debug;

    /// Select one of the nine standard bit-rates (`Sn`).
    fn setup(&mut self, bitrate: Bitrate) -> Result<(), Self::Error>;

    /// Load raw BTR0/BTR1 timing registers (`sxxyy`). Ignored by default.
    fn set_bit_timing(&mut self, _btr: u16) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Join the bus (`O` / `L`).
    fn open(&mut self, mode: BusMode) -> Result<(), Self::Error>;

    /// Leave the bus (`C`).
    fn close(&mut self) -> Result<(), Self::Error>;

    /// Hand a frame to the hardware. Fire-and-forget from the protocol's
    /// point of view: arbitration and retries belong to the driver.
    fn transmit(&mut self, frame: &CanFrame) -> Result<(), Self::Error>;

    /// Apply a configuration toggle. Ignored by default.
    fn configure(&mut self, _setting: Setting) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Current status byte (`F`). Reports no flag by default.
    fn status_flags(&mut self) -> Result<StatusFlags, Self::Error> {
        Ok(StatusFlags::empty())
    }

    /// Per-device identifier (`N`), derived from a hardware-unique value.
    fn serial_number(&mut self) -> SerialNumber;
}

impl<T: CanController + ?Sized> CanController for &mut T {
    type Error = T::Error;

    fn setup(&mut self, bitrate: Bitrate) -> Result<(), Self::Error> {
        (**self).setup(bitrate)
    }

    fn set_bit_timing(&mut self, btr: u16) -> Result<(), Self::Error> {
        (**self).set_bit_timing(btr)
    }

    fn open(&mut self, mode: BusMode) -> Result<(), Self::Error> {
        (**self).open(mode)
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close()
    }

    fn transmit(&mut self, frame: &CanFrame) -> Result<(), Self::Error> {
        (**self).transmit(frame)
    }

    fn configure(&mut self, setting: Setting) -> Result<(), Self::Error> {
        (**self).configure(setting)
    }

    fn status_flags(&mut self) -> Result<StatusFlags, Self::Error> {
        (**self).status_flags()
    }

    fn serial_number(&mut self) -> SerialNumber {
        (**self).serial_number()
    }
}
