//! [`Bridge`] behind a blocking mutex, for targets where the host callback
//! and the CAN receive interrupt can preempt each other.
use core::cell::RefCell;

use embassy_sync::blocking_mutex::{raw::RawMutex, Mutex};

use super::Bridge;
use crate::error::BridgeError;
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::traits::can_controller::CanController;
use crate::protocol::transport::traits::host_link::HostLink;

/// Shareable bridge; entry points take `&self`.
///
/// With a `CriticalSectionRawMutex` each call runs inside a critical
/// section. A call that re-enters while the bridge is borrowed (from inside
/// a collaborator callback) fails with [`BridgeError::Busy`].
pub struct SharedBridge<M: RawMutex, C: CanController, H: HostLink> {
    inner: Mutex<M, RefCell<Bridge<C, H>>>,
}

impl<M: RawMutex, C: CanController, H: HostLink> SharedBridge<M, C, H> {
    pub const fn new(bridge: Bridge<C, H>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(bridge)),
        }
    }

    /// See [`Bridge::on_host_chunk`].
    pub fn on_host_chunk(&self, chunk: &[u8]) -> Result<usize, BridgeError<H::Error>> {
        self.with_bridge(|bridge| bridge.on_host_chunk(chunk))
    }

    /// See [`Bridge::on_frame_received`].
    pub fn on_frame_received(&self, frame: &CanFrame) -> Result<(), BridgeError<H::Error>> {
        self.with_bridge(|bridge| bridge.on_frame_received(frame))
    }

    /// See [`Bridge::on_raw_frame_received`].
    pub fn on_raw_frame_received(
        &self,
        raw_id: u32,
        extended: bool,
        remote: bool,
        dlc: u8,
        data: &[u8],
    ) -> Result<(), BridgeError<H::Error>> {
        self.with_bridge(|bridge| bridge.on_raw_frame_received(raw_id, extended, remote, dlc, data))
    }

    /// Run `f` with exclusive access to the bridge.
    pub fn with_bridge<R>(
        &self,
        f: impl FnOnce(&mut Bridge<C, H>) -> Result<R, BridgeError<H::Error>>,
    ) -> Result<R, BridgeError<H::Error>> {
        self.inner.lock(|cell| {
            let mut bridge = cell.try_borrow_mut().map_err(|_| BridgeError::Busy)?;
            f(&mut *bridge)
        })
    }

    pub fn into_inner(self) -> Bridge<C, H> {
        self.inner.into_inner().into_inner()
    }
}
