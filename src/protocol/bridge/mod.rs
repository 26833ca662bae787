//! Bridge driver: the glue between the host transport, the dispatcher and
//! the CAN controller.
//!
//! [`Bridge`] exposes the two synchronous entry points of an interrupt-driven
//! firmware: the transport receive callback ([`Bridge::on_host_chunk`]) and
//! the CAN receive interrupt ([`Bridge::on_frame_received`]). Each entry
//! point works on its own stack buffer, so the two paths share no mutable
//! buffer.
//!
//! Calling both through `&mut Bridge` assumes they never preempt each other
//! (single core, equal interrupt priority). Otherwise use [`shared::SharedBridge`],
//! or hand received frames to [`relay::FrameRelay`] and send them from a task.
use crate::core::MAX_LINE_LEN;
use crate::error::BridgeError;
use crate::infra::codec::engine::encode;
use crate::protocol::slcan::dispatcher::Dispatcher;
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::traits::can_controller::CanController;
use crate::protocol::transport::traits::host_link::HostLink;

pub mod relay;
pub mod shared;

/// Owns the dispatcher and both collaborators.
pub struct Bridge<C: CanController, H: HostLink> {
    dispatcher: Dispatcher,
    controller: C,
    host: H,
}

impl<C: CanController, H: HostLink> Bridge<C, H> {
    pub fn new(dispatcher: Dispatcher, controller: C, host: H) -> Self {
        Self {
            dispatcher,
            controller,
            host,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn controller(&mut self) -> &mut C {
        &mut self.controller
    }

    pub fn host(&mut self) -> &mut H {
        &mut self.host
    }

    /// Give back the collaborators.
    pub fn into_parts(self) -> (C, H) {
        (self.controller, self.host)
    }

    /// Transport receive callback: treat `chunk` as one command line and
    /// send the response back. Returns the number of bytes sent.
    ///
    /// Empty chunks (zero-length USB packets) are ignored.
    pub fn on_host_chunk(&mut self, chunk: &[u8]) -> Result<usize, BridgeError<H::Error>> {
        if chunk.is_empty() {
            return Ok(0);
        }
        let mut response = [0u8; MAX_LINE_LEN];
        let len = self
            .dispatcher
            .dispatch(&mut self.controller, chunk, &mut response);
        if len > 0 {
            self.host
                .send(&response[..len])
                .map_err(BridgeError::Host)?;
        }
        Ok(len)
    }

    /// CAN receive interrupt: encode `frame` and send it to the host.
    pub fn on_frame_received(&mut self, frame: &CanFrame) -> Result<(), BridgeError<H::Error>> {
        let line = encode(frame);

        #[cfg(feature = "defmt")]
        defmt::trace!("bridge: rx frame {=[u8]:a}", line.as_bytes());

        self.host.send(line.as_bytes()).map_err(BridgeError::Host)
    }

    /// CAN receive interrupt, raw driver fields. Data the hardware should
    /// never produce (identifier or DLC out of range) is rejected.
    pub fn on_raw_frame_received(
        &mut self,
        raw_id: u32,
        extended: bool,
        remote: bool,
        dlc: u8,
        data: &[u8],
    ) -> Result<(), BridgeError<H::Error>> {
        let frame = CanFrame::from_raw(raw_id, extended, remote, dlc, data).map_err(|err| {
            #[cfg(feature = "defmt")]
            defmt::warn!("bridge: invalid frame from controller: {}", err);
            BridgeError::Frame(err)
        })?;
        self.on_frame_received(&frame)
    }
}
