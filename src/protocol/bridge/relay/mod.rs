//! Queued relay of received CAN frames to the host.
//!
//! The CAN receive interrupt pushes frames with [`FrameSink::try_push`],
//! which never blocks; a task runs [`RelayRunner::drive`] to encode them
//! and hand them to an asynchronous host link. The queue is a
//! firmware-provided [`embassy_sync::channel::Channel`], so nothing is
//! allocated by the library.
use core::convert::Infallible;

use embassy_sync::{
    blocking_mutex::raw::RawMutex,
    channel::{Channel, Receiver, Sender},
};
use futures_util::{future::select, future::Either, pin_mut};

use crate::error::RelayError;
use crate::infra::codec::engine::encode;
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::traits::bridge_timer::BridgeTimer;
use crate::protocol::transport::traits::host_link::AsyncHostLink;
use crate::protocol::transport::HOST_SEND_TIMEOUT_MS;

/// Relay assembling the producer and consumer halves around one queue.
pub struct FrameRelay<'a, M: RawMutex, const N: usize> {
    channel: &'a Channel<M, CanFrame, N>,
    send_timeout_ms: u32,
}

impl<'a, M: RawMutex, const N: usize> FrameRelay<'a, M, N> {
    pub fn new(channel: &'a Channel<M, CanFrame, N>) -> Self {
        Self {
            channel,
            send_timeout_ms: HOST_SEND_TIMEOUT_MS,
        }
    }

    /// Override [`HOST_SEND_TIMEOUT_MS`].
    pub fn with_send_timeout_ms(mut self, millis: u32) -> Self {
        self.send_timeout_ms = millis;
        self
    }

    /// Producer half, for the CAN receive interrupt.
    pub fn sink(&self) -> FrameSink<'a, M, N> {
        FrameSink {
            sender: self.channel.sender(),
        }
    }

    /// Split into producer and consumer halves.
    pub fn into_parts(self) -> (FrameSink<'a, M, N>, RelayRunner<'a, M, N>) {
        (
            self.sink(),
            RelayRunner {
                receiver: self.channel.receiver(),
                send_timeout_ms: self.send_timeout_ms,
            },
        )
    }
}

//==================================================================================SINK
/// Non-blocking producer handle; cheap to clone into interrupt handlers.
pub struct FrameSink<'a, M: RawMutex, const N: usize> {
    sender: Sender<'a, M, CanFrame, N>,
}

impl<'a, M: RawMutex, const N: usize> Clone for FrameSink<'a, M, N> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<'a, M: RawMutex, const N: usize> FrameSink<'a, M, N> {
    /// Queue a frame. A full queue drops it and reports
    /// [`RelayError::QueueFull`].
    pub fn try_push(&self, frame: CanFrame) -> Result<(), RelayError<Infallible>> {
        self.sender.try_send(frame).map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("relay: queue full, frame dropped");
            RelayError::QueueFull
        })
    }
}

//==================================================================================RUNNER
/// Consumer half: drains the queue towards the host.
pub struct RelayRunner<'a, M: RawMutex, const N: usize> {
    receiver: Receiver<'a, M, CanFrame, N>,
    send_timeout_ms: u32,
}

impl<'a, M: RawMutex, const N: usize> RelayRunner<'a, M, N> {
    /// Receive, encode and send frames until the host link fails.
    ///
    /// A send that does not complete within the timeout is abandoned: the
    /// frame is dropped and the loop moves on to the next one.
    pub async fn drive<H, T>(
        &mut self,
        host: &mut H,
        timer: &mut T,
    ) -> Result<(), RelayError<H::Error>>
    where
        H: AsyncHostLink,
        T: BridgeTimer,
    {
        loop {
            let frame = self.receiver.receive().await;
            let line = encode(&frame);

            let outcome = {
                let send = host.send(line.as_bytes());
                let timeout = timer.delay_ms(self.send_timeout_ms);
                pin_mut!(send);
                pin_mut!(timeout);

                match select(send, timeout).await {
                    Either::Left((result, _)) => Some(result),
                    Either::Right(_) => None,
                }
            };

            match outcome {
                Some(Ok(())) => {
                    #[cfg(feature = "defmt")]
                    defmt::trace!("relay: sent {=[u8]:a}", line.as_bytes());
                }
                Some(Err(err)) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("relay: host link failed, stopping");
                    return Err(RelayError::Host(err));
                }
                None => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("relay: host send timed out, frame dropped");
                }
            }
        }
    }
}
