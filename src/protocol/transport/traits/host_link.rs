//! Outbound side of the host transport (USB CDC or UART).
use futures_util::Future;

/// Synchronous, non-blocking send used from interrupt context.
pub trait HostLink {
    type Error: core::fmt::Debug;
    /// Queue `bytes` towards the host, or fail fast.
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Asynchronous send used by the queued frame relay.
pub trait AsyncHostLink {
    type Error: core::fmt::Debug;
    /// Deliver `bytes` to the host. Asynchronous to accommodate endpoint
    /// drivers that wait for the host to poll.
    fn send<'a>(
        &'a mut self,
        bytes: &'a [u8],
    ) -> impl Future<Output = Result<(), Self::Error>> + 'a;
}
