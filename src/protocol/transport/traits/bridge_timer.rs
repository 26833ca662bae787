//! Asynchronous timer abstraction bounding host sends in the frame relay.

/// Timer trait abstraction; must remain thread-safe when applicable.
pub trait BridgeTimer {
    /// Asynchronously wait for `millis` milliseconds.
    fn delay_ms<'a>(&'a mut self, millis: u32) -> impl core::future::Future<Output = ()> + 'a;
}

/// [`BridgeTimer`] backed by `embassy-time`. The firmware must link a time driver.
#[cfg(feature = "embassy-timer")]
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyTimer;

#[cfg(feature = "embassy-timer")]
impl BridgeTimer for EmbassyTimer {
    async fn delay_ms(&mut self, millis: u32) {
        embassy_time::Timer::after_millis(millis as u64).await
    }
}
