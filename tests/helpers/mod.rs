/// Test doubles for the CAN controller, the host link and the timer.
use slcan_bridge::protocol::transport::{
    bitrate::Bitrate,
    can_frame::CanFrame,
    settings::{BusMode, SerialNumber, Setting, StatusFlags},
    traits::{
        bridge_timer::BridgeTimer,
        can_controller::CanController,
        host_link::{AsyncHostLink, HostLink},
    },
};
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
/// One call observed by [`MockController`].
pub enum ControllerCall {
    Setup(Bitrate),
    BitTiming(u16),
    Open(BusMode),
    Close,
    Transmit(CanFrame),
    Configure(Setting),
}

#[derive(Default)]
#[allow(dead_code)]
/// CAN controller recording every call in order.
pub struct MockController {
    pub calls: Vec<ControllerCall>,
    pub status: StatusFlags,
    pub unique_id: u32,
}

#[allow(dead_code)]
impl MockController {
    /// Frames handed to `transmit`, in order.
    pub fn transmitted(&self) -> Vec<CanFrame> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ControllerCall::Transmit(frame) => Some(*frame),
                _ => None,
            })
            .collect()
    }
}

impl CanController for MockController {
    type Error = ();

    fn setup(&mut self, bitrate: Bitrate) -> Result<(), ()> {
        self.calls.push(ControllerCall::Setup(bitrate));
        Ok(())
    }

    fn set_bit_timing(&mut self, btr: u16) -> Result<(), ()> {
        self.calls.push(ControllerCall::BitTiming(btr));
        Ok(())
    }

    fn open(&mut self, mode: BusMode) -> Result<(), ()> {
        self.calls.push(ControllerCall::Open(mode));
        Ok(())
    }

    fn close(&mut self) -> Result<(), ()> {
        self.calls.push(ControllerCall::Close);
        Ok(())
    }

    fn transmit(&mut self, frame: &CanFrame) -> Result<(), ()> {
        self.calls.push(ControllerCall::Transmit(*frame));
        Ok(())
    }

    fn configure(&mut self, setting: Setting) -> Result<(), ()> {
        self.calls.push(ControllerCall::Configure(setting));
        Ok(())
    }

    fn status_flags(&mut self) -> Result<StatusFlags, ()> {
        Ok(self.status)
    }

    fn serial_number(&mut self) -> SerialNumber {
        SerialNumber::from_unique_id(self.unique_id)
    }
}

#[derive(Default)]
#[allow(dead_code)]
/// Host link keeping every sent packet; can be told to fail.
pub struct MockHost {
    pub sent: Vec<Vec<u8>>,
    pub fail: bool,
}

impl HostLink for MockHost {
    type Error = &'static str;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.fail {
            return Err("endpoint stalled");
        }
        self.sent.push(bytes.to_vec());
        Ok(())
    }
}

#[allow(dead_code)]
/// Asynchronous host link forwarding packets to a tokio channel.
pub struct MockAsyncHost {
    tx: mpsc::UnboundedSender<Vec<u8>>,
    /// Sends before this many calls hang forever.
    pub stall_first: usize,
    calls: usize,
}

#[allow(dead_code)]
impl MockAsyncHost {
    /// Build the link and the receiving end the test reads from.
    pub fn create() -> (Self, mpsc::UnboundedReceiver<Vec<u8>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                stall_first: 0,
                calls: 0,
            },
            rx,
        )
    }
}

impl AsyncHostLink for MockAsyncHost {
    type Error = ();

    async fn send<'a>(&'a mut self, bytes: &'a [u8]) -> Result<(), Self::Error> {
        self.calls += 1;
        if self.calls <= self.stall_first {
            std::future::pending::<()>().await;
        }
        self.tx.send(bytes.to_vec()).map_err(|_| ())
    }
}

#[allow(dead_code)]
/// Timer based on `tokio::time::sleep` to drive delays in tests.
pub struct MockTimer;

impl BridgeTimer for MockTimer {
    async fn delay_ms(&mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}
