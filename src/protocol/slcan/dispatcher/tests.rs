//! Dispatcher tests against an in-memory controller.
use super::*;
use crate::protocol::transport::bitrate::Bitrate;
use crate::protocol::transport::can_frame::CanFrame;
use crate::protocol::transport::settings::{BusMode, SerialNumber, Setting, StatusFlags};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Setup(Bitrate),
    BitTiming(u16),
    Open(BusMode),
    Close,
    Transmit(CanFrame),
    Configure(Setting),
}

/// Remembers the last call and how many calls were made.
#[derive(Default)]
struct RecordingController {
    last: Option<Call>,
    calls: usize,
    status: StatusFlags,
    fail: bool,
}

impl RecordingController {
    fn record(&mut self, call: Call) -> Result<(), ()> {
        self.calls += 1;
        self.last = Some(call);
        if self.fail {
            Err(())
        } else {
            Ok(())
        }
    }
}

impl CanController for RecordingController {
    type Error = ();

    fn setup(&mut self, bitrate: Bitrate) -> Result<(), ()> {
        self.record(Call::Setup(bitrate))
    }

    fn set_bit_timing(&mut self, btr: u16) -> Result<(), ()> {
        self.record(Call::BitTiming(btr))
    }

    fn open(&mut self, mode: BusMode) -> Result<(), ()> {
        self.record(Call::Open(mode))
    }

    fn close(&mut self) -> Result<(), ()> {
        self.record(Call::Close)
    }

    fn transmit(&mut self, frame: &CanFrame) -> Result<(), ()> {
        self.record(Call::Transmit(*frame))
    }

    fn configure(&mut self, setting: Setting) -> Result<(), ()> {
        self.record(Call::Configure(setting))
    }

    fn status_flags(&mut self) -> Result<StatusFlags, ()> {
        Ok(self.status)
    }

    fn serial_number(&mut self) -> SerialNumber {
        SerialNumber::from_unique_id(0x0042_BEEF)
    }
}

/// Controller relying on every default method of the trait.
struct MinimalController;

impl CanController for MinimalController {
    type Error = ();

    fn setup(&mut self, _bitrate: Bitrate) -> Result<(), ()> {
        Ok(())
    }

    fn open(&mut self, _mode: BusMode) -> Result<(), ()> {
        Ok(())
    }

    fn close(&mut self) -> Result<(), ()> {
        Ok(())
    }

    fn transmit(&mut self, _frame: &CanFrame) -> Result<(), ()> {
        Ok(())
    }

    fn serial_number(&mut self) -> SerialNumber {
        SerialNumber::from_ascii(*b"00000001")
    }
}

fn run<C: CanController>(
    dispatcher: &Dispatcher,
    controller: &mut C,
    line: &[u8],
) -> ([u8; 64], usize) {
    let mut response = [0u8; 64];
    let len = dispatcher.dispatch(controller, line, &mut response);
    (response, len)
}

macro_rules! assert_response {
    ($dispatcher:expr, $controller:expr, $line:expr, $expected:expr) => {{
        let (response, len) = run(&$dispatcher, &mut $controller, $line);
        assert_eq!(&response[..len], $expected);
    }};
}

//==================================================================================COMMANDS
#[test]
fn test_transmit_standard_frame() {
    let dispatcher = Dispatcher::default();
    let mut controller = RecordingController::default();

    assert_response!(dispatcher, controller, b"t1230\r", b"\r");
    match controller.last {
        Some(Call::Transmit(frame)) => {
            assert_eq!(frame.raw_id(), 0x123);
            assert!(!frame.is_extended());
            assert_eq!(frame.dlc(), 0);
        }
        other => panic!("unexpected call {other:?}"),
    }
}

#[test]
fn test_bus_control_commands() {
    let dispatcher = Dispatcher::default();
    let mut controller = RecordingController::default();

    assert_response!(dispatcher, controller, b"S6\r", b"\r");
    assert_eq!(controller.last, Some(Call::Setup(Bitrate::Kbps500)));

    assert_response!(dispatcher, controller, b"s4014\r", b"\r");
    assert_eq!(controller.last, Some(Call::BitTiming(0x4014)));

    assert_response!(dispatcher, controller, b"O\r", b"\r");
    assert_eq!(controller.last, Some(Call::Open(BusMode::Normal)));

    assert_response!(dispatcher, controller, b"L\r", b"\r");
    assert_eq!(controller.last, Some(Call::Open(BusMode::ListenOnly)));

    assert_response!(dispatcher, controller, b"C\r", b"\r");
    assert_eq!(controller.last, Some(Call::Close));
    assert_eq!(controller.calls, 5);
}

#[test]
fn test_configuration_toggles() {
    let dispatcher = Dispatcher::default();
    let mut controller = RecordingController::default();

    assert_response!(dispatcher, controller, b"X1\r", b"\r");
    assert_eq!(controller.last, Some(Call::Configure(Setting::Timestamp(true))));

    assert_response!(dispatcher, controller, b"M00000123\r", b"\r");
    assert_eq!(
        controller.last,
        Some(Call::Configure(Setting::AcceptanceCode(0x123)))
    );

    assert_response!(dispatcher, controller, b"Q0\r", b"\r");
    assert_eq!(controller.last, Some(Call::Configure(Setting::FlowControl(false))));
}

#[test]
/// Toggles unsupported by the hardware still consume input and answer CR.
fn test_default_controller_methods() {
    let dispatcher = Dispatcher::default();
    let mut controller = MinimalController;

    for line in [&b"P\r"[..], b"A\r", b"W1\r", b"U3\r", b"Z1\r", b"mFFFFFFFF\r", b"s0014\r"] {
        assert_response!(dispatcher, controller, line, b"\r");
    }
    assert_response!(dispatcher, controller, b"F\r", b"F00\r");
}

#[test]
fn test_query_commands() {
    let dispatcher = Dispatcher::default();
    let mut controller = RecordingController {
        status: StatusFlags::empty().with(StatusFlags::BUS_ERROR),
        ..Default::default()
    };

    assert_response!(dispatcher, controller, b"F\r", b"F80\r");
    assert_response!(dispatcher, controller, b"V\r", b"V1013\r");
    assert_response!(dispatcher, controller, b"N\r", b"0042BEEF\r");
    assert_eq!(controller.calls, 0);

    let dispatcher = Dispatcher::new(DispatcherConfig::new().with_version(b"V0100"));
    assert_response!(dispatcher, controller, b"V\r", b"V0100\r");
}

//==================================================================================ERRORS
#[test]
/// A chunk without CR gets a bare CR and never reaches a handler.
fn test_incomplete_line() {
    for reporting in [ErrorReporting::Silent, ErrorReporting::Bell] {
        let dispatcher =
            Dispatcher::new(DispatcherConfig::new().with_error_reporting(reporting));
        let mut controller = RecordingController::default();

        assert_response!(dispatcher, controller, b"t1230", b"\r");
        assert_response!(dispatcher, controller, b"", b"\r");
        assert_eq!(controller.calls, 0);
    }
}

#[test]
fn test_silent_errors() {
    let dispatcher = Dispatcher::default();
    let mut controller = RecordingController::default();

    assert_response!(dispatcher, controller, b"x\r", b"\r");
    assert_response!(dispatcher, controller, b"\r", b"\r");
    assert_response!(dispatcher, controller, b"t8000\r", b"\r");
    assert_response!(dispatcher, controller, b"t12\r", b"\r");
    assert_response!(dispatcher, controller, b"S9\r", b"\r");
    assert_eq!(controller.calls, 0);

    controller.fail = true;
    assert_response!(dispatcher, controller, b"t1230\r", b"\r");
    assert_eq!(controller.calls, 1);
}

#[test]
fn test_bell_errors() {
    let dispatcher =
        Dispatcher::new(DispatcherConfig::new().with_error_reporting(ErrorReporting::Bell));
    let mut controller = RecordingController::default();

    assert_response!(dispatcher, controller, b"x\r", &[BELL]);
    assert_response!(dispatcher, controller, b"t1239\r", &[BELL]);
    assert_response!(dispatcher, controller, b"S\r", &[BELL]);
    assert_response!(dispatcher, controller, b"O\r", b"\r");

    controller.fail = true;
    assert_response!(dispatcher, controller, b"O\r", &[BELL]);
}

#[test]
fn test_handle_line_error_kinds() {
    let dispatcher = Dispatcher::default();
    let mut controller = RecordingController::default();
    let mut buffer = [0u8; 8];
    let mut kind = |line: &[u8]| {
        let mut writer = HexWriter::new(&mut buffer);
        dispatcher
            .handle_line(&mut controller, line, &mut writer)
            .unwrap_err()
            .kind()
    };

    assert_eq!(kind(b"t123"), ErrorKind::IncompleteLine);
    assert_eq!(kind(b"?\r"), ErrorKind::UnknownCommand);
    assert_eq!(kind(b"tXYZ0\r"), ErrorKind::MalformedFrame);
    assert_eq!(kind(b"T0001\r"), ErrorKind::TruncatedFrame);
    assert_eq!(kind(b"X7\r"), ErrorKind::InvalidArgument);
}

#[test]
/// A reply larger than the response buffer is replaced by the terminator.
fn test_response_overflow() {
    let dispatcher = Dispatcher::default();
    let mut controller = RecordingController::default();

    let mut response = [0u8; 4];
    assert_eq!(dispatcher.dispatch(&mut controller, b"N\r", &mut response), 1);
    assert_eq!(response[0], CR);

    // Reply fits but the terminator does not.
    let mut response = [0u8; 5];
    assert_eq!(dispatcher.dispatch(&mut controller, b"V\r", &mut response), 1);
    assert_eq!(response[0], CR);

    let mut response = [0u8; 0];
    assert_eq!(dispatcher.dispatch(&mut controller, b"O\r", &mut response), 0);
}

#[test]
/// The same line twice yields the same response.
fn test_dispatch_idempotent() {
    let dispatcher = Dispatcher::default();
    let mut controller = RecordingController::default();

    let first = run(&dispatcher, &mut controller, b"t12328AB1\r");
    let second = run(&dispatcher, &mut controller, b"t12328AB1\r");
    assert_eq!(first.1, second.1);
    assert_eq!(first.0[..first.1], second.0[..second.1]);
    assert_eq!(controller.calls, 2);
}
