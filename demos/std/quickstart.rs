//! # Quickstart Example
//!
//! Minimal example demonstrating the basics of slcan-bridge:
//! - Decode and encode SLCAN frame lines
//! - Run the command dispatcher against an in-memory CAN controller
//! - Relay a received frame through the bridge driver
//!
//! This example uses `std` for a quick trial run.
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use slcan_bridge::infra::codec::engine::{decode, encode};
use slcan_bridge::protocol::bridge::Bridge;
use slcan_bridge::protocol::slcan::dispatcher::{Dispatcher, DispatcherConfig, ErrorReporting};
use slcan_bridge::protocol::transport::bitrate::Bitrate;
use slcan_bridge::protocol::transport::can_frame::CanFrame;
use slcan_bridge::protocol::transport::settings::{BusMode, SerialNumber};
use slcan_bridge::protocol::transport::traits::can_controller::CanController;
use slcan_bridge::protocol::transport::traits::host_link::HostLink;

/// Controller printing what real hardware would do.
struct ConsoleController {
    open: bool,
}

impl CanController for ConsoleController {
    type Error = &'static str;

    fn setup(&mut self, bitrate: Bitrate) -> Result<(), Self::Error> {
        println!("   [can] bit-rate {} bit/s", bitrate.bits_per_second());
        Ok(())
    }

    fn open(&mut self, mode: BusMode) -> Result<(), Self::Error> {
        println!("   [can] open ({:?})", mode);
        self.open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        println!("   [can] close");
        self.open = false;
        Ok(())
    }

    fn transmit(&mut self, frame: &CanFrame) -> Result<(), Self::Error> {
        if !self.open {
            return Err("bus closed");
        }
        println!(
            "   [can] tx id={:#X} dlc={} data={:02X?}",
            frame.raw_id(),
            frame.dlc(),
            frame.data()
        );
        Ok(())
    }

    fn serial_number(&mut self) -> SerialNumber {
        SerialNumber::from_unique_id(0x2041_3A7F)
    }
}

/// Host link printing the bytes sent back over USB.
struct ConsoleHost;

impl HostLink for ConsoleHost {
    type Error = ();

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        println!("   [usb] -> {:?}", String::from_utf8_lossy(bytes));
        Ok(())
    }
}

fn main() {
    println!("=== slcan-bridge Quickstart ===\n");

    // ======================================================================
    // 1. Codec
    // ======================================================================
    println!("1. Decoding and encoding frame lines");

    match decode(b"t12328AB1\r") {
        Ok(frame) => println!("   t12328AB1 -> {:?}", frame),
        Err(e) => eprintln!("   Decode error: {:?}", e),
    }
    match CanFrame::from_raw(0x1ABCDE, true, false, 3, &[0x01, 0x02, 0x03]) {
        Ok(frame) => println!(
            "   extended frame -> {:?}\n",
            String::from_utf8_lossy(encode(&frame).as_bytes())
        ),
        Err(e) => eprintln!("   Frame error: {:?}\n", e),
    }

    // ======================================================================
    // 2. Host session through the bridge driver
    // ======================================================================
    println!("2. Host session");

    let dispatcher =
        Dispatcher::new(DispatcherConfig::new().with_error_reporting(ErrorReporting::Bell));
    let mut bridge = Bridge::new(dispatcher, ConsoleController { open: false }, ConsoleHost);

    for line in ["V\r", "N\r", "S6\r", "t1230\r", "O\r", "t12328AB1\r", "F\r", "q\r", "C\r"] {
        println!("   [usb] <- {:?}", line);
        if let Err(e) = bridge.on_host_chunk(line.as_bytes()) {
            eprintln!("   Bridge error: {:?}", e);
        }
    }

    // ======================================================================
    // 3. Frame received from the bus
    // ======================================================================
    println!("\n3. Frame received from the bus");

    if let Err(e) = bridge.on_raw_frame_received(0x7E8, false, false, 2, &[0x41, 0x0D]) {
        eprintln!("   Bridge error: {:?}", e);
    }

    println!("\n=== Done ===");
}
