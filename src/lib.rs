//! `slcan-bridge` library: the SLCAN (serial-line CAN, Lawicel) codec and
//! command dispatcher of a USB-to-CAN adapter, in a `no_std`,
//! allocation-free form. The crate exposes the infrastructure modules
//! (hex codec, frame encoder/decoder), the protocol logic (command table,
//! dispatcher, bridge driver), and the collaborator traits a firmware
//! implements for its CAN controller and host transport.
#![no_std]
//==================================================================================
/// Data contract shared by the build script and the dispatcher.
pub mod core;
/// Domain and low-level errors (frame construction, hex decoding, command
/// dispatch, host link plumbing).
pub mod error;
/// SLCAN text codec.
pub mod infra;
/// CAN transport model, SLCAN command layer, and bridge driver.
pub mod protocol;
//==================================================================================
