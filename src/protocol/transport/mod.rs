//! CAN side of the bridge: frame and identifier model, bit-rate presets,
//! controller-facing value types, and collaborator traits.
//!
//! ## Timing Constants

pub mod bitrate;
pub mod can_frame;
pub mod can_id;
pub mod settings;
pub mod traits;

/// Upper bound for handing one encoded frame to the host (ms).
///
/// Used by the queued relay only. A host that stops polling its endpoint
/// (terminal closed, cable pulled) would otherwise stall the queue forever;
/// after the timeout the frame is dropped and the relay moves on.
///
/// # Timeout rationale
///
/// A full-speed USB bulk endpoint is polled every 1 ms frame, and a
/// 27-byte SLCAN line always fits in one 64-byte packet. 100 ms leaves a
/// wide margin for hosts under load.
pub const HOST_SEND_TIMEOUT_MS: u32 = 100;
