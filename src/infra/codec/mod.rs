//! SLCAN text codec: hex nibble cursors, the frame encoder/decoder, and the
//! traits exposing them on frame types.
pub mod engine;
pub mod hex;
pub mod traits;
