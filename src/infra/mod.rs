//! Low-level infrastructure: the SLCAN text codec.
pub mod codec;
