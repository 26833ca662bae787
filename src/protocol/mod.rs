//! Protocol side of the bridge: CAN transport model and collaborator
//! traits, the SLCAN command layer, and the bridge driver tying them to
//! the host link.
pub mod bridge;
pub mod slcan;
pub mod transport;
