//! Collaborator seams of the bridge: the CAN controller driver, the host
//! byte-stream transport, and the timer used by the queued relay.
pub mod bridge_timer;
pub mod can_controller;
pub mod host_link;
