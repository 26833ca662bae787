//! SLCAN command layer: the build-time command table, argument parsing,
//! and the dispatcher that turns one received line into controller calls
//! and a response.
pub mod command;
pub mod dispatcher;
