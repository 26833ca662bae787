//! Command dispatcher: one received chunk in, one response out.
//!
//! Each call treats its input as exactly one command line:
//!
//! 1. A line whose last byte is not CR is answered with a bare CR and
//!    never reaches a handler.
//! 2. The first byte selects a row of the command table.
//! 3. The handler parses its arguments, calls the controller, and may
//!    append reply bytes (`F`, `V`, `N`).
//! 4. A CR is appended on success. Failures are answered according to
//!    [`ErrorReporting`].
//!
//! The dispatcher keeps no state between lines: the same line always gets
//! the same response.
use crate::core::{BELL, CR};
use crate::error::{DispatchError, ErrorKind};
use crate::infra::codec::hex::HexWriter;
use crate::protocol::slcan::command::{lookup, Command};
use crate::protocol::transport::traits::can_controller::CanController;

/// Hardware/software version pair answered to `V`.
pub const DEFAULT_VERSION: &[u8] = b"V1013";

//==================================================================================CONFIG
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// What the host sees when a complete line fails.
pub enum ErrorReporting {
    /// Answer with CR, exactly like a success. Hosts cannot tell a dropped
    /// frame from a sent one.
    #[default]
    Silent,
    /// Answer with BEL (`0x07`), discarding any partial reply.
    Bell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Runtime settings of the dispatcher.
pub struct DispatcherConfig {
    /// Bytes returned by `V`, without the terminator.
    pub version: &'static [u8],
    /// Error answer policy.
    pub error_reporting: ErrorReporting,
}

impl DispatcherConfig {
    pub const fn new() -> Self {
        Self {
            version: DEFAULT_VERSION,
            error_reporting: ErrorReporting::Silent,
        }
    }

    pub const fn with_version(mut self, version: &'static [u8]) -> Self {
        self.version = version;
        self
    }

    pub const fn with_error_reporting(mut self, error_reporting: ErrorReporting) -> Self {
        self.error_reporting = error_reporting;
        self
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self::new()
    }
}

//==================================================================================DISPATCHER
/// Routes command lines to a [`CanController`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    config: DispatcherConfig,
}

impl Dispatcher {
    pub const fn new(config: DispatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Process one received line and write the full response, terminator
    /// included, into `response`. Returns the number of valid bytes.
    ///
    /// Never fails: every outcome maps to a response. Only an empty
    /// `response` buffer yields `0`.
    pub fn dispatch<C: CanController>(
        &self,
        controller: &mut C,
        line: &[u8],
        response: &mut [u8],
    ) -> usize {
        let mut writer = HexWriter::new(response);
        let outcome = self
            .handle_line(controller, line, &mut writer)
            .and_then(|()| writer.push_byte(CR).map_err(DispatchError::from));

        if let Err(err) = outcome {
            #[cfg(feature = "defmt")]
            log_failure(line, &err);

            let terminator = self.terminator_for(err.kind());
            writer.truncate(0);
            if writer.push_byte(terminator).is_err() {
                return 0;
            }
        }
        writer.len()
    }

    /// Run the handler for `line`, leaving its reply (without terminator)
    /// in `writer`.
    pub fn handle_line<C: CanController>(
        &self,
        controller: &mut C,
        line: &[u8],
        writer: &mut HexWriter<'_>,
    ) -> Result<(), DispatchError<C::Error>> {
        if line.last() != Some(&CR) {
            return Err(DispatchError::IncompleteLine);
        }
        let command_byte = line[0];
        let entry = lookup(command_byte).ok_or(DispatchError::UnknownCommand {
            command: command_byte,
        })?;

        #[cfg(feature = "defmt")]
        defmt::trace!("slcan: command {=u8:#x} ({})", command_byte, entry.summary);

        let command = Command::parse(entry.kind, line)?;
        self.execute(controller, command, writer)
    }

    fn execute<C: CanController>(
        &self,
        controller: &mut C,
        command: Command,
        writer: &mut HexWriter<'_>,
    ) -> Result<(), DispatchError<C::Error>> {
        match command {
            Command::Setup(bitrate) => controller.setup(bitrate).map_err(DispatchError::Controller),
            Command::SetBitTiming(btr) => controller
                .set_bit_timing(btr)
                .map_err(DispatchError::Controller),
            Command::Open(mode) => controller.open(mode).map_err(DispatchError::Controller),
            Command::Close => controller.close().map_err(DispatchError::Controller),
            Command::Transmit(frame) => controller
                .transmit(&frame)
                .map_err(DispatchError::Controller),
            Command::Configure(setting) => controller
                .configure(setting)
                .map_err(DispatchError::Controller),
            Command::ReadStatus => {
                let flags = controller.status_flags().map_err(DispatchError::Controller)?;
                writer.push_byte(b'F')?;
                writer.push_u8(flags.bits())?;
                Ok(())
            }
            Command::Version => Ok(writer.push_slice(self.config.version)?),
            Command::SerialNumber => {
                let serial = controller.serial_number();
                Ok(writer.push_slice(serial.as_bytes())?)
            }
        }
    }

    /// Byte answering a failed line.
    fn terminator_for(&self, kind: ErrorKind) -> u8 {
        match (self.config.error_reporting, kind) {
            (_, ErrorKind::IncompleteLine) => CR,
            (ErrorReporting::Silent, _) => CR,
            (ErrorReporting::Bell, _) => BELL,
        }
    }
}

#[cfg(feature = "defmt")]
fn log_failure<E: core::fmt::Debug>(line: &[u8], err: &DispatchError<E>) {
    match err {
        DispatchError::IncompleteLine => {
            defmt::debug!("slcan: incomplete line ({} bytes)", line.len())
        }
        DispatchError::UnknownCommand { command } => {
            defmt::warn!("slcan: unknown command {=u8:#x}", *command)
        }
        DispatchError::Controller(_) => {
            defmt::warn!("slcan: controller rejected {=u8:#x}", line[0])
        }
        _ => defmt::warn!("slcan: dropped {=u8:#x} line: {}", line[0], err.kind()),
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
