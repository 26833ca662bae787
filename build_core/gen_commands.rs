//! Generate the static command table from the manifest entries.
use super::domain::*;
use super::errors::*;
use crate::core::CommandKind;

use std::fmt::Write;

/// Validate every manifest entry and emit the `COMMAND_TABLE` source.
pub(crate) fn run_command_gen(manifest: &CommandManifest) -> Result<String, BuildError> {
    let mut seen: Vec<char> = Vec::with_capacity(manifest.commands.len());
    let mut rows = String::new();

    for entry in &manifest.commands {
        let command = parse_command_char(&entry.command)?;
        if seen.contains(&command) {
            return Err(BuildError::DuplicateCommand { command });
        }
        seen.push(command);

        let kind = CommandKind::from_name(&entry.kind).ok_or_else(|| BuildError::UnknownKind {
            command: entry.command.clone(),
            kind: entry.kind.clone(),
        })?;

        writeln!(
            rows,
            "    crate::core::CommandEntry {{ command: b'{}', kind: crate::core::CommandKind::{}, summary: {:?} }},",
            command.escape_default(),
            kind.name(),
            entry.summary
        )?;
    }

    let mut buffer = String::new();
    writeln!(buffer, "// @generated by build.rs from the command manifest. Do not edit.")?;
    if let Some(protocol) = &manifest.protocol {
        writeln!(buffer, "// Protocol: {protocol}")?;
    }
    writeln!(
        buffer,
        "/// Static dispatch table: one row per accepted command character."
    )?;
    writeln!(
        buffer,
        "pub static COMMAND_TABLE: [crate::core::CommandEntry; {}] = [",
        seen.len()
    )?;
    buffer.push_str(&rows);
    writeln!(buffer, "];")?;

    Ok(buffer)
}

/// A command is exactly one printable ASCII character, never CR or BEL.
fn parse_command_char(raw: &str) -> Result<char, BuildError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_graphic() => Ok(c),
        _ => Err(BuildError::InvalidCommandChar {
            command: raw.to_string(),
        }),
    }
}
