use serde::Deserialize;

//==================================================================================MANIFEST
// Structures to deserialize `command_table.json`.
// The manifest acts as a filter: a command missing from it is unknown to the firmware.
#[derive(Debug, Deserialize)]
/// Manifest describing the command table to generate.
pub(crate) struct CommandManifest {
    /// Free-form protocol label, only echoed in the generated file header.
    #[serde(default)]
    pub(crate) protocol: Option<String>,
    pub(crate) commands: Vec<CommandSpec>,
}

#[derive(Debug, Deserialize)]
/// Entry in the command list to generate.
pub(crate) struct CommandSpec {
    /// Single ASCII character selecting the command.
    pub(crate) command: String,
    /// Name of a `CommandKind` variant.
    pub(crate) kind: String,
    /// Description copied into the table.
    #[serde(default)]
    pub(crate) summary: String,
}
