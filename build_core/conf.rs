//! Paths and constants used during build-time code generation.
//==================================================================================CONF
/// Manifest listing the commands compiled into the dispatch table.
pub(crate) const COMMAND_MANIFEST_PATH: &str = "build_core/var/command_table.json";
/// Environment variable pointing at an alternate manifest.
pub(crate) const COMMAND_MANIFEST_ENV: &str = "SLCAN_COMMAND_TABLE_PATH";
/// Generated table file name (written to `OUT_DIR`).
pub(crate) const OUT_DIR_COMMAND_FILE_NAME: &str = "generated_commands.rs";
