//! Error set that can occur while generating code during the build step.
use std::env::VarError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the build script (JSON parsing, validation, code generation).
pub(crate) enum BuildError {
    /// Failed to read the `OUT_DIR` environment variable.
    #[error("[MESSAGE]:OUT_DIR error. [ERROR]:{source}")]
    OutDirErr {
        #[source]
        source: VarError,
    },

    /// Failure while parsing the manifest.
    #[error("[MESSAGE]:Invalid JSON format [Error]:{0:?}")]
    ParseJson(#[from] serde_json::Error),

    /// Unable to read a file from disk.
    #[error("[MESSAGE]:Failed to read file [PATH]:{path} [ERROR]:{source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the generated code to disk.
    #[error("[MESSAGE]:Failed to write file [PATH]:{path} [ERROR]:{source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Formatting error while writing generated code.
    #[error("[MESSAGE]:Failed to display writeln! macro [ERROR]:{source}")]
    WritelnErr {
        #[from]
        source: std::fmt::Error,
    },

    /// The command field is not a single printable ASCII character.
    #[error("[MESSAGE]:Invalid command character [COMMAND]:{command:?}")]
    InvalidCommandChar { command: String },

    /// The kind does not name a `CommandKind` variant.
    #[error("[MESSAGE]:Unknown command kind [COMMAND]:{command:?} [KIND]:{kind}")]
    UnknownKind { command: String, kind: String },

    /// Two entries share the same command character.
    #[error("[MESSAGE]:Duplicate command [COMMAND]:{command:?}")]
    DuplicateCommand { command: char },
}
