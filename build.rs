//! Cargo build script: generates the static SLCAN command table.

// Re-export the core module from src/core.rs so build_core can reuse it
#[path = "src/core.rs"]
mod core;

mod build_core;
use crate::build_core::{
    conf::*, domain::CommandManifest, errors::BuildError, gen_commands::run_command_gen,
};

use std::fs;
use std::path::PathBuf;

// The command set is declared in a JSON manifest rather than in code, so a
// firmware build for hardware without, say, filter support can drop those
// commands and have them answered as unknown.

//==================================================================================MAIN
fn main() -> Result<(), BuildError> {
    // Tell Cargo to rerun this script whenever one of these files changes.
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/core.rs");
    println!("cargo:rerun-if-changed={COMMAND_MANIFEST_PATH}");
    println!("cargo:rerun-if-env-changed={COMMAND_MANIFEST_ENV}");

    // 1. Locate the manifest.
    // Priority order:
    //   1. SLCAN_COMMAND_TABLE_PATH environment variable (absolute or relative path)
    //   2. Default manifest shipped with the crate
    let default_manifest_path = PathBuf::from(COMMAND_MANIFEST_PATH);
    let user_manifest_path = std::env::var(COMMAND_MANIFEST_ENV).ok().map(PathBuf::from);

    let manifest_path = match user_manifest_path {
        Some(path) if path.exists() => {
            println!("cargo:warning=Using custom command table from {:?}", path);
            println!("cargo:rerun-if-changed={}", path.display());
            path
        }
        Some(path) => {
            println!(
                "cargo:warning=Custom command table path specified but file not found: {:?}",
                path
            );
            println!("cargo:warning=Falling back to the default command table");
            default_manifest_path
        }
        None => default_manifest_path,
    };

    // 2. Parse and validate.
    let manifest_string = fs::read_to_string(&manifest_path).map_err(|e| BuildError::ReadFile {
        path: manifest_path.clone(),
        source: e,
    })?;
    let manifest: CommandManifest = serde_json::from_str(&manifest_string)?;
    let table_code = run_command_gen(&manifest)?;

    // 3. Write the generated code into `OUT_DIR`.
    // The `include!` in `src/protocol/slcan/command/mod.rs` pulls it in at compile time.
    let out_dir_str = std::env::var("OUT_DIR").map_err(|e| BuildError::OutDirErr { source: e })?;
    let table_file_path = PathBuf::from(out_dir_str).join(OUT_DIR_COMMAND_FILE_NAME);

    fs::write(&table_file_path, &table_code).map_err(|e| BuildError::WriteFile {
        path: table_file_path,
        source: e,
    })?;

    Ok(())
}
