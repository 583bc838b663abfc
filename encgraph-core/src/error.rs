// ============================================================================
// encgraph-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the encgraph core library
//
// Every failure in a comparison run is fatal. Nothing here is recovered
// locally; errors travel up to the CLI, which prints them and exits non-zero.
//
// KEY COMPONENTS:
// - CoreError: I/O, parse, external tool and pipeline failures
// - CoreResult: Result alias used throughout the crate
// - Helper constructors for external command failures

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by the encgraph core library.
#[derive(Error, Debug)]
pub enum CoreError {
    // ---- I/O ----
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Path error: {0}")]
    PathError(String),

    // ---- Parsing ----
    #[error("Failed to parse probe dimensions: {0}")]
    DimensionParse(String),

    #[error("Failed to parse timing log: {0}")]
    TimingTableParse(String),

    #[error("Failed to parse VMAF log: {0}")]
    VmafParse(String),

    // ---- External tools ----
    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, io::Error),

    #[error("Command '{0}' failed with status {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Failed waiting for command '{0}': {1}")]
    CommandWait(String, io::Error),

    #[error("Required dependency '{0}' not found in PATH")]
    DependencyNotFound(String),

    // ---- Pipeline ----
    #[error("No encoded files found in {0}")]
    NoFilesFound(String),

    #[error("No quality score returned for asset {0}")]
    MissingScore(u64),

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for encgraph core operations.
pub type CoreResult<T> = Result<T, CoreError>;

pub fn command_start_error(tool: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(tool.into(), err)
}

pub fn command_failed_error(
    tool: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(tool.into(), status, stderr.into())
}

pub fn command_wait_error(tool: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(tool.into(), err)
}
