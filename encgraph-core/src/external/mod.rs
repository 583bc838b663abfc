// ============================================================================
// encgraph-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with External CLI Tools and File System
//
// This module encapsulates interactions with ffprobe, ffmpeg and the file
// system. Each dependency sits behind a trait so the classifier and the
// quality scorer can be exercised with fakes.
//
// KEY COMPONENTS:
// - DimensionProbe / FfprobeDimensionProbe: first-frame width and height
// - FfmpegSpawner / SidecarSpawner: ffmpeg processes via ffmpeg-sidecar
// - FileMetadataProvider / StdFsMetadataProvider: file sizes on disk
// - check_dependency: PATH lookup for required tools

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult, command_start_error};

// ---- Standard library imports ----
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// Traits and implementations for probing media dimensions with ffprobe
pub mod ffprobe_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg_executor::{FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner};
pub use ffprobe_executor::{Dimensions, DimensionProbe, FfprobeDimensionProbe, parse_dimensions};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that a required external command can be started.
///
/// Runs `<cmd_name> -version` with output discarded. Only a failure to start
/// the process counts; the exit status is ignored.
///
/// # Returns
///
/// * `Ok(())` - The command was found and started
/// * `Err(CoreError::DependencyNotFound)` - The command is not in PATH
/// * `Err(CoreError::CommandStart)` - The command exists but failed to start
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd_name);
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", cmd_name, e);
            Err(command_start_error(cmd_name, e))
        }
    }
}

// ============================================================================
// FILE METADATA ACCESS
// ============================================================================

/// Abstraction over file size lookups.
///
/// # Examples
///
/// ```rust
/// use encgraph_core::external::FileMetadataProvider;
/// use encgraph_core::CoreResult;
/// use std::path::Path;
///
/// struct FixedSize;
///
/// impl FileMetadataProvider for FixedSize {
///     fn get_size(&self, _path: &Path) -> CoreResult<u64> {
///         Ok(1_000)
///     }
/// }
///
/// assert_eq!(FixedSize.get_size(Path::new("/fake")).unwrap(), 1_000);
/// ```
pub trait FileMetadataProvider {
    /// Size of the file at `path` in bytes.
    fn get_size(&self, path: &Path) -> CoreResult<u64>;
}

/// FileMetadataProvider backed by `std::fs::metadata`.
#[derive(Debug, Clone, Default)]
pub struct StdFsMetadataProvider;

impl FileMetadataProvider for StdFsMetadataProvider {
    fn get_size(&self, path: &Path) -> CoreResult<u64> {
        std::fs::metadata(path).map(|m| m.len()).map_err(|e| {
            CoreError::PathError(format!("Failed to stat '{}': {}", path.display(), e))
        })
    }
}
