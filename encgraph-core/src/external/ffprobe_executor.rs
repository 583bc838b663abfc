//! ffprobe integration for reference dimension probing.
//!
//! Dimensions come from the first video frame of a reference file, requested
//! as headerless CSV so the output is a single `width,height` line.

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use std::fmt;
use std::path::Path;
use std::process::Command;

/// Pixel dimensions of a media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Something that can report the dimensions of a media file.
pub trait DimensionProbe {
    fn probe_dimensions(&self, path: &Path) -> CoreResult<Dimensions>;
}

/// DimensionProbe that shells out to `ffprobe`.
#[derive(Debug, Clone)]
pub struct FfprobeDimensionProbe {
    program: String,
}

impl Default for FfprobeDimensionProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl FfprobeDimensionProbe {
    pub fn new() -> Self {
        Self {
            program: "ffprobe".to_string(),
        }
    }

    /// Uses a specific ffprobe binary instead of the one in PATH.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["-v", "quiet", "-of", "csv=p=0"])
            .args(["-select_streams", "v:0"])
            .args(["-read_intervals", "%+#1"])
            .args(["-show_entries", "frame=width,height"])
            .arg("-i")
            .arg(path);
        cmd
    }
}

impl DimensionProbe for FfprobeDimensionProbe {
    fn probe_dimensions(&self, path: &Path) -> CoreResult<Dimensions> {
        let mut cmd = self.command(path);
        log::debug!("Running ffprobe for dimensions: {:?}", cmd);

        let output = cmd
            .output()
            .map_err(|e| command_start_error(format!("{} (dimensions)", self.program), e))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            log::error!("ffprobe failed for {}: {}", path.display(), output.status);
            return Err(command_failed_error(
                format!("{} (dimensions)", self.program),
                output.status,
                stderr,
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_dimensions(&stdout).map_err(|e| match e {
            CoreError::DimensionParse(msg) => {
                CoreError::DimensionParse(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }
}

/// Parses ffprobe's `width,height` output.
///
/// Only the first non-empty line is considered. It must hold exactly two
/// comma-separated non-negative integers.
pub fn parse_dimensions(output: &str) -> CoreResult<Dimensions> {
    let line = output
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or_else(|| CoreError::DimensionParse("empty probe output".to_string()))?;

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [width, height] = fields.as_slice() else {
        return Err(CoreError::DimensionParse(format!(
            "expected 'width,height', got '{line}'"
        )));
    };

    let parse = |field: &str, what: &str| {
        field.parse::<u32>().map_err(|_| {
            CoreError::DimensionParse(format!("invalid {what} '{field}' in '{line}'"))
        })
    };
    Ok(Dimensions::new(parse(*width, "width")?, parse(*height, "height")?))
}
