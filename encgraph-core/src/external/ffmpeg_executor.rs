// ============================================================================
// encgraph-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: FFmpeg Process Management and Abstraction
//
// Abstractions for spawning ffmpeg and consuming its events. The quality
// scorer builds an FfmpegCommand and hands it to an FfmpegSpawner, so tests
// can substitute a spawner that never starts a real process.
//
// KEY COMPONENTS:
// - FfmpegProcess: Trait representing an active FFmpeg process
// - FfmpegSpawner: Trait for creating new FFmpeg processes
// - SidecarSpawner: Concrete implementation using ffmpeg-sidecar

use crate::error::{CoreResult, command_failed_error, command_start_error, command_wait_error};
use ffmpeg_sidecar::child::FfmpegChild as SidecarChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::process::ExitStatus;

/// A running ffmpeg invocation whose events can be drained and awaited.
pub trait FfmpegProcess {
    /// Feeds every event to `handler`, stopping at the first error it returns.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Blocks until ffmpeg exits.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Starts ffmpeg for a prepared command. `VmafScorer` is generic over this.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

pub struct SidecarProcess(SidecarChild);

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let mut events = self.0.iter().map_err(|e| {
            command_failed_error("ffmpeg (events)", ExitStatus::default(), e.to_string())
        })?;
        events.try_for_each(handler)
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0.wait().map_err(|e| command_wait_error("ffmpeg", e))
    }
}

/// Spawns the ffmpeg binary that ffmpeg-sidecar resolves from PATH.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| command_start_error("ffmpeg", e))
    }
}

/// Runs a command to completion, collecting error output.
///
/// Error-level log lines are kept so a failed run can report why it failed.
/// A non-zero exit status becomes `CoreError::CommandFailed`.
pub fn run_to_completion<S: FfmpegSpawner>(
    spawner: &S,
    cmd: FfmpegCommand,
    context: &str,
) -> CoreResult<()> {
    log::debug!("Running ffmpeg ({}): {:?}", context, cmd);
    let mut process = spawner.spawn(cmd)?;

    let mut errors: Vec<String> = Vec::new();
    process.handle_events(|event| {
        match event {
            FfmpegEvent::Error(msg)
            | FfmpegEvent::Log(LogLevel::Error, msg)
            | FfmpegEvent::Log(LogLevel::Fatal, msg) => {
                log::debug!("ffmpeg ({}) error output: {}", context, msg);
                errors.push(msg);
            }
            FfmpegEvent::Log(_, msg) => log::trace!("ffmpeg ({}): {}", context, msg),
            _ => {}
        }
        Ok(())
    })?;

    let status = process.wait()?;
    if !status.success() {
        log::error!("ffmpeg ({}) failed: {}", context, status);
        return Err(command_failed_error(
            format!("ffmpeg ({context})"),
            status,
            errors.join("\n"),
        ));
    }
    Ok(())
}
