//! System clipboard access.
//!
//! Writing goes through the [`ClipboardWriter`] trait so the CLI can be exercised with a
//! fake writer. [`SystemClipboard`] shells out to the platform tool:
//! - macOS: `pbcopy`
//! - Linux: `wl-copy` on Wayland, otherwise `xclip` then `xsel`
//! - Windows: `clip`

use crate::error::{CopasError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

pub trait ClipboardWriter {
    fn write(&self, text: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write(&self, text: &str) -> Result<()> {
        let candidates = candidates();
        if candidates.is_empty() {
            return Err(CopasError::Clipboard(
                "not supported on this platform".to_string(),
            ));
        }

        let mut last_err = None;
        for (program, args) in candidates {
            match pipe_to(program, args, text) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    log::debug!("clipboard tool {} failed: {}", program, e);
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| CopasError::Clipboard("no clipboard tool".to_string())))
    }
}

#[cfg(target_os = "macos")]
fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
    vec![("pbcopy", &[])]
}

#[cfg(target_os = "linux")]
fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
    let mut tools: Vec<(&'static str, &'static [&'static str])> = Vec::new();
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        tools.push(("wl-copy", &[]));
    }
    tools.push(("xclip", &["-selection", "clipboard"]));
    tools.push(("xsel", &["--clipboard", "--input"]));
    tools
}

#[cfg(target_os = "windows")]
fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
    vec![("clip", &[])]
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
    Vec::new()
}

/// Spawns `program`, writes `text` to its stdin and waits for a clean exit.
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| CopasError::Clipboard(format!("failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| CopasError::Clipboard(format!("failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| CopasError::Clipboard(format!("failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopasError::Clipboard(format!("{} exited with {}", program, status)))
    }
}
