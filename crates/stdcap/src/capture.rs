// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The capture window and its state machine.

use crate::channel::Channel;
use crate::error::CaptureError;
use crate::options::CaptureOptions;
use crate::redirect::Redirect;
use std::fmt;
use std::fs::File;
use std::os::unix::fs::FileExt;
use tracing::{debug, error, warn};

const READ_CHUNK: usize = 8 * 1024;

/// Lifecycle of an [`OutputCapture`].
///
/// `Inactive -> Capturing -> Restored`. `Restored` is terminal: a capture is
/// never reused, build a new one instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureState {
    Inactive,
    Capturing,
    Restored,
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CaptureState::Inactive => "inactive",
            CaptureState::Capturing => "capturing",
            CaptureState::Restored => "restored",
        })
    }
}

/// Redirects a standard stream into a temporary buffer for a bounded window.
///
/// Only one capture may be active per channel in a process. A second
/// `begin()` on the same channel fails with [`CaptureError::AlreadyActive`]
/// instead of stacking.
///
/// Calling `end()` again after the window has closed, or on a capture that
/// never began, is a no-op. Dropping a capture while it is still capturing
/// restores the stream, which keeps the window closed on early returns and
/// panics alike.
#[derive(Debug)]
pub struct OutputCapture {
    options: CaptureOptions,
    state: CaptureState,
    buffer: Option<File>,
    redirect: Option<Redirect>,
}

impl OutputCapture {
    pub fn new(options: CaptureOptions) -> Self {
        Self {
            options,
            state: CaptureState::Inactive,
            buffer: None,
            redirect: None,
        }
    }

    pub fn stdout() -> Self {
        Self::new(CaptureOptions::stdout())
    }

    pub fn stderr() -> Self {
        Self::new(CaptureOptions::stderr())
    }

    pub fn channel(&self) -> Channel {
        self.options.channel
    }

    pub fn options(&self) -> &CaptureOptions {
        &self.options
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_capturing(&self) -> bool {
        self.state == CaptureState::Capturing
    }

    /// Record the current destination and install an empty buffer.
    pub fn begin(&mut self) -> Result<(), CaptureError> {
        if self.state != CaptureState::Inactive {
            return Err(CaptureError::NotReusable(self.state));
        }

        let channel = self.channel();
        let buffer = tempfile::tempfile().map_err(CaptureError::Buffer)?;
        let redirect = Redirect::install(channel, &buffer)?;

        self.buffer = Some(buffer);
        self.redirect = Some(redirect);
        self.state = CaptureState::Capturing;
        debug!(%channel, "capture window opened");
        Ok(())
    }

    /// Restore the destination recorded by `begin()`.
    ///
    /// On [`CaptureError::Restore`] the capture stays in `Capturing` and the
    /// error must be propagated.
    pub fn end(&mut self) -> Result<(), CaptureError> {
        if self.state != CaptureState::Capturing {
            return Ok(());
        }
        let channel = self.channel();

        if let Some(redirect) = self.redirect.as_mut() {
            if let Err(e) = redirect.restore() {
                error!(%channel, error = %e, "capture window could not be closed");
                return Err(e);
            }
        }
        self.redirect = None;
        self.state = CaptureState::Restored;

        let captured = self.bytes();
        debug!(%channel, bytes = captured.len(), "capture window closed");

        if self.options.replay && !captured.is_empty() {
            channel
                .write_all(&captured)
                .map_err(|source| CaptureError::Replay { channel, source })?;
        }
        Ok(())
    }

    /// Text captured so far, lossily decoded as UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }

    /// Raw bytes captured so far.
    ///
    /// An unreadable buffer is logged and yields whatever was read before
    /// the failure.
    pub fn bytes(&self) -> Vec<u8> {
        let Some(buffer) = self.buffer.as_ref() else {
            return Vec::new();
        };
        let channel = self.channel();

        if self.is_capturing() {
            if let Err(e) = channel.flush() {
                warn!(%channel, error = %e, "failed to flush before reading capture");
            }
        }

        let mut captured = Vec::new();
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            match buffer.read_at(&mut chunk, captured.len() as u64) {
                Ok(0) => break,
                Ok(n) => captured.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(%channel, error = %e, "failed to read capture buffer");
                    break;
                }
            }
        }
        captured
    }
}

impl Drop for OutputCapture {
    // A redirection that outlives its capture swallows the rest of the
    // process's output, so failing to restore here is fatal.
    #[allow(clippy::panic)]
    fn drop(&mut self) {
        if self.state != CaptureState::Capturing {
            return;
        }
        if let Some(redirect) = self.redirect.as_mut() {
            if let Err(e) = redirect.restore() {
                error!(channel = %self.options.channel, error = %e, "leaked output redirection");
                panic!("{e}");
            }
        }
        self.state = CaptureState::Restored;
    }
}

/// Run `body` inside a capture window and return its result with the text.
///
/// If `body` panics the stream is restored while unwinding.
pub fn with_capture<R>(
    options: CaptureOptions,
    body: impl FnOnce() -> R,
) -> Result<(R, String), CaptureError> {
    let mut capture = OutputCapture::new(options);
    capture.begin()?;
    let result = body();
    capture.end()?;
    Ok((result, capture.text()))
}

/// [`with_capture`] on stdout with default options.
pub fn capture_stdout<R>(body: impl FnOnce() -> R) -> Result<(R, String), CaptureError> {
    with_capture(CaptureOptions::stdout(), body)
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
