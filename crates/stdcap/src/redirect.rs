// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Descriptor-level redirection of a standard stream.

use crate::channel::Channel;
use crate::error::CaptureError;
use nix::fcntl::{fcntl, FcntlArg};
use nix::unistd::{close, dup2};
use parking_lot::Mutex;
use std::fs::File;
use std::os::fd::{AsRawFd, RawFd};
use tracing::warn;

/// Lowest descriptor number handed out for the saved original.
const SAVED_FD_FLOOR: RawFd = 3;

/// Channels that currently point at a capture buffer, by `Channel::index`.
static REDIRECTED: Mutex<[bool; 2]> = parking_lot::const_mutex([false; 2]);

/// Whether `channel` is currently redirected into a capture buffer.
pub fn is_redirected(channel: Channel) -> bool {
    REDIRECTED.lock()[channel.index()]
}

/// Handle on the original destination of a redirected channel.
///
/// Holds a close-on-exec duplicate of the stream's original descriptor.
/// `restore` puts it back and closes the duplicate; it succeeds at most once.
#[derive(Debug)]
pub(crate) struct Redirect {
    channel: Channel,
    saved: RawFd,
    restored: bool,
}

impl Redirect {
    /// Point `channel` at `buffer`, keeping a duplicate of the original.
    pub(crate) fn install(channel: Channel, buffer: &File) -> Result<Self, CaptureError> {
        let mut redirected = REDIRECTED.lock();
        if redirected[channel.index()] {
            return Err(CaptureError::AlreadyActive(channel));
        }

        channel
            .flush()
            .map_err(|source| CaptureError::Flush { channel, source })?;

        let target = channel.fd();
        let saved = fcntl(target, FcntlArg::F_DUPFD_CLOEXEC(SAVED_FD_FLOOR))
            .map_err(|source| CaptureError::Redirect { channel, source })?;

        if let Err(source) = dup2(buffer.as_raw_fd(), target) {
            if let Err(e) = close(saved) {
                warn!(%channel, fd = saved, error = %e, "failed to close saved descriptor");
            }
            return Err(CaptureError::Redirect { channel, source });
        }

        redirected[channel.index()] = true;
        Ok(Self {
            channel,
            saved,
            restored: false,
        })
    }

    /// Handle whose saved descriptor is `saved`, without redirecting anything.
    #[cfg(test)]
    pub(crate) fn with_saved_fd(channel: Channel, saved: RawFd) -> Self {
        Self {
            channel,
            saved,
            restored: false,
        }
    }

    /// Put the original destination back. No-op once it has succeeded.
    pub(crate) fn restore(&mut self) -> Result<(), CaptureError> {
        if self.restored {
            return Ok(());
        }
        let channel = self.channel;

        // Anything still sitting in the Rust buffer belongs to the window.
        if let Err(e) = channel.flush() {
            warn!(%channel, error = %e, "failed to flush before restore");
        }

        dup2(self.saved, channel.fd())
            .map_err(|source| CaptureError::Restore { channel, source })?;
        self.restored = true;
        REDIRECTED.lock()[channel.index()] = false;

        if let Err(e) = close(self.saved) {
            warn!(%channel, fd = self.saved, error = %e, "failed to close saved descriptor");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "redirect_tests.rs"]
mod tests;
