// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture errors.

use crate::capture::CaptureState;
use crate::channel::Channel;
use thiserror::Error;

/// Errors raised while opening or closing a capture window
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The original destination could not be put back. The stream is left
    /// pointing at the capture buffer, so callers must not continue as if
    /// output were flowing normally.
    #[error("failed to restore {channel}: {source}")]
    Restore {
        channel: Channel,
        #[source]
        source: nix::Error,
    },

    #[error("a capture is already active on {0}")]
    AlreadyActive(Channel),

    #[error("capture cannot begin from the {0} state, construct a new one")]
    NotReusable(CaptureState),

    #[error("failed to redirect {channel}: {source}")]
    Redirect {
        channel: Channel,
        #[source]
        source: nix::Error,
    },

    #[error("failed to create capture buffer: {0}")]
    Buffer(#[source] std::io::Error),

    #[error("failed to replay captured text to {channel}: {source}")]
    Replay {
        channel: Channel,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to flush {channel}: {source}")]
    Flush {
        channel: Channel,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
