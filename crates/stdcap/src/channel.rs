// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Standard streams a capture can intercept.

use std::fmt;
use std::io::{self, Write};
use std::os::fd::RawFd;
use std::str::FromStr;

/// A process-wide standard output stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Channel {
    /// File descriptor 1
    #[default]
    Stdout,
    /// File descriptor 2
    Stderr,
}

impl Channel {
    /// Raw descriptor number backing this stream
    pub fn fd(self) -> RawFd {
        match self {
            Channel::Stdout => 1,
            Channel::Stderr => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Stdout => "stdout",
            Channel::Stderr => "stderr",
        }
    }

    /// Flush the Rust-side buffer of the stream down to its descriptor.
    ///
    /// `std::io::stdout()` is line buffered, so a partial line written
    /// before a redirection swap would otherwise land on the wrong side.
    pub fn flush(self) -> io::Result<()> {
        match self {
            Channel::Stdout => io::stdout().flush(),
            Channel::Stderr => io::stderr().flush(),
        }
    }

    /// Write raw bytes to the stream through the Rust std handle.
    pub fn write_all(self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Channel::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            Channel::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(bytes)?;
                err.flush()
            }
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Channel::Stdout => 0,
            Channel::Stderr => 1,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown channel name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown channel '{0}', expected 'stdout' or 'stderr'")]
pub struct ParseChannelError(pub String);

impl FromStr for Channel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("stdout") {
            Ok(Channel::Stdout)
        } else if s.eq_ignore_ascii_case("stderr") {
            Ok(Channel::Stderr)
        } else {
            Err(ParseChannelError(s.to_string()))
        }
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
