// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture configuration.

use crate::channel::Channel;

/// Options for a single capture window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaptureOptions {
    pub channel: Channel,
    /// Write the captured text to the original destination once restored
    pub replay: bool,
}

impl CaptureOptions {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            replay: false,
        }
    }

    pub fn stdout() -> Self {
        Self::new(Channel::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(Channel::Stderr)
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_replay(mut self, replay: bool) -> Self {
        self.replay = replay;
        self
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
